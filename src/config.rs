use crate::models::EmojiTallyConfig;

pub const DEFAULT_EMOJI_TALLY_CONFIG: EmojiTallyConfig = EmojiTallyConfig {
    unknown_user_label: "Usuário",
    command_prefix: "!emoji",
};
