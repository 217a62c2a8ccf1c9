#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmojiTallyConfig {
    /// Rendered for users without a known display name.
    pub unknown_user_label: &'static str,
    /// Messages starting with this prefix are commands and are never counted.
    pub command_prefix: &'static str,
}
