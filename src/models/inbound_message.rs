use crate::types::{DisplayName, GroupId, UnixTimestamp, UserId};

/// A message as delivered by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub group_id: GroupId,
    /// The author, or the sender id when the transport has no separate author.
    pub user_id: UserId,
    /// `None` when the transport failed to retrieve the contact's name.
    pub display_name: Option<DisplayName>,
    pub is_group_chat: bool,
    pub text: String,
    /// Arrival time; the counting period is derived from this, never from the text.
    pub timestamp: UnixTimestamp,
}

impl InboundMessage {
    pub fn new(
        group_id: &str,
        user_id: &str,
        display_name: Option<&str>,
        text: &str,
        timestamp: UnixTimestamp,
    ) -> Self {
        InboundMessage {
            group_id: group_id.to_string(),
            user_id: user_id.to_string(),
            display_name: display_name.map(str::to_string),
            is_group_chat: true,
            text: text.to_string(),
            timestamp,
        }
    }

    /// Builds a message from a one-to-one chat, which the engine ignores.
    pub fn direct(user_id: &str, text: &str, timestamp: UnixTimestamp) -> Self {
        InboundMessage {
            is_group_chat: false,
            ..InboundMessage::new(user_id, user_id, None, text, timestamp)
        }
    }
}
