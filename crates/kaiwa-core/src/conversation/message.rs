//! Conversation message types.

use serde::{Deserialize, Serialize};

/// Represents the author of a message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Message written by the user.
    User,
    /// Message produced by the remote responder.
    Responder,
}

/// A single message in a conversation.
///
/// Messages are immutable once appended; the only sanctioned mutation is the
/// targeted content replacement performed by
/// [`ConversationStore::replace_message_at`](super::ConversationStore::replace_message_at),
/// which never changes role or position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The author of the message.
    pub role: MessageRole,
    /// The content of the message. May contain markdown-like markup, which
    /// the core treats as opaque text.
    pub content: String,
}

impl Message {
    /// Creates a user-authored message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    /// Creates a responder-authored message.
    pub fn responder(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Responder,
            content: content.into(),
        }
    }
}
