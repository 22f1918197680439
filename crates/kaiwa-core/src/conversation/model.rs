//! Conversation domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::label::{PREVIEW_LIMIT, TITLE_LIMIT, freshness_label, truncate_label};
use super::message::{Message, MessageRole};
use crate::error::{ChatError, Result};

/// Title given to a conversation that has not received a message yet.
pub(crate) const DEFAULT_TITLE: &str = "New Chat";

/// Preview shown for a conversation that has not received a message yet.
pub(crate) const DEFAULT_PREVIEW: &str = "Start a new conversation to train your avatar.";

/// A named, ordered thread of messages between the user and the responder.
///
/// A conversation carries:
/// - An opaque id, assigned at creation and never reused
/// - A short title, derived from the first user message and stable afterwards
/// - A preview reflecting the most recently received message (either role)
/// - A freshness timestamp, refreshed on every mutation
/// - The ordered message sequence, append-only except for the targeted
///   single-position edit
///
/// Mutations go through [`ConversationStore`](super::ConversationStore); the
/// message order never changes by any operation other than append or
/// targeted-position replace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    /// Unique conversation identifier
    pub id: String,
    /// Human-readable conversation title
    pub title: String,
    /// Short label reflecting the most recent message
    pub preview: String,
    /// Timestamp of the last mutation
    pub updated_at: DateTime<Utc>,
    /// Ordered message sequence, insertion order = conversation order
    pub messages: Vec<Message>,
}

impl Conversation {
    /// Creates an empty conversation with default title and preview.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: DEFAULT_TITLE.to_string(),
            preview: DEFAULT_PREVIEW.to_string(),
            updated_at: Utc::now(),
            messages: Vec::new(),
        }
    }

    /// Renders the relative freshness label for this conversation.
    pub fn freshness(&self, now: DateTime<Utc>) -> String {
        freshness_label(self.updated_at, now)
    }

    /// Appends a message, refreshing preview and freshness.
    ///
    /// The first message ever, when user-authored, also names the
    /// conversation from its truncated content.
    pub(crate) fn append(&mut self, message: Message) {
        if self.messages.is_empty() && message.role == MessageRole::User {
            self.title = truncate_label(&message.content, TITLE_LIMIT);
        }
        self.preview = truncate_label(&message.content, PREVIEW_LIMIT);
        self.updated_at = Utc::now();
        self.messages.push(message);
    }

    /// Replaces the content of the message at `position`, keeping its role
    /// and position, then refreshes preview and freshness.
    pub(crate) fn replace_at(&mut self, position: usize, content: String) -> Result<()> {
        let len = self.messages.len();
        let Some(slot) = self.messages.get_mut(position) else {
            return Err(ChatError::OutOfRange { position, len });
        };
        self.preview = truncate_label(&content, PREVIEW_LIMIT);
        slot.content = content;
        self.updated_at = Utc::now();
        Ok(())
    }
}
