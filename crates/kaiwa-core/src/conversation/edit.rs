//! Composer edit-session state.

/// Tracks whether the composer targets a new message or an existing one.
///
/// An edit session is only meaningful for the conversation it was opened
/// against; [`ConversationStore`](super::ConversationStore) resets it to
/// [`EditSession::Idle`] whenever the active conversation changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditSession {
    /// Composing a brand new message.
    #[default]
    Idle,
    /// Replacing the content of the user message at `position` in the
    /// active conversation.
    Editing { position: usize },
}

impl EditSession {
    /// Returns the target position while editing, `None` when idle.
    pub fn position(&self) -> Option<usize> {
        match self {
            EditSession::Idle => None,
            EditSession::Editing { position } => Some(*position),
        }
    }

    /// True while no edit is in progress.
    pub fn is_idle(&self) -> bool {
        matches!(self, EditSession::Idle)
    }
}
