//! Conversation collection ownership and lifecycle.

use chrono::{Duration, Utc};
use uuid::Uuid;

use super::edit::EditSession;
use super::message::{Message, MessageRole};
use super::model::Conversation;
use crate::error::{ChatError, Result};

/// The single source of truth for conversations.
///
/// `ConversationStore` owns:
/// - The full collection of conversations, ordered newest-created first
/// - The active-conversation selection (nullable if the store is empty)
/// - The composer [`EditSession`], so that switching the active conversation
///   always resets it in one place
///
/// All mutations are synchronous and run to completion; the store expects
/// its host to serialize access (the application layer wraps it in an
/// `Arc<RwLock<_>>`). Conversations are never deleted.
#[derive(Debug, Default)]
pub struct ConversationStore {
    /// All conversations, newest-created first
    conversations: Vec<Conversation>,
    /// Id of the active conversation, if any
    active_id: Option<String>,
    /// Composer state for the active conversation
    edit: EditSession,
}

impl ConversationStore {
    /// Creates an empty store with no active conversation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with the starter conversations shown to a fresh
    /// avatar, newest first, with the first one active.
    ///
    /// `avatar_label` is interpolated into the starter reply text.
    pub fn with_starter_conversations(avatar_label: &str) -> Self {
        let now = Utc::now();
        let conversations = vec![
            Conversation {
                id: "conv-1".to_string(),
                title: "Interview Prep".to_string(),
                preview: "Let's polish your elevator pitch for recruiters.".to_string(),
                updated_at: now - Duration::hours(1),
                messages: vec![
                    Message::user("Can you help me prep for marketing interviews?"),
                    Message::responder(format!(
                        "Absolutely! Here's how I'd introduce myself and share two tailored examples when speaking as {avatar_label}."
                    )),
                ],
            },
            Conversation {
                id: "conv-2".to_string(),
                title: "Cover Letter Draft".to_string(),
                preview: "This opening paragraph feels confident and personal.".to_string(),
                updated_at: now - Duration::days(1),
                messages: vec![
                    Message::user("Draft a short cover letter for a growth strategist role."),
                    Message::responder(
                        "Here's a warm, metrics-driven intro paragraph that highlights your impact in previous growth roles.",
                    ),
                ],
            },
            Conversation {
                id: "conv-3".to_string(),
                title: "Networking Reply".to_string(),
                preview: "Use gratitude + next steps to keep things moving.".to_string(),
                updated_at: now - Duration::days(2),
                messages: vec![
                    Message::user("How should I reply to a recruiter asking for availability?"),
                    Message::responder(
                        "Acknowledge their note, offer two time slots, and restate your excitement for the conversation.",
                    ),
                ],
            },
        ];

        Self {
            active_id: conversations.first().map(|c| c.id.clone()),
            conversations,
            edit: EditSession::Idle,
        }
    }

    /// Creates a new empty conversation ahead of all existing ones, makes it
    /// active, and resets the edit session.
    ///
    /// # Returns
    ///
    /// The id of the new conversation.
    pub fn create(&mut self) -> String {
        let conversation = Conversation::new(Uuid::new_v4().to_string());
        let id = conversation.id.clone();
        self.conversations.insert(0, conversation);
        self.active_id = Some(id.clone());
        self.edit = EditSession::Idle;
        id
    }

    /// Makes `id` the active conversation and resets the edit session.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` and leaves state unchanged if `id` does not
    /// reference a conversation in the store.
    pub fn select(&mut self, id: &str) -> Result<()> {
        if self.get(id).is_none() {
            return Err(ChatError::not_found("conversation", id));
        }
        self.active_id = Some(id.to_string());
        self.edit = EditSession::Idle;
        Ok(())
    }

    /// Appends `message` to the conversation's sequence.
    ///
    /// Refreshes the preview and freshness marker; the first message ever,
    /// when user-authored, also sets the title.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if `id` does not reference a conversation.
    pub fn append_message(&mut self, id: &str, message: Message) -> Result<()> {
        self.conversation_mut(id)?.append(message);
        Ok(())
    }

    /// Replaces the content of the message at `position`, keeping its role
    /// and position, then refreshes preview and freshness.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if `id` is unknown, `OutOfRange` if `position`
    /// does not reference an existing message.
    pub fn replace_message_at(
        &mut self,
        id: &str,
        position: usize,
        content: impl Into<String>,
    ) -> Result<()> {
        self.conversation_mut(id)?.replace_at(position, content.into())
    }

    /// Returns conversations in store order (newest-created first).
    pub fn list(&self) -> &[Conversation] {
        &self.conversations
    }

    /// Looks up a conversation by id.
    pub fn get(&self, id: &str) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == id)
    }

    /// Returns the id of the active conversation, if any.
    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    /// Returns the active conversation, if any.
    pub fn active(&self) -> Option<&Conversation> {
        self.active_id.as_deref().and_then(|id| self.get(id))
    }

    /// Opens an edit session targeting `position` in the active
    /// conversation.
    ///
    /// # Returns
    ///
    /// The current content of the target message, for composer pre-fill.
    ///
    /// # Errors
    ///
    /// Returns `Internal` if there is no active conversation or the target
    /// is not a user message, `OutOfRange` if `position` is invalid. On any
    /// error the edit session is left idle so the composer falls back to
    /// compose-new mode.
    pub fn begin_edit(&mut self, position: usize) -> Result<String> {
        let (len, target) = match self.active() {
            Some(active) => (
                active.messages.len(),
                active
                    .messages
                    .get(position)
                    .map(|m| (m.role, m.content.clone())),
            ),
            None => return Err(ChatError::internal("no active conversation to edit")),
        };

        self.edit = EditSession::Idle;
        let Some((role, content)) = target else {
            return Err(ChatError::OutOfRange { position, len });
        };
        if role != MessageRole::User {
            return Err(ChatError::internal(format!(
                "message at position {position} is not a user message"
            )));
        }
        self.edit = EditSession::Editing { position };
        Ok(content)
    }

    /// Returns the composer to compose-new mode.
    pub fn cancel_edit(&mut self) {
        self.edit = EditSession::Idle;
    }

    /// Returns the current composer state.
    pub fn edit(&self) -> EditSession {
        self.edit
    }

    fn conversation_mut(&mut self, id: &str) -> Result<&mut Conversation> {
        self.conversations
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| ChatError::not_found("conversation", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_inserts_newest_first_and_activates() {
        let mut store = ConversationStore::new();

        let first = store.create();
        let second = store.create();

        assert_ne!(first, second);
        assert_eq!(store.active_id(), Some(second.as_str()));
        let ids: Vec<_> = store.list().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec![second.as_str(), first.as_str()]);
    }

    #[test]
    fn exactly_one_active_conversation() {
        let mut store = ConversationStore::new();
        assert!(store.active().is_none());

        for _ in 0..5 {
            store.create();
        }

        let active = store.active().expect("store is non-empty");
        assert_eq!(Some(active.id.as_str()), store.active_id());
    }

    #[test]
    fn select_unknown_id_leaves_state_unchanged() {
        let mut store = ConversationStore::new();
        let id = store.create();

        let err = store.select("missing").unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(store.active_id(), Some(id.as_str()));
    }

    #[test]
    fn append_increases_length_and_preserves_order() {
        let mut store = ConversationStore::new();
        let id = store.create();

        for n in 0..4 {
            store
                .append_message(&id, Message::user(format!("message {n}")))
                .unwrap();
        }

        let conversation = store.get(&id).unwrap();
        assert_eq!(conversation.messages.len(), 4);
        let contents: Vec<_> = conversation
            .messages
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(contents, vec!["message 0", "message 1", "message 2", "message 3"]);
    }

    #[test]
    fn append_to_unknown_conversation_fails() {
        let mut store = ConversationStore::new();

        let err = store.append_message("missing", Message::user("hi")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn select_and_create_reset_the_edit_session() {
        let mut store = ConversationStore::new();
        let first = store.create();
        store.append_message(&first, Message::user("edit me")).unwrap();

        store.begin_edit(0).unwrap();
        assert!(!store.edit().is_idle());

        store.select(&first).unwrap();
        assert!(store.edit().is_idle());

        store.begin_edit(0).unwrap();
        store.create();
        assert!(store.edit().is_idle());
    }

    #[test]
    fn begin_edit_returns_content_for_prefill() {
        let mut store = ConversationStore::new();
        let id = store.create();
        store.append_message(&id, Message::user("original text")).unwrap();

        let prefill = store.begin_edit(0).unwrap();

        assert_eq!(prefill, "original text");
        assert_eq!(store.edit().position(), Some(0));
    }

    #[test]
    fn begin_edit_rejects_responder_messages() {
        let mut store = ConversationStore::new();
        let id = store.create();
        store.append_message(&id, Message::user("hi")).unwrap();
        store.append_message(&id, Message::responder("hello")).unwrap();

        assert!(store.begin_edit(1).is_err());
        assert!(store.edit().is_idle());
    }

    #[test]
    fn begin_edit_rejects_bad_positions() {
        let mut store = ConversationStore::new();
        let id = store.create();
        store.append_message(&id, Message::user("hi")).unwrap();

        let err = store.begin_edit(7).unwrap_err();
        assert!(err.is_out_of_range());
        assert!(store.edit().is_idle());
    }

    #[test]
    fn starter_conversations_are_seeded_in_order() {
        let store = ConversationStore::with_starter_conversations("taro");

        let titles: Vec<_> = store.list().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Interview Prep", "Cover Letter Draft", "Networking Reply"]
        );
        assert_eq!(store.active_id(), Some("conv-1"));

        let first = store.get("conv-1").unwrap();
        assert_eq!(first.messages.len(), 2);
        assert!(first.messages[1].content.contains("taro"));
    }
}
