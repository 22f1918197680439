//! Send pipeline: optimistic update, responder call, reconciliation.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use kaiwa_core::conversation::{Conversation, ConversationStore, Message, filter_conversations};
use kaiwa_core::error::{ChatError, Result};
use kaiwa_core::responder::{ReplyRequest, Responder};
use tokio::sync::RwLock;

/// User-facing notice shown when a send fails.
pub const RESPONDER_FAILURE_NOTICE: &str = "Avatar could not respond.";

/// Settled result of a send.
///
/// A send is a two-phase operation: the optimistic local mutation commits
/// synchronously, then the responder call settles into one of these
/// outcomes. Failure never rolls the optimistic mutation back.
#[derive(Debug, Clone)]
pub enum SendOutcome {
    /// Nothing happened: no active conversation, or blank input. No
    /// mutation was applied and no request was issued.
    Ignored,
    /// The responder produced a reply. The reply was appended to the
    /// conversation unless it vanished from the store in the meantime.
    Replied {
        conversation_id: String,
        reply: String,
    },
    /// The responder call failed. The optimistically committed user message
    /// is preserved; the user may retry by sending again.
    Failed {
        conversation_id: String,
        error: ChatError,
    },
}

impl SendOutcome {
    /// The notice to surface for failed sends, `None` otherwise.
    pub fn failure_notice(&self) -> Option<&'static str> {
        matches!(self, SendOutcome::Failed { .. }).then_some(RESPONDER_FAILURE_NOTICE)
    }
}

/// Orchestrates the full send/edit-resubmit flow against a shared store.
///
/// The pipeline holds the store behind `Arc<RwLock<_>>`; every store
/// mutation runs under the write lock and to completion, and the only
/// suspension point is the responder call, made with no lock held. Each
/// send captures its conversation id at dispatch and reconciles by id, so
/// concurrent sends against different conversations settle independently.
///
/// Callers that want fire-and-forget semantics wrap the pipeline in an
/// `Arc` and spawn [`SendPipeline::send`]; every dispatched send settles
/// exactly once, through either the success or the failure path.
pub struct SendPipeline {
    store: Arc<RwLock<ConversationStore>>,
    responder: Arc<dyn Responder>,
    /// Stable identifier of the avatar being trained, forwarded to the
    /// responder with every request.
    actor_id: String,
    /// Number of sends currently awaiting a reply.
    in_flight: AtomicUsize,
}

impl SendPipeline {
    /// Creates a pipeline over `store`, replying as `actor_id`.
    pub fn new(
        store: Arc<RwLock<ConversationStore>>,
        responder: Arc<dyn Responder>,
        actor_id: impl Into<String>,
    ) -> Self {
        Self {
            store,
            responder,
            actor_id: actor_id.into(),
            in_flight: AtomicUsize::new(0),
        }
    }

    /// Shared handle to the underlying store, for read-side consumers.
    pub fn store(&self) -> Arc<RwLock<ConversationStore>> {
        self.store.clone()
    }

    /// True while at least one send is awaiting its reply.
    pub fn is_awaiting_reply(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Sends `input` to the active conversation.
    ///
    /// Preconditions: an active conversation exists and the trimmed input is
    /// non-empty; otherwise the call is a no-op returning
    /// [`SendOutcome::Ignored`].
    ///
    /// The optimistic mutation commits under the write lock before the
    /// responder is invoked: an open edit session whose position is still in
    /// bounds replaces that message in place, anything else appends a new
    /// user message (an exclusive branch). The edit session is cleared
    /// either way. Reconciliation re-resolves the conversation by id and
    /// silently drops the reply if the id no longer resolves.
    ///
    /// # Errors
    ///
    /// Only structural store errors propagate, and those indicate a bug in
    /// the calling flow. Responder failure is not an `Err`; it settles as
    /// [`SendOutcome::Failed`].
    pub async fn send(&self, input: &str) -> Result<SendOutcome> {
        let text = input.trim();
        if text.is_empty() {
            return Ok(SendOutcome::Ignored);
        }

        let conversation_id = {
            let mut store = self.store.write().await;
            let Some(id) = store.active_id().map(str::to_string) else {
                return Ok(SendOutcome::Ignored);
            };

            let len = store.get(&id).map(|c| c.messages.len()).unwrap_or(0);
            match store.edit().position() {
                Some(position) if position < len => {
                    store.replace_message_at(&id, position, text)?;
                }
                _ => {
                    store.append_message(&id, Message::user(text))?;
                }
            }
            store.cancel_edit();
            id
        };

        self.in_flight.fetch_add(1, Ordering::SeqCst);
        let result = self
            .responder
            .respond(ReplyRequest {
                actor_id: self.actor_id.clone(),
                message: text.to_string(),
            })
            .await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        match result {
            Ok(envelope) => {
                let reply = envelope.reply_text();
                let mut store = self.store.write().await;
                if store.get(&conversation_id).is_some() {
                    store.append_message(&conversation_id, Message::responder(reply.clone()))?;
                } else {
                    tracing::debug!(
                        "dropping reply for vanished conversation {}",
                        conversation_id
                    );
                }
                Ok(SendOutcome::Replied {
                    conversation_id,
                    reply,
                })
            }
            Err(error) => {
                tracing::warn!(
                    "responder call failed for conversation {}: {}",
                    conversation_id,
                    error
                );
                Ok(SendOutcome::Failed {
                    conversation_id,
                    error,
                })
            }
        }
    }

    /// Creates a new conversation and makes it active.
    pub async fn create_conversation(&self) -> String {
        self.store.write().await.create()
    }

    /// Switches the active conversation, resetting the edit session.
    pub async fn select_conversation(&self, id: &str) -> Result<()> {
        self.store.write().await.select(id)
    }

    /// Opens an edit session on the active conversation and returns the
    /// target content for composer pre-fill.
    pub async fn begin_edit(&self, position: usize) -> Result<String> {
        self.store.write().await.begin_edit(position)
    }

    /// Returns the composer to compose-new mode.
    pub async fn cancel_edit(&self) {
        self.store.write().await.cancel_edit();
    }

    /// Snapshot of conversations matching `query`, in store order.
    ///
    /// Recomputed from current store state on every call; a blank query
    /// returns everything.
    pub async fn search_conversations(&self, query: &str) -> Vec<Conversation> {
        let store = self.store.read().await;
        filter_conversations(store.list(), query).cloned().collect()
    }

    /// Snapshot of a single conversation by id.
    pub async fn conversation(&self, id: &str) -> Option<Conversation> {
        self.store.read().await.get(id).cloned()
    }
}
