//! Scripted responder for demos and tests.

use std::collections::VecDeque;

use async_trait::async_trait;
use kaiwa_core::error::{ChatError, Result};
use kaiwa_core::responder::{ReplyEnvelope, ReplyRequest, Responder};
use tokio::sync::Mutex;

/// Responder that replays a fixed queue of reply envelopes.
///
/// Each call consumes the next scripted reply; once the queue is exhausted
/// every call fails, which makes the failure path reachable without a
/// network.
pub struct ScriptedResponder {
    replies: Mutex<VecDeque<ReplyEnvelope>>,
}

impl ScriptedResponder {
    /// Creates a responder that will serve `replies` in order.
    pub fn new(replies: impl IntoIterator<Item = ReplyEnvelope>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
        }
    }

    /// Number of scripted replies left.
    pub async fn remaining(&self) -> usize {
        self.replies.lock().await.len()
    }
}

#[async_trait]
impl Responder for ScriptedResponder {
    async fn respond(&self, request: ReplyRequest) -> Result<ReplyEnvelope> {
        self.replies.lock().await.pop_front().ok_or_else(|| {
            tracing::warn!("scripted responder exhausted for actor {}", request.actor_id);
            ChatError::responder("no scripted reply left")
        })
    }
}
