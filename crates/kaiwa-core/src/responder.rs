//! Responder service contract.
//!
//! The remote responder turns a user message into reply text spoken as the
//! avatar. Implementations live outside the core (see the interaction
//! crate); the send pipeline depends only on this trait and on the reply
//! envelope shape defined here.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Fixed reply used when a success response carries no usable reply text.
pub const FALLBACK_REPLY: &str = "I'm processing your instructions.";

/// A request for a reply from the responder service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplyRequest {
    /// Stable identifier of the avatar that owns the conversation. This is
    /// the trained persona's handle, not a conversation id.
    pub actor_id: String,
    /// The trimmed user message text.
    pub message: String,
}

/// Success envelope returned by the responder service.
///
/// The service answers in one of two shapes: a batch wrapper
/// (`{"data": [{"reply": ...}]}`) or a flat reply (`{"reply": ...}`). Both
/// deserialize into this envelope; [`ReplyEnvelope::reply_text`] resolves
/// them in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyEnvelope {
    /// Batch reply entries, first one wins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<ReplyItem>>,
    /// Flat reply text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
}

/// One entry of the batch reply shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
}

impl ReplyEnvelope {
    /// Builds the flat reply shape. Mostly useful for tests and scripted
    /// responders.
    pub fn flat(reply: impl Into<String>) -> Self {
        Self {
            data: None,
            reply: Some(reply.into()),
        }
    }

    /// Builds the batch reply shape with a single entry.
    pub fn batch(reply: impl Into<String>) -> Self {
        Self {
            data: Some(vec![ReplyItem {
                reply: Some(reply.into()),
            }]),
            reply: None,
        }
    }

    /// Extracts the reply text, trying `data[0].reply`, then `reply`, then
    /// [`FALLBACK_REPLY`].
    ///
    /// Empty strings fall through to the next rung, so a present-but-blank
    /// field never produces a blank responder message.
    pub fn reply_text(&self) -> String {
        self.data
            .as_deref()
            .and_then(|items| items.first())
            .and_then(|item| item.reply.as_deref())
            .filter(|reply| !reply.is_empty())
            .or_else(|| self.reply.as_deref().filter(|reply| !reply.is_empty()))
            .unwrap_or(FALLBACK_REPLY)
            .to_string()
    }
}

/// Produces reply text for a given avatar and message.
///
/// The contract is transport-agnostic: any transport-level error, non-2xx
/// status, or unparseable body is reported uniformly as
/// [`ChatError::Responder`](crate::ChatError::Responder). The core draws no
/// retry distinction.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Requests a reply for `request.message`, spoken as
    /// `request.actor_id`.
    async fn respond(&self, request: ReplyRequest) -> Result<ReplyEnvelope>;
}
