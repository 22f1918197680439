//! Error types for the Kaiwa conversation core.

use thiserror::Error;

/// A shared error type for the conversation core.
///
/// Structural variants (`NotFound`, `OutOfRange`) indicate a caller broke the
/// store's contract; they are not expected in steady-state operation and
/// should be logged rather than swallowed. `Responder` is the one expected,
/// recoverable runtime condition.
#[derive(Error, Debug, Clone)]
pub enum ChatError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Edit targeted a message position that is no longer valid
    #[error("Message position {position} is out of range (conversation has {len} messages)")]
    OutOfRange { position: usize, len: usize },

    /// Responder call failed or returned unusable data
    #[error("Responder failure: {0}")]
    Responder(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ChatError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a Responder error
    pub fn responder(message: impl Into<String>) -> Self {
        Self::Responder(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an OutOfRange error
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }

    /// Check if this is a Responder error
    pub fn is_responder(&self) -> bool {
        matches!(self, Self::Responder(_))
    }
}

/// Conversion from String (for error messages)
impl From<String> for ChatError {
    fn from(err: String) -> Self {
        Self::Internal(err)
    }
}

/// A type alias for `Result<T, ChatError>`.
pub type Result<T> = std::result::Result<T, ChatError>;
