//! Conversation domain module.
//!
//! This module contains the conversation model, the store that owns the
//! collection, and the supporting composer/search state.
//!
//! # Module Structure
//!
//! - `model`: Core conversation domain model (`Conversation`)
//! - `message`: Message types (`MessageRole`, `Message`)
//! - `label`: Title/preview truncation and freshness labels
//! - `edit`: Composer edit-session state (`EditSession`)
//! - `search`: Sidebar search over conversation summaries
//! - `store`: Collection ownership and lifecycle (`ConversationStore`)

mod edit;
mod label;
mod message;
mod model;
mod search;
mod store;

// Re-export public API
pub use edit::EditSession;
pub use label::{PREVIEW_LIMIT, TITLE_LIMIT, freshness_label, truncate_label};
pub use message::{Message, MessageRole};
pub use model::Conversation;
pub use search::filter_conversations;
pub use store::ConversationStore;
