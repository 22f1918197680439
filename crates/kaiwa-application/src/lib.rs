//! Application layer for Kaiwa.
//!
//! Orchestrates the conversation store and the remote responder: the send
//! pipeline applies the optimistic local mutation, invokes the responder,
//! and reconciles the settled result back into the store.

mod pipeline;

pub use pipeline::{RESPONDER_FAILURE_NOTICE, SendOutcome, SendPipeline};
