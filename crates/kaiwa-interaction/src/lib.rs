//! Responder implementations.
//!
//! This crate provides the concrete collaborators behind the
//! [`Responder`](kaiwa_core::responder::Responder) contract: an HTTP client
//! for the avatar chat service and a scripted in-process responder for
//! demos and tests.

mod http_responder;
mod scripted;

pub use http_responder::HttpResponder;
pub use scripted::ScriptedResponder;
