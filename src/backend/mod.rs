//! Backend protocol: the chat/health/reset endpoints and their wire types.

mod client;
mod types;

pub use client::{ChatBackend, HttpBackend};
pub use types::{BackendError, ChatReply, ChatRequest, ErrorBody, HealthReply};
