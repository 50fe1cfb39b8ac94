//! HTTP adapters - the REST surface of the chat service.

pub mod chat;

pub use chat::{routes, ChatAppState};
