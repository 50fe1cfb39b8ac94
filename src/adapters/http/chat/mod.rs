//! HTTP adapter for the chat endpoint.
//!
//! Exposes `POST /chat` plus a health probe. The endpoint never reports
//! a business failure: degraded responses ride out as HTTP 200 with
//! retry suggestions, and only a handler panic becomes a 500.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::ChatRequest;
pub use handlers::{handle_panic, timeout_response, ChatAppState};
pub use routes::routes;
