//! HTTP DTOs for the chat endpoint.
//!
//! The response body is the domain `ChatResponse` serialized directly;
//! only the request needs its own type.

use serde::Deserialize;

use crate::domain::chat::ChatMessage;

/// Request body for `POST /chat`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    /// The visitor's current message.
    pub message: String,
    /// Prior conversation turns, oldest first. Optional; defaults to empty.
    #[serde(default)]
    pub history: Vec<ChatMessage>,
}
