//! HTTP handlers for the chat endpoint.

use std::any::Any;
use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::application::ChatOrchestrator;
use crate::domain::chat::ChatResponse;

use super::dto::ChatRequest;

/// Shared application state for the chat routes.
#[derive(Clone)]
pub struct ChatAppState {
    pub orchestrator: Arc<ChatOrchestrator>,
}

impl ChatAppState {
    pub fn new(orchestrator: Arc<ChatOrchestrator>) -> Self {
        Self { orchestrator }
    }
}

/// Answer a chat message.
///
/// POST /chat
///
/// Always 200: provider and backend trouble degrade inside the
/// orchestrator into retry-suggesting responses.
pub async fn chat(
    State(app_state): State<ChatAppState>,
    Json(req): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let response = app_state
        .orchestrator
        .respond(&req.message, &req.history)
        .await;
    Json(response)
}

/// Liveness probe.
///
/// GET /health
pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Converts a handler panic into a 500 carrying a well-formed chat body,
/// so clients can render it like any other degraded response.
pub fn handle_panic(_err: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!("chat handler panicked");
    let body = ChatResponse::text(
        "Something went wrong on our end. Please try again.",
        vec![
            "Try again".to_string(),
            "Search for a movie".to_string(),
            "Browse genres".to_string(),
        ],
    );
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

/// Rewrites the timeout layer's bare 408 into a chat-shaped body, so every
/// response the service emits parses as a [`ChatResponse`].
pub async fn timeout_response(response: Response) -> Response {
    if response.status() != StatusCode::REQUEST_TIMEOUT {
        return response;
    }
    tracing::warn!("request hit the server-level timeout");
    let body = ChatResponse::text(
        "That took too long on our end. Please try again.",
        vec![
            "Try again".to_string(),
            "Search for a movie".to_string(),
            "Browse genres".to_string(),
        ],
    );
    (StatusCode::REQUEST_TIMEOUT, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_as_chat_response(response: Response) -> ChatResponse {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn panic_handler_produces_chat_shaped_500() {
        let response = handle_panic(Box::new("boom"));

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_as_chat_response(response).await;
        assert!(body.message.contains("Something went wrong"));
        assert_eq!(body.suggestions.len(), 3);
        assert!(body.media_results.is_none());
    }

    #[tokio::test]
    async fn timeout_responses_are_rewritten_to_chat_bodies() {
        let bare = StatusCode::REQUEST_TIMEOUT.into_response();

        let response = timeout_response(bare).await;

        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
        let body = body_as_chat_response(response).await;
        assert!(body.message.contains("too long"));
        assert!(!body.suggestions.is_empty());
    }

    #[tokio::test]
    async fn non_timeout_responses_pass_through_untouched() {
        let response = timeout_response(StatusCode::OK.into_response()).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
