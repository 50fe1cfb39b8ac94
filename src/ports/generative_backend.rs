//! Generative Backend Port - interface to the conversational text service.
//!
//! The conversational fallback assembles a prompt window; implementations
//! translate it to the backend's wire contract and hand back the first
//! usable text part.

use async_trait::async_trait;
use thiserror::Error;

/// Role vocabulary of the generative backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptRole {
    User,
    Model,
}

impl PromptRole {
    /// Wire value for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptRole::User => "user",
            PromptRole::Model => "model",
        }
    }
}

/// One turn of the prompt sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTurn {
    pub role: PromptRole,
    pub text: String,
}

impl PromptTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: PromptRole::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: PromptRole::Model,
            text: text.into(),
        }
    }
}

/// Failures talking to the generative backend. The conversational path
/// recovers all of these into a fixed fallback sentence.
#[derive(Debug, Clone, Error)]
pub enum BackendError {
    #[error("backend request failed: {0}")]
    Network(String),

    #[error("backend request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("backend returned status {status}")]
    Status { status: u16 },

    #[error("backend returned an unparseable body: {0}")]
    Malformed(String),

    #[error("backend returned no usable text")]
    EmptyResponse,
}

impl BackendError {
    pub fn network(message: impl Into<String>) -> Self {
        BackendError::Network(message.into())
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        BackendError::Malformed(message.into())
    }
}

/// Port for the external generative text service.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Generates a completion for the given prompt turns, ordered oldest
    /// first, and returns the first candidate's first text part.
    async fn generate(&self, turns: Vec<PromptTurn>) -> Result<String, BackendError>;
}
