//! Conversation messages and the bounded history window.

use serde::{Deserialize, Serialize};

/// Maximum number of history turns ever read by the conversational fallback.
///
/// Older entries are ignored, not deleted - truncation is a view, not a
/// mutation of the caller's history.
pub const HISTORY_WINDOW: usize = 10;

/// Who authored a conversation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// A single turn in the conversation, immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    /// Creates an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }
}

/// Returns the most recent [`HISTORY_WINDOW`] entries of `history`,
/// oldest first.
pub fn recent_window(history: &[ChatMessage]) -> &[ChatMessage] {
    let skip = history.len().saturating_sub(HISTORY_WINDOW);
    &history[skip..]
}
