//! The response envelope returned for every chat message.

use serde::{Deserialize, Serialize};

use super::media::MediaResult;

/// Upper bound on media results per response.
pub const MAX_MEDIA_RESULTS: usize = 4;

/// Upper bound on suggestion chips per response.
pub const MAX_SUGGESTIONS: usize = 3;

/// Structured chat response. Only the fields relevant to the chosen intent
/// are populated; unused fields are absent from the JSON, not null-filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    /// Human-readable reply text.
    pub message: String,

    /// Follow-up suggestion chips, at most [`MAX_SUGGESTIONS`].
    pub suggestions: Vec<String>,

    /// Aggregated media results, at most [`MAX_MEDIA_RESULTS`]. Never
    /// populated for navigation intents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_results: Option<Vec<MediaResult>>,

    /// Client route to navigate to. Never populated for search or
    /// recommendation intents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation: Option<String>,
}

impl ChatResponse {
    /// Creates a text-only response, enforcing the suggestion cap.
    pub fn text(message: impl Into<String>, mut suggestions: Vec<String>) -> Self {
        suggestions.truncate(MAX_SUGGESTIONS);
        Self {
            message: message.into(),
            suggestions,
            media_results: None,
            navigation: None,
        }
    }

    /// Attaches media results, enforcing the result cap.
    pub fn with_media(mut self, mut results: Vec<MediaResult>) -> Self {
        results.truncate(MAX_MEDIA_RESULTS);
        self.media_results = Some(results);
        self
    }

    /// Attaches a navigation directive.
    pub fn with_navigation(mut self, path: impl Into<String>) -> Self {
        self.navigation = Some(path.into());
        self
    }
}
