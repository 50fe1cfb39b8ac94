//! ChatOrchestrator - classify, dispatch, degrade, respond.
//!
//! The only branching component. Every path terminates in a valid,
//! suggestion-bearing response; there are no retries at this layer.

use std::sync::Arc;

use crate::domain::chat::{classify, navigation, suggest, ChatMessage, ChatResponse, ImageUrlBuilder, Intent};
use crate::ports::{ContentProvider, GenerativeBackend};

use super::converse::ConversationFallback;
use super::recommend::RecommendationEngine;
use super::search::SearchAggregator;

/// Top-level entry point composing the intent strategies.
pub struct ChatOrchestrator {
    search: SearchAggregator,
    recommend: RecommendationEngine,
    converse: ConversationFallback,
}

impl ChatOrchestrator {
    pub fn new(
        provider: Arc<dyn ContentProvider>,
        backend: Arc<dyn GenerativeBackend>,
        images: ImageUrlBuilder,
        persona: impl Into<String>,
    ) -> Self {
        Self {
            search: SearchAggregator::new(provider.clone(), images.clone()),
            recommend: RecommendationEngine::new(provider, images),
            converse: ConversationFallback::new(backend, persona),
        }
    }

    /// Classifies `message` and dispatches to the matching strategy.
    pub async fn respond(&self, message: &str, history: &[ChatMessage]) -> ChatResponse {
        let intent = classify(message);
        tracing::debug!(?intent, "classified message");

        match intent {
            Intent::Search { query } => self.search.search(&query, message).await,
            Intent::Navigate { target } => navigation::resolve(target),
            Intent::Recommend {
                genre,
                year,
                media_type,
            } => {
                self.recommend
                    .recommend(genre.as_deref(), year.as_deref(), media_type)
                    .await
            }
            Intent::General => {
                let text = self.converse.converse(message, history).await;
                let suggestions = suggest(message, &text);
                ChatResponse::text(text, suggestions)
            }
        }
    }
}
