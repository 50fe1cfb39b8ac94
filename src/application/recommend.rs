//! RecommendationEngine - popular-listing recommendations.
//!
//! One call to the provider's popular listing for the requested media type,
//! first page only, first four entries verbatim - the provider's popularity
//! order is trusted as-is. Genre and year never filter the listing; they
//! only select the message template. That asymmetry is intentional and
//! preserved.

use std::sync::Arc;

use crate::domain::chat::{ChatResponse, ImageUrlBuilder, MediaType, MAX_MEDIA_RESULTS};
use crate::ports::{ContentProvider, SearchKind};

use super::mapping::media_result;

/// Fixed follow-up chips for every successful recommendation.
pub const RECOMMEND_SUGGESTIONS: [&str; 3] = ["Show me more", "Different genre", "Surprise me"];

const TROUBLE_MESSAGE: &str =
    "I'm having trouble getting recommendations right now. Please try again in a moment.";

const RETRY_SUGGESTIONS: [&str; 3] = ["Try again", "Popular movies", "Surprise me"];

/// Serves recommendation intents from the provider's popularity listing.
pub struct RecommendationEngine {
    provider: Arc<dyn ContentProvider>,
    images: ImageUrlBuilder,
}

impl RecommendationEngine {
    pub fn new(provider: Arc<dyn ContentProvider>, images: ImageUrlBuilder) -> Self {
        Self { provider, images }
    }

    /// Builds a recommendation response. Never fails: provider trouble
    /// degrades into a retry-suggesting response.
    pub async fn recommend(
        &self,
        genre: Option<&str>,
        year: Option<&str>,
        media_type: MediaType,
    ) -> ChatResponse {
        let page = match self.provider.popular(media_type).await {
            Ok(page) => page,
            Err(error) => {
                tracing::warn!(%error, ?media_type, "popular listing failed");
                return degraded_response();
            }
        };

        let kind = match media_type {
            MediaType::Movie => SearchKind::Movie,
            MediaType::Tv => SearchKind::Tv,
        };
        let results = page
            .results
            .iter()
            .take(MAX_MEDIA_RESULTS)
            .map(|item| media_result(kind, item, &self.images))
            .collect();

        let message = template(genre, year, media_type);
        let suggestions = RECOMMEND_SUGGESTIONS.iter().map(|s| s.to_string()).collect();
        ChatResponse::text(message, suggestions).with_media(results)
    }
}

/// Four fixed templates keyed on which of genre/year are present.
fn template(genre: Option<&str>, year: Option<&str>, media_type: MediaType) -> String {
    let noun = media_type.plural_noun();
    match (genre, year) {
        (Some(genre), Some(year)) => format!(
            "Here are some popular {} {} from {} you might enjoy!",
            genre, noun, year
        ),
        (Some(genre), None) => format!("Here are some great {} {} I think you'll love!", genre, noun),
        (None, Some(year)) => format!("Here are some popular {} from {}!", noun, year),
        (None, None) => format!("Here are some popular {} everyone's talking about!", noun),
    }
}

fn degraded_response() -> ChatResponse {
    ChatResponse::text(
        TROUBLE_MESSAGE,
        RETRY_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
    )
}
