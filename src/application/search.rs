//! SearchAggregator - concurrent three-way catalog fan-out.
//!
//! One query fans out to the movie, tv, and person indexes concurrently.
//! Each provider outcome is isolated: a failed call contributes zero
//! results instead of aborting the response, and only total failure
//! degrades. Per-provider lists are truncated to two entries, concatenated
//! movies, then tv, then people, and capped at four overall.

use std::sync::Arc;

use futures::future;

use crate::domain::chat::{suggest, ChatResponse, ImageUrlBuilder, MediaResult, MAX_MEDIA_RESULTS};
use crate::ports::{ContentProvider, SearchKind};

use super::mapping::media_result;

/// How many entries each provider contributes before the overall cap.
pub const RESULTS_PER_PROVIDER: usize = 2;

const TROUBLE_MESSAGE: &str =
    "I'm having trouble searching right now. Please try again in a moment.";

const RETRY_SUGGESTIONS: [&str; 3] = ["Try again", "Browse popular movies", "Get a recommendation"];

/// Aggregates catalog search results across the three provider indexes.
pub struct SearchAggregator {
    provider: Arc<dyn ContentProvider>,
    images: ImageUrlBuilder,
}

impl SearchAggregator {
    pub fn new(provider: Arc<dyn ContentProvider>, images: ImageUrlBuilder) -> Self {
        Self { provider, images }
    }

    /// Runs the fan-out for the cleaned `query` and builds the aggregated
    /// response; `user_message` is the raw message the query was derived
    /// from, which feeds the suggestion heuristic. Never fails: provider
    /// trouble degrades into a retry-suggesting response.
    pub async fn search(&self, query: &str, user_message: &str) -> ChatResponse {
        let (movies, tv, people) = future::join3(
            self.provider.search(SearchKind::Movie, query),
            self.provider.search(SearchKind::Tv, query),
            self.provider.search(SearchKind::Person, query),
        )
        .await;

        if movies.is_err() && tv.is_err() && people.is_err() {
            tracing::warn!(query, "all provider searches failed");
            return degraded_response();
        }

        let mut merged: Vec<MediaResult> = Vec::new();
        let mut total: u32 = 0;

        for (kind, outcome) in [
            (SearchKind::Movie, movies),
            (SearchKind::Tv, tv),
            (SearchKind::Person, people),
        ] {
            match outcome {
                Ok(page) => {
                    total += page.total_results;
                    merged.extend(
                        page.results
                            .iter()
                            .take(RESULTS_PER_PROVIDER)
                            .map(|item| media_result(kind, item, &self.images)),
                    );
                }
                Err(error) => {
                    tracing::warn!(?kind, %error, "provider search failed, contributing no results");
                }
            }
        }

        merged.truncate(MAX_MEDIA_RESULTS);

        let message = summary(query, merged.first(), total);
        let suggestions = suggest(user_message, &message);
        ChatResponse::text(message, suggestions).with_media(merged)
    }
}

/// Synthesizes the summary sentence from the top result of the merged,
/// truncated list - not from whichever provider had the most matches.
fn summary(query: &str, top: Option<&MediaResult>, total: u32) -> String {
    match top {
        Some(MediaResult::Movie {
            title,
            rating,
            year,
            ..
        }) => {
            let mut message = format!("I found \"{}\"", title);
            if let Some(year) = year {
                message.push_str(&format!(", released in {}", year));
            }
            if let Some(rating) = rating {
                message.push_str(&format!(", rated {:.1}/10", rating));
            }
            message.push_str(&format!(". Here are the top matches for \"{}\".", query));
            message
        }
        Some(MediaResult::Tv {
            title,
            rating,
            year,
            ..
        }) => {
            let mut message = format!("I found \"{}\"", title);
            if let Some(year) = year {
                message.push_str(&format!(", first aired in {}", year));
            }
            if let Some(rating) = rating {
                message.push_str(&format!(", rated {:.1}/10", rating));
            }
            message.push_str(&format!(". Here are the top matches for \"{}\".", query));
            message
        }
        Some(MediaResult::Person {
            title, department, ..
        }) => {
            let mut message = format!("I found {}", title);
            if let Some(department) = department {
                message.push_str(&format!(", known for {}", department));
            }
            message.push_str(&format!(". Here are the top matches for \"{}\".", query));
            message
        }
        None if total == 0 => format!(
            "I couldn't find anything for \"{}\". Try a different movie title, an actor's name, or a genre.",
            query
        ),
        None => format!("I found {} results for \"{}\".", total, query),
    }
}

fn degraded_response() -> ChatResponse {
    ChatResponse::text(
        TROUBLE_MESSAGE,
        RETRY_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{movie_item, person_item, tv_item, MockContentProvider, ProviderCall};
    use crate::ports::ProviderError;

    fn images() -> ImageUrlBuilder {
        ImageUrlBuilder::new("https://cdn.example.com/t/p", "/placeholder.svg")
    }

    fn aggregator(provider: MockContentProvider) -> SearchAggregator {
        SearchAggregator::new(Arc::new(provider), images())
    }

    #[tokio::test]
    async fn merge_law_two_per_provider_capped_at_four() {
        // With 3/3/3 provider results the merged list is exactly
        // [movie0, movie1, tv0, tv1]: person entries never appear when
        // movies and tv already fill the four slots.
        let provider = MockContentProvider::new()
            .with_search_items(
                SearchKind::Movie,
                vec![movie_item(1, "M0"), movie_item(2, "M1"), movie_item(3, "M2")],
            )
            .with_search_items(
                SearchKind::Tv,
                vec![tv_item(4, "T0"), tv_item(5, "T1"), tv_item(6, "T2")],
            )
            .with_search_items(
                SearchKind::Person,
                vec![
                    person_item(7, "P0"),
                    person_item(8, "P1"),
                    person_item(9, "P2"),
                ],
            );

        let response = aggregator(provider).search("test", "search test").await;

        let results = response.media_results.unwrap();
        assert_eq!(results.len(), 4);
        assert!(matches!(results[0], MediaResult::Movie { id: 1, .. }));
        assert!(matches!(results[1], MediaResult::Movie { id: 2, .. }));
        assert!(matches!(results[2], MediaResult::Tv { id: 4, .. }));
        assert!(matches!(results[3], MediaResult::Tv { id: 5, .. }));
    }

    #[tokio::test]
    async fn issues_all_three_searches_with_same_query() {
        let provider = Arc::new(MockContentProvider::new());
        let aggregator = SearchAggregator::new(provider.clone(), images());

        let _ = aggregator.search("dune", "find dune").await;

        let calls = provider.calls();
        assert_eq!(calls.len(), 3);
        for call in calls {
            match call {
                ProviderCall::Search { query, .. } => assert_eq!(query, "dune"),
                other => panic!("unexpected call {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn empty_results_quote_the_query() {
        let provider = MockContentProvider::new();

        let response = aggregator(provider).search("zzz obscure", "find zzz obscure").await;

        assert!(response.message.contains("\"zzz obscure\""));
        assert!(!response.suggestions.is_empty());
        assert!(response.media_results.unwrap().is_empty());
    }

    #[tokio::test]
    async fn one_failed_provider_still_yields_other_results() {
        let provider = MockContentProvider::new()
            .with_search_error(SearchKind::Movie, ProviderError::network("down"))
            .with_search_items(SearchKind::Tv, vec![tv_item(1, "Severance")]);

        let response = aggregator(provider).search("severance", "search severance").await;

        let results = response.media_results.unwrap();
        assert_eq!(results.len(), 1);
        assert!(matches!(results[0], MediaResult::Tv { .. }));
    }

    #[tokio::test]
    async fn all_providers_failing_degrades() {
        let provider = MockContentProvider::new()
            .with_search_error(SearchKind::Movie, ProviderError::network("down"))
            .with_search_error(SearchKind::Tv, ProviderError::Timeout { timeout_secs: 8 })
            .with_search_error(SearchKind::Person, ProviderError::malformed("not json"));

        let response = aggregator(provider).search("anything", "search anything").await;

        assert!(response.message.contains("trouble searching"));
        assert_eq!(response.suggestions.len(), 3);
        assert!(response.media_results.is_none());
    }

    #[tokio::test]
    async fn top_movie_drives_the_summary() {
        let provider = MockContentProvider::new()
            .with_search_items(SearchKind::Movie, vec![movie_item(1, "Inception")]);

        let response = aggregator(provider).search("inception", "find inception").await;

        assert!(response.message.contains("\"Inception\""));
        assert!(response.message.contains("released in 2020"));
        assert!(response.message.contains("rated 7.5/10"));
    }

    #[tokio::test]
    async fn top_tv_summary_uses_first_aired() {
        let provider = MockContentProvider::new()
            .with_search_items(SearchKind::Tv, vec![tv_item(1, "Severance")]);

        let response = aggregator(provider).search("severance", "search severance").await;

        assert!(response.message.contains("first aired in 2016"));
    }

    #[tokio::test]
    async fn top_person_summary_mentions_department() {
        let provider = MockContentProvider::new()
            .with_search_items(SearchKind::Person, vec![person_item(1, "Tom Hanks")]);

        let response = aggregator(provider).search("tom hanks", "search tom hanks").await;

        assert!(response.message.contains("Tom Hanks"));
        assert!(response.message.contains("known for Acting"));
    }

    #[tokio::test]
    async fn suggestions_derive_from_the_raw_message_not_the_query() {
        let provider = MockContentProvider::new()
            .with_search_items(SearchKind::Movie, vec![movie_item(1, "Dune")]);

        let response = aggregator(provider).search("dune", "find dune").await;

        assert_eq!(
            response.suggestions,
            suggest("find dune", &response.message)
        );
    }

    #[test]
    fn generic_count_message_when_totals_but_no_top() {
        // Only reachable if merge/truncation logic changes; kept as a guard.
        let message = summary("q", None, 12);
        assert!(message.contains("12"));
        assert!(message.contains("\"q\""));
    }
}
