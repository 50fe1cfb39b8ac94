//! Mock content provider for testing.
//!
//! Configurable per search index: queue up pages or errors, then verify the
//! calls that were made. Exhausted queues fall back to an empty page.
//!
//! # Example
//!
//! ```ignore
//! let provider = MockContentProvider::new()
//!     .with_search_items(SearchKind::Movie, vec![movie_item(1, "Dune")])
//!     .with_search_error(SearchKind::Person, ProviderError::network("down"));
//! ```

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::chat::MediaType;
use crate::ports::{CatalogItem, CatalogPage, ContentProvider, ProviderError, SearchKind};

/// A recorded provider call, for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderCall {
    Search { kind: SearchKind, query: String },
    Popular { media_type: MediaType },
}

/// Mock content provider with per-index response queues and call tracking.
#[derive(Default)]
pub struct MockContentProvider {
    search_responses: Mutex<HashMap<SearchKind, VecDeque<Result<CatalogPage, ProviderError>>>>,
    popular_responses: Mutex<VecDeque<Result<CatalogPage, ProviderError>>>,
    calls: Mutex<Vec<ProviderCall>>,
}

impl MockContentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a full page for a search index.
    pub fn with_search_page(self, kind: SearchKind, page: CatalogPage) -> Self {
        self.search_responses
            .lock()
            .unwrap()
            .entry(kind)
            .or_default()
            .push_back(Ok(page));
        self
    }

    /// Queues a page built from the given items, with a matching total.
    pub fn with_search_items(self, kind: SearchKind, items: Vec<CatalogItem>) -> Self {
        let total = items.len() as u32;
        self.with_search_page(
            kind,
            CatalogPage {
                results: items,
                total_results: total,
            },
        )
    }

    /// Queues an error for a search index.
    pub fn with_search_error(self, kind: SearchKind, error: ProviderError) -> Self {
        self.search_responses
            .lock()
            .unwrap()
            .entry(kind)
            .or_default()
            .push_back(Err(error));
        self
    }

    /// Queues a popular-listing page built from the given items.
    pub fn with_popular_items(self, items: Vec<CatalogItem>) -> Self {
        let total = items.len() as u32;
        self.popular_responses.lock().unwrap().push_back(Ok(CatalogPage {
            results: items,
            total_results: total,
        }));
        self
    }

    /// Queues a popular-listing error.
    pub fn with_popular_error(self, error: ProviderError) -> Self {
        self.popular_responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Returns all recorded calls, in order.
    pub fn calls(&self) -> Vec<ProviderCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ContentProvider for MockContentProvider {
    async fn search(&self, kind: SearchKind, query: &str) -> Result<CatalogPage, ProviderError> {
        self.calls.lock().unwrap().push(ProviderCall::Search {
            kind,
            query: query.to_string(),
        });

        self.search_responses
            .lock()
            .unwrap()
            .entry(kind)
            .or_default()
            .pop_front()
            .unwrap_or_else(|| Ok(CatalogPage::default()))
    }

    async fn popular(&self, media_type: MediaType) -> Result<CatalogPage, ProviderError> {
        self.calls
            .lock()
            .unwrap()
            .push(ProviderCall::Popular { media_type });

        self.popular_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(CatalogPage::default()))
    }
}

/// Builds a movie-shaped catalog item for tests.
pub fn movie_item(id: u64, title: &str) -> CatalogItem {
    CatalogItem {
        id,
        title: Some(title.to_string()),
        poster_path: Some(format!("/poster-{}.jpg", id)),
        vote_average: Some(7.5),
        release_date: Some("2020-05-01".to_string()),
        ..Default::default()
    }
}

/// Builds a tv-shaped catalog item for tests.
pub fn tv_item(id: u64, name: &str) -> CatalogItem {
    CatalogItem {
        id,
        name: Some(name.to_string()),
        poster_path: Some(format!("/poster-{}.jpg", id)),
        vote_average: Some(8.0),
        first_air_date: Some("2016-07-15".to_string()),
        ..Default::default()
    }
}

/// Builds a person-shaped catalog item for tests.
pub fn person_item(id: u64, name: &str) -> CatalogItem {
    CatalogItem {
        id,
        name: Some(name.to_string()),
        profile_path: Some(format!("/profile-{}.jpg", id)),
        known_for_department: Some("Acting".to_string()),
        ..Default::default()
    }
}
