//! Content Provider Port - interface to the external media catalog.
//!
//! The provider exposes per-kind search endpoints and popularity listings.
//! Implementations translate between the provider's wire format and these
//! types; the application layer never sees HTTP details.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::chat::MediaType;

/// Which search index a query runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchKind {
    Movie,
    Tv,
    Person,
}

impl SearchKind {
    /// Path segment used by the provider's `/search/{kind}` endpoint.
    pub fn path_segment(&self) -> &'static str {
        match self {
            SearchKind::Movie => "movie",
            SearchKind::Tv => "tv",
            SearchKind::Person => "person",
        }
    }
}

/// One page of provider results, in the provider's own shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogPage {
    #[serde(default)]
    pub results: Vec<CatalogItem>,
    #[serde(default)]
    pub total_results: u32,
}

/// A raw catalog entry. Movies carry `title`/`release_date`/`poster_path`,
/// tv entries `name`/`first_air_date`/`poster_path`, people `name`/
/// `profile_path`/`known_for_department`; everything nullable on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogItem {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub profile_path: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub known_for_department: Option<String>,
}

impl CatalogItem {
    /// Display title, whichever of `title`/`name` the provider populated.
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("Untitled")
    }

    /// ISO release date, whichever of the two date fields is populated.
    pub fn date(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .or(self.first_air_date.as_deref())
    }
}

/// Failures talking to the content provider. All of these are recovered
/// locally into degraded responses, never surfaced as transport errors.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("provider request failed: {0}")]
    Network(String),

    #[error("provider request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("provider returned status {status}")]
    Status { status: u16 },

    #[error("provider returned an unparseable body: {0}")]
    Malformed(String),
}

impl ProviderError {
    pub fn network(message: impl Into<String>) -> Self {
        ProviderError::Network(message.into())
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        ProviderError::Malformed(message.into())
    }
}

/// Port for the external media catalog.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Searches the given index for `query`, first page only.
    async fn search(&self, kind: SearchKind, query: &str) -> Result<CatalogPage, ProviderError>;

    /// Fetches the popularity listing for the media type, first page only.
    async fn popular(&self, media_type: MediaType) -> Result<CatalogPage, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_kind_path_segments() {
        assert_eq!(SearchKind::Movie.path_segment(), "movie");
        assert_eq!(SearchKind::Tv.path_segment(), "tv");
        assert_eq!(SearchKind::Person.path_segment(), "person");
    }

    #[test]
    fn catalog_page_tolerates_missing_fields() {
        let page: CatalogPage = serde_json::from_str(r#"{"results":[{"id":1}]}"#).unwrap();
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.total_results, 0);
        assert_eq!(page.results[0].display_title(), "Untitled");
    }

    #[test]
    fn display_title_prefers_title_over_name() {
        let item: CatalogItem =
            serde_json::from_str(r#"{"id":1,"title":"Dune","name":"ignored"}"#).unwrap();
        assert_eq!(item.display_title(), "Dune");
    }

    #[test]
    fn date_falls_back_to_first_air_date() {
        let item: CatalogItem =
            serde_json::from_str(r#"{"id":1,"first_air_date":"2016-07-15"}"#).unwrap();
        assert_eq!(item.date(), Some("2016-07-15"));
    }

    #[test]
    fn provider_error_displays() {
        let err = ProviderError::Timeout { timeout_secs: 8 };
        assert_eq!(err.to_string(), "provider request timed out after 8s");
    }
}
