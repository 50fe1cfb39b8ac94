//! Media results returned to the client, plus image URL synthesis.

use serde::{Deserialize, Serialize};

/// Which catalog listing a recommendation draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Tv,
}

impl MediaType {
    /// Path segment used by the content provider's listing endpoints.
    pub fn path_segment(&self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Tv => "tv",
        }
    }

    /// Human-readable plural noun for message templates.
    pub fn plural_noun(&self) -> &'static str {
        match self {
            MediaType::Movie => "movies",
            MediaType::Tv => "TV shows",
        }
    }
}

/// A single search/recommendation hit, created fresh per request and never
/// persisted by this core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MediaResult {
    Movie {
        id: u64,
        title: String,
        #[serde(rename = "imageUrl")]
        image_url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        rating: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        year: Option<String>,
    },
    Tv {
        id: u64,
        title: String,
        #[serde(rename = "imageUrl")]
        image_url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        rating: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        year: Option<String>,
    },
    Person {
        id: u64,
        title: String,
        #[serde(rename = "imageUrl")]
        image_url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        department: Option<String>,
    },
}

impl MediaResult {
    pub fn title(&self) -> &str {
        match self {
            MediaResult::Movie { title, .. }
            | MediaResult::Tv { title, .. }
            | MediaResult::Person { title, .. } => title,
        }
    }
}

/// Builds client-facing image URLs from provider path fragments.
///
/// The `<base>/w200<path>` template is a stable contract consumers of
/// `ChatResponse` rely on; entries without a path get the placeholder.
#[derive(Debug, Clone)]
pub struct ImageUrlBuilder {
    base_url: String,
    placeholder: String,
}

impl ImageUrlBuilder {
    pub fn new(base_url: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            placeholder: placeholder.into(),
        }
    }

    pub fn url_for(&self, path: Option<&str>) -> String {
        match path {
            Some(p) if !p.is_empty() => format!("{}/w200{}", self.base_url, p),
            _ => self.placeholder.clone(),
        }
    }
}
