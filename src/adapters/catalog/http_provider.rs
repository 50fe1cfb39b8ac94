//! HTTP content provider - reqwest client for the catalog REST contract.
//!
//! Endpoints consumed:
//! - `GET {base}/search/{movie|tv|person}?query=&page=1`
//! - `GET {base}/{movie|tv}/popular?page=1`
//!
//! # Configuration
//!
//! ```ignore
//! let config = CatalogHttpConfig::new(api_key)
//!     .with_base_url("https://api.themoviedb.org/3")
//!     .with_timeout(Duration::from_secs(8));
//!
//! let provider = HttpContentProvider::new(config);
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};

use crate::domain::chat::MediaType;
use crate::ports::{CatalogPage, ContentProvider, ProviderError, SearchKind};

/// Configuration for the HTTP content provider.
#[derive(Debug, Clone)]
pub struct CatalogHttpConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Base URL for the catalog API.
    pub base_url: String,
    /// Per-call timeout.
    pub timeout: Duration,
}

impl CatalogHttpConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: "https://api.themoviedb.org/3".to_string(),
            timeout: Duration::from_secs(8),
        }
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the per-call timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Content provider implementation against the catalog REST API.
pub struct HttpContentProvider {
    config: CatalogHttpConfig,
    client: Client,
}

impl HttpContentProvider {
    pub fn new(config: CatalogHttpConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    async fn fetch_page(
        &self,
        url: String,
        query: Option<&str>,
    ) -> Result<CatalogPage, ProviderError> {
        let mut request = self
            .client
            .get(&url)
            .query(&[("api_key", self.config.api_key()), ("page", "1")]);
        if let Some(query) = query {
            request = request.query(&[("query", query)]);
        }

        let response = request.send().await.map_err(|e| self.map_transport(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<CatalogPage>()
            .await
            .map_err(|e| ProviderError::malformed(e.to_string()))
    }

    fn map_transport(&self, error: reqwest::Error) -> ProviderError {
        if error.is_timeout() {
            ProviderError::Timeout {
                timeout_secs: self.config.timeout.as_secs(),
            }
        } else if error.is_connect() {
            ProviderError::network(format!("connection failed: {}", error))
        } else {
            ProviderError::network(error.to_string())
        }
    }
}

#[async_trait]
impl ContentProvider for HttpContentProvider {
    async fn search(&self, kind: SearchKind, query: &str) -> Result<CatalogPage, ProviderError> {
        let url = format!("{}/search/{}", self.config.base_url, kind.path_segment());
        self.fetch_page(url, Some(query)).await
    }

    async fn popular(&self, media_type: MediaType) -> Result<CatalogPage, ProviderError> {
        let url = format!(
            "{}/{}/popular",
            self.config.base_url,
            media_type.path_segment()
        );
        self.fetch_page(url, None).await
    }
}
