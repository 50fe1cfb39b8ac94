//! Content provider configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Content provider configuration (catalog API and image CDN)
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// Catalog API key
    pub api_key: Option<String>,

    /// Catalog API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Image CDN base URL
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,

    /// Image path used when a result carries no artwork
    #[serde(default = "default_placeholder_path")]
    pub placeholder_path: String,

    /// Per-call timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl ProviderConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if an API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Validate provider configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_api_key() {
            return Err(ValidationError::MissingRequired(
                "SCREEN_SCOUT__PROVIDER__API_KEY",
            ));
        }
        validate_url(&self.base_url)?;
        validate_url(&self.image_base_url)?;
        if self.timeout_secs == 0 || self.timeout_secs > 60 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            image_base_url: default_image_base_url(),
            placeholder_path: default_placeholder_path(),
            timeout_secs: default_timeout(),
        }
    }
}

pub(super) fn validate_url(url: &str) -> Result<(), ValidationError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ValidationError::InvalidBaseUrl(url.to_string()))
    }
}

fn default_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_image_base_url() -> String {
    "https://image.tmdb.org/t/p".to_string()
}

fn default_placeholder_path() -> String {
    "/placeholder-poster.svg".to_string()
}

fn default_timeout() -> u64 {
    8
}
