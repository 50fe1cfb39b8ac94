//! Generative backend configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::provider::validate_url;

/// Generative backend configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GenerativeConfig {
    /// Backend API key
    pub api_key: Option<String>,

    /// Backend base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Top-k sampling bound
    #[serde(default = "default_top_k")]
    pub top_k: u32,

    /// Nucleus sampling bound
    #[serde(default = "default_top_p")]
    pub top_p: f32,

    /// Maximum tokens to generate
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,

    /// Per-call timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Override for the assistant persona block
    pub persona: Option<String>,
}

impl GenerativeConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if an API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Validate generative configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_api_key() {
            return Err(ValidationError::MissingRequired(
                "SCREEN_SCOUT__GENERATIVE__API_KEY",
            ));
        }
        validate_url(&self.base_url)?;
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ValidationError::InvalidTemperature);
        }
        if self.max_output_tokens == 0 {
            return Err(ValidationError::InvalidMaxOutputTokens);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 60 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for GenerativeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            top_k: default_top_k(),
            top_p: default_top_p(),
            max_output_tokens: default_max_output_tokens(),
            timeout_secs: default_timeout(),
            persona: None,
        }
    }
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_top_k() -> u32 {
    40
}

fn default_top_p() -> f32 {
    0.95
}

fn default_max_output_tokens() -> u32 {
    512
}

fn default_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GenerativeConfig::default();
        assert_eq!(config.model, "gemini-1.5-flash");
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.top_k, 40);
        assert_eq!(config.top_p, 0.95);
        assert_eq!(config.max_output_tokens, 512);
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_validation_requires_api_key() {
        let config = GenerativeConfig::default();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired(_))
        ));
    }

    #[test]
    fn test_validation_rejects_wild_temperature() {
        let config = GenerativeConfig {
            api_key: Some("key".to_string()),
            temperature: 3.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidTemperature)
        ));
    }

    #[test]
    fn test_validation_rejects_zero_output_budget() {
        let config = GenerativeConfig {
            api_key: Some("key".to_string()),
            max_output_tokens: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidMaxOutputTokens)
        ));
    }
}
