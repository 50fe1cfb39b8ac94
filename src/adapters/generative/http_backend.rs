//! HTTP generative backend - reqwest client for the `generateContent`
//! contract.
//!
//! Request shape: `{contents: [{role, parts: [{text}]}], generationConfig}`.
//! Response shape: `{candidates: [{content: {parts: [{text}]}}]}`; only the
//! first candidate's first text part is used. Sampling parameters are
//! static configuration, not tunable per request.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::ports::{BackendError, GenerativeBackend, PromptTurn};

/// Configuration for the HTTP generative backend.
#[derive(Debug, Clone)]
pub struct GenerativeHttpConfig {
    /// API key for authentication (sent as the `key` query parameter).
    api_key: Secret<String>,
    /// Base URL for the API.
    pub base_url: String,
    /// Model identifier.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Top-k sampling bound.
    pub top_k: u32,
    /// Nucleus sampling bound.
    pub top_p: f32,
    /// Maximum tokens to generate.
    pub max_output_tokens: u32,
    /// Per-call timeout.
    pub timeout: Duration,
}

impl GenerativeHttpConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-1.5-flash".to_string(),
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 512,
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_sampling(mut self, temperature: f32, top_k: u32, top_p: f32) -> Self {
        self.temperature = temperature;
        self.top_k = top_k;
        self.top_p = top_p;
        self
    }

    pub fn with_max_output_tokens(mut self, max: u32) -> Self {
        self.max_output_tokens = max;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Generative backend implementation against the `generateContent` API.
pub struct HttpGenerativeBackend {
    config: GenerativeHttpConfig,
    client: Client,
}

impl HttpGenerativeBackend {
    pub fn new(config: GenerativeHttpConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    fn to_wire_request(&self, turns: &[PromptTurn]) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: turns
                .iter()
                .map(|turn| WireContent {
                    role: turn.role.as_str().to_string(),
                    parts: vec![WirePart {
                        text: turn.text.clone(),
                    }],
                })
                .collect(),
            generation_config: WireGenerationConfig {
                temperature: self.config.temperature,
                top_k: self.config.top_k,
                top_p: self.config.top_p,
                max_output_tokens: self.config.max_output_tokens,
            },
        }
    }

    fn map_transport(&self, error: reqwest::Error) -> BackendError {
        if error.is_timeout() {
            BackendError::Timeout {
                timeout_secs: self.config.timeout.as_secs(),
            }
        } else if error.is_connect() {
            BackendError::network(format!("connection failed: {}", error))
        } else {
            BackendError::network(error.to_string())
        }
    }
}

#[async_trait]
impl GenerativeBackend for HttpGenerativeBackend {
    async fn generate(&self, turns: Vec<PromptTurn>) -> Result<String, BackendError> {
        let request = self.to_wire_request(&turns);

        let response = self
            .client
            .post(self.generate_url())
            .query(&[("key", self.config.api_key())])
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_transport(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status {
                status: status.as_u16(),
            });
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| BackendError::malformed(e.to_string()))?;

        extract_text(body).ok_or(BackendError::EmptyResponse)
    }
}

/// Pulls the first candidate's first non-blank text part.
fn extract_text(response: GenerateContentResponse) -> Option<String> {
    response
        .candidates
        .into_iter()
        .next()?
        .content?
        .parts
        .into_iter()
        .next()
        .map(|part| part.text)
        .filter(|text| !text.trim().is_empty())
}

// ----- Wire types -----

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<WireContent>,
    #[serde(rename = "generationConfig")]
    generation_config: WireGenerationConfig,
}

#[derive(Debug, Serialize)]
struct WireContent {
    role: String,
    parts: Vec<WirePart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct WirePart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WireGenerationConfig {
    temperature: f32,
    top_k: u32,
    top_p: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<WireCandidate>,
}

#[derive(Debug, Deserialize)]
struct WireCandidate {
    content: Option<WireCandidateContent>,
}

#[derive(Debug, Deserialize)]
struct WireCandidateContent {
    #[serde(default)]
    parts: Vec<WirePart>,
}
