//! Gemini keyword source (API key-based).
//!
//! Sends the patent text to the Generative Language API with a structured
//! output schema, so the model answers with the `{"keywords": [...]}` shape
//! [`parse_keywords`] expects.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use wordz_core::config::ExtractorConfig;
use wordz_core::Keyword;

use crate::document::DocumentText;
use crate::error::ExtractError;
use crate::response::parse_keywords;
use crate::KeywordSource;

const PROMPT: &str = "You are an expert patent analyst specializing in prior art searches. \
Analyze the following patent text. Identify the most critical technical keywords and concepts. \
For each keyword, provide a list of relevant synonyms and related terms that would be useful \
for searching for prior art in databases like USPTO, Espacenet, and Google Patents. \
Focus on the specific domain of the patent.";

/// Keyword source backed by a Gemini model.
pub struct GeminiSource {
    api_key: String,
    model: String,
    endpoint: String,
    client: Client,
}

impl GeminiSource {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self, ExtractError> {
        let defaults = ExtractorConfig::default();
        Self::build(
            api_key.into(),
            model.into(),
            defaults.endpoint,
            Duration::from_secs(defaults.timeout_secs),
        )
    }

    /// Build from the `[extractor]` config section, reading the key from the
    /// environment variable it names.
    pub fn from_config(config: &ExtractorConfig) -> Result<Self, ExtractError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ExtractError::MissingApiKey(config.api_key_env.clone()))?;
        Self::build(
            api_key,
            config.model.clone(),
            config.endpoint.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Point requests at another base URL (a proxy or a mock server).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn build(api_key: String, model: String, endpoint: String, timeout: Duration) -> Result<Self, ExtractError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            api_key: api_key.trim().to_string(),
            model,
            endpoint,
            client,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }

    fn request_body(document: &DocumentText) -> serde_json::Value {
        serde_json::json!({
            "contents": [{
                "parts": [{ "text": format!("{PROMPT}\n\nPatent Text:\n{}", document.as_str()) }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema(),
            }
        })
    }
}

fn response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "keywords": {
                "type": "ARRAY",
                "description": "An array of key technical terms and their synonyms.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "keyword": {
                            "type": "STRING",
                            "description": "A primary technical keyword or concept from the patent."
                        },
                        "synonyms": {
                            "type": "ARRAY",
                            "description": "A list of synonyms or related terms for the keyword, relevant for a prior art search in the patent's domain.",
                            "items": { "type": "STRING" }
                        }
                    },
                    "required": ["keyword", "synonyms"]
                }
            }
        },
        "required": ["keywords"]
    })
}

#[async_trait]
impl KeywordSource for GeminiSource {
    async fn extract(&self, document: &DocumentText) -> Result<Vec<Keyword>, ExtractError> {
        tracing::debug!(model = %self.model, chars = document.len(), "requesting keywords");

        let resp = self
            .client
            .post(self.url())
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&Self::request_body(document))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = match resp.text().await {
                Ok(body) => body,
                Err(err) => {
                    tracing::debug!(%err, %status, "failed to read error body");
                    String::new()
                }
            };
            return Err(ExtractError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let json: serde_json::Value = resp.json().await?;
        let text = json["candidates"]
            .as_array()
            .and_then(|arr| arr.first())
            .and_then(|c| c["content"]["parts"].as_array())
            .and_then(|parts| parts.first())
            .and_then(|p| p["text"].as_str())
            .ok_or(ExtractError::MissingContent)?;

        parse_keywords(text)
    }
}
