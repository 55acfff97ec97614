//! HTTP client for the generation endpoint.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::generation::GenerationService;

#[derive(Serialize, Debug)]
struct GenerationRequest<'a> {
    prompt: &'a str,
}

#[derive(Deserialize, Debug)]
struct GenerationResponse {
    #[serde(default)]
    text: String,
}

/// Everything that can go wrong talking to the generation service. All
/// variants resolve into the fallback path; none reach the user.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("request timeout - the generation service took too long to respond")]
    Timeout,

    #[error("connection error - unable to reach the generation service")]
    Connect,

    #[error("network error: {0}")]
    Network(String),

    #[error("generation service returned {status}: {body}")]
    BadStatus { status: StatusCode, body: String },

    #[error("failed to parse generation response as JSON: {0}")]
    MalformedPayload(String),

    #[error("generation service returned empty content")]
    EmptyContent,
}

/// POSTs `{"prompt": ...}` to the configured endpoint and expects
/// `{"text": ...}` back.
pub struct RemoteGenerator {
    client: Client,
    endpoint: Url,
}

impl RemoteGenerator {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

#[async_trait]
impl GenerationService for RemoteGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        debug!(endpoint = %self.endpoint, "requesting poem from generation service");

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&GenerationRequest { prompt })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationError::Timeout
                } else if e.is_connect() {
                    GenerationError::Connect
                } else {
                    GenerationError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(GenerationError::BadStatus { status, body });
        }

        let payload: GenerationResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::MalformedPayload(e.to_string()))?;

        // A 2xx with blank text is still a failure; the caller falls back.
        if payload.text.trim().is_empty() {
            return Err(GenerationError::EmptyContent);
        }

        Ok(payload.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_carries_only_the_prompt() {
        let body = serde_json::to_value(GenerationRequest { prompt: "um poema" }).unwrap();
        assert_eq!(body, serde_json::json!({ "prompt": "um poema" }));
    }

    #[test]
    fn response_text_defaults_to_empty_when_missing() {
        let payload: GenerationResponse = serde_json::from_str("{}").unwrap();
        assert!(payload.text.is_empty());
    }

    #[test]
    fn response_ignores_unknown_fields() {
        let payload: GenerationResponse =
            serde_json::from_str(r#"{"text": "verso", "model": "x"}"#).unwrap();
        assert_eq!(payload.text, "verso");
    }
}
