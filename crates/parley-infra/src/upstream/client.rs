//! HttpGenerationClient -- concrete [`GenerationClient`] over HTTP.
//!
//! Sends `{"message": "..."}` as a JSON POST to the configured endpoint and
//! expects `{"response": "..."}` back. Any other outcome (transport error,
//! timeout, non-2xx status, a body without a string `response` field) is an
//! [`UpstreamError`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

use parley_core::relay::client::GenerationClient;
use parley_types::config::RelayConfig;
use parley_types::error::UpstreamError;

/// Request body sent to the upstream service.
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    message: &'a str,
}

/// Response body expected from the upstream service.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Upstream generation client backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpGenerationClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpGenerationClient {
    /// Create a client posting to `endpoint`, giving up after `timeout`.
    ///
    /// Redirects are not followed: a 3xx reply is reported as a status error.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| UpstreamError::Request(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &RelayConfig) -> Result<Self, UpstreamError> {
        Self::new(
            config.upstream_url.clone(),
            Duration::from_secs(config.upstream_timeout_secs),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn map_reqwest_error(e: reqwest::Error) -> UpstreamError {
    if e.is_timeout() {
        UpstreamError::Timeout
    } else {
        UpstreamError::Request(e.to_string())
    }
}

impl GenerationClient for HttpGenerationClient {
    async fn generate(&self, message: &str) -> Result<String, UpstreamError> {
        tracing::debug!(endpoint = %self.endpoint, "Forwarding message upstream");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&GenerateRequest { message })
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        // Read the body first so a timeout mid-body is reported as such
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        let parsed: GenerateResponse = serde_json::from_slice(&bytes).map_err(|e| {
            UpstreamError::Deserialization(format!("failed to parse response: {e}"))
        })?;

        Ok(parsed.response)
    }
}
