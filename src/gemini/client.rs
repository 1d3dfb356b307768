//! Gemini `generateContent` HTTP client.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::error::GeminiError;

use super::response::{GenerateRequest, extract_text, truncate};

/// Production endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// API version segment of the request path.
pub const API_VERSION: &str = "v1beta";

/// Model used for generation.
pub const MODEL: &str = "gemini-2.0-flash";

/// Client for a single changelog generation request.
///
/// The API key travels as the `key` query parameter. It is never included
/// in returned errors: transport errors are stripped of their URL.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: Client,
    base_url: String,
    api_key: String,
    timeout: Duration,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Result<Self, GeminiError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(GeminiError::ClientBuild)?;

        Ok(Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            timeout,
        })
    }

    /// Point the client at another server (used with mock servers in tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Full request URL, without the key.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}/models/{}:generateContent",
            self.base_url, API_VERSION, MODEL
        )
    }

    /// Send `prompt` and return the generated text.
    ///
    /// Exactly one attempt is made.
    pub async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        debug!(endpoint = %self.endpoint(), prompt_len = prompt.len(), "Sending generateContent request");

        let response = self
            .http
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&GenerateRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            return Err(GeminiError::HttpStatus {
                status: status.as_u16(),
                body: truncate(&body),
            });
        }

        debug!(status = %status, body_len = body.len(), "Received generateContent response");
        extract_text(&body)
    }

    fn transport_error(&self, err: reqwest::Error) -> GeminiError {
        if err.is_timeout() {
            GeminiError::Timeout(self.timeout.as_secs())
        } else {
            GeminiError::Request(err.without_url())
        }
    }
}
