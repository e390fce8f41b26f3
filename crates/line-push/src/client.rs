//! LINE Messaging API HTTP client.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::config::LinePushConfig;
use crate::error::LinePushError;
use crate::types::PushRequest;

/// Per-call timeout for push requests.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for pushing messages via the LINE Messaging API.
#[derive(Clone)]
pub struct LineClient {
    http: Client,
    config: LinePushConfig,
}

impl LineClient {
    /// Create a client with the given configuration.
    pub fn new(config: LinePushConfig) -> Result<Self, LinePushError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(LinePushError::Http)?;

        Ok(Self { http, config })
    }

    /// Push a message using the full request structure.
    pub async fn push(&self, request: &PushRequest) -> Result<(), LinePushError> {
        let url = self.config.push_url();
        debug!("Pushing message to {}", request.to);

        let response = self
            .http
            .post(&url)
            .header(
                "Authorization",
                format!("Bearer {}", self.config.access_token),
            )
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(LinePushError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LinePushError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }

    /// Push a single text message to a recipient.
    pub async fn push_text(&self, to: &str, text: &str) -> Result<(), LinePushError> {
        self.push(&PushRequest::text(to, text)).await
    }

    /// Get the configuration.
    pub fn config(&self) -> &LinePushConfig {
        &self.config
    }
}

impl std::fmt::Debug for LineClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineClient")
            .field("base_url", &self.config.base_url)
            .finish()
    }
}
