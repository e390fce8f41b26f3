//! TDX platform HTTP client.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::config::TdxConfig;
use crate::error::TdxError;
use crate::types::{AccessToken, MetroAlertList, TokenResponse};

/// Per-call timeout for upstream requests.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the TDX open-data platform.
#[derive(Clone)]
pub struct TdxClient {
    http: Client,
    config: TdxConfig,
}

impl TdxClient {
    /// Create a client with the given configuration.
    pub fn new(config: TdxConfig) -> Result<Self, TdxError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(TdxError::Http)?;

        Ok(Self { http, config })
    }

    /// Acquire a bearer token via the client-credentials grant.
    pub async fn access_token(&self) -> Result<AccessToken, TdxError> {
        let url = self.config.token_url();
        debug!("Requesting TDX access token: {}", url);

        let response = self
            .http
            .post(&url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
            ])
            .send()
            .await
            .map_err(TdxError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TdxError::Auth {
                status: status.as_u16(),
                body,
            });
        }

        let token: TokenResponse = response.json().await.map_err(TdxError::Http)?;
        match token.access_token {
            Some(token) if !token.is_empty() => Ok(AccessToken::new(token)),
            _ => Err(TdxError::MissingToken),
        }
    }

    /// Fetch and parse the current metro alert list.
    pub async fn metro_alerts(&self, token: &AccessToken) -> Result<MetroAlertList, TdxError> {
        let value = self.fetch_alerts_value(token).await?;
        let list: MetroAlertList = serde_json::from_value(value)?;
        Ok(list)
    }

    /// Fetch the alert payload without interpreting it.
    pub async fn raw_alerts(&self, token: &AccessToken) -> Result<serde_json::Value, TdxError> {
        self.fetch_alerts_value(token).await
    }

    /// Acquire a token and fetch the current alert list in one call.
    pub async fn current_alerts(&self) -> Result<MetroAlertList, TdxError> {
        let token = self.access_token().await?;
        self.metro_alerts(&token).await
    }

    /// Acquire a token and fetch the raw alert payload in one call.
    pub async fn current_raw(&self) -> Result<serde_json::Value, TdxError> {
        let token = self.access_token().await?;
        self.raw_alerts(&token).await
    }

    /// Get the configuration.
    pub fn config(&self) -> &TdxConfig {
        &self.config
    }

    async fn fetch_alerts_value(&self, token: &AccessToken) -> Result<serde_json::Value, TdxError> {
        let url = self.config.alerts_url();
        let top = self.config.max_alerts.to_string();
        debug!("Fetching metro alerts: {}", url);

        let response = self
            .http
            .get(&url)
            .query(&[("$top", top.as_str()), ("$format", "JSON")])
            .header(
                "Authorization",
                format!("Bearer {}", token.as_str()),
            )
            .send()
            .await
            .map_err(TdxError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TdxError::Api {
                status: status.as_u16(),
                body,
            });
        }

        response.json().await.map_err(TdxError::Http)
    }
}

impl std::fmt::Debug for TdxClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TdxClient")
            .field("api_url", &self.config.api_url)
            .field("operator", &self.config.operator)
            .finish()
    }
}
