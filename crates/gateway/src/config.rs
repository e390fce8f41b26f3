//! Gateway configuration, read once from the environment at startup.

use std::env;

use line_push::LinePushConfig;
use tdx_client::TdxConfig;
use thiserror::Error;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 8080;

/// Configuration error raised at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is missing or empty.
    #[error("{0} not set")]
    Missing(&'static str),
}

/// Process configuration for the gateway.
///
/// Built once in `main` and passed down; nothing else reads the
/// environment after startup.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Listening port.
    pub port: u16,

    /// Shared secret for the trigger endpoint. When unset the trigger
    /// is open and a warning is logged at startup.
    pub trigger_secret: Option<String>,

    /// LINE group the notifications go to.
    pub line_group_id: String,

    /// LINE channel access token.
    pub line_access_token: String,

    /// Override for the Messaging API base URL.
    pub line_api_url: Option<String>,

    /// TDX OAuth2 client identifier.
    pub tdx_client_id: String,

    /// TDX OAuth2 client secret.
    pub tdx_client_secret: String,

    /// Override for the TDX API base URL.
    pub tdx_api_url: Option<String>,

    /// Override for the TDX identity provider base URL.
    pub tdx_auth_url: Option<String>,
}

impl GatewayConfig {
    /// Read configuration from the environment.
    ///
    /// Required variables:
    /// - `LINE_GROUP_ID` - notification target group
    /// - `LINE_ACCESS_TOKEN` - Messaging API channel access token
    /// - `TDX_CLIENT_ID` - TDX OAuth2 client id
    /// - `TDX_CLIENT_SECRET` - TDX OAuth2 client secret
    ///
    /// Optional variables:
    /// - `CRON_SECRET` - trigger endpoint shared secret
    /// - `PORT` - listening port (default: 8080)
    /// - `LINE_API_URL`, `TDX_API_URL`, `TDX_AUTH_URL` - base URL overrides
    pub fn from_env() -> Result<Self, ConfigError> {
        let line_group_id = require("LINE_GROUP_ID")?;
        let line_access_token = require("LINE_ACCESS_TOKEN")?;
        let tdx_client_id = require("TDX_CLIENT_ID")?;
        let tdx_client_secret = require("TDX_CLIENT_SECRET")?;

        let trigger_secret = env::var("CRON_SECRET").ok().filter(|v| !v.is_empty());

        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Ok(Self {
            port,
            trigger_secret,
            line_group_id,
            line_access_token,
            line_api_url: env::var("LINE_API_URL").ok(),
            tdx_client_id,
            tdx_client_secret,
            tdx_api_url: env::var("TDX_API_URL").ok(),
            tdx_auth_url: env::var("TDX_AUTH_URL").ok(),
        })
    }

    /// Build the TDX client configuration.
    pub fn tdx(&self) -> TdxConfig {
        let mut config = TdxConfig::new(&self.tdx_client_id, &self.tdx_client_secret);
        if let Some(url) = &self.tdx_api_url {
            config = config.with_api_url(url);
        }
        if let Some(url) = &self.tdx_auth_url {
            config = config.with_auth_url(url);
        }
        config
    }

    /// Build the LINE push client configuration.
    pub fn line(&self) -> LinePushConfig {
        let mut config = LinePushConfig::new(&self.line_access_token);
        if let Some(url) = &self.line_api_url {
            config = config.with_base_url(url);
        }
        config
    }
}

fn require(key: &'static str) -> Result<String, ConfigError> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(key)),
    }
}
