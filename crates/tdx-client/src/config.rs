//! Configuration types for the TDX client.

/// Default base URL for the TDX API host.
pub const DEFAULT_API_URL: &str = "https://tdx.transportdata.tw";

/// Default base URL for the TDX identity provider.
pub const DEFAULT_AUTH_URL: &str = "https://tdx.transportdata.tw";

/// Default metro operator code (Taipei Rapid Transit Corporation).
pub const DEFAULT_OPERATOR: &str = "TRTC";

/// Default maximum number of alert records requested per fetch.
pub const DEFAULT_MAX_ALERTS: u32 = 30;

/// Configuration for connecting to the TDX platform.
#[derive(Debug, Clone)]
pub struct TdxConfig {
    /// Base URL of the TDX API host.
    pub api_url: String,
    /// Base URL of the TDX identity provider.
    pub auth_url: String,
    /// OAuth2 client identifier.
    pub client_id: String,
    /// OAuth2 client secret.
    pub client_secret: String,
    /// Metro operator code the alert fetch is scoped to.
    pub operator: String,
    /// Maximum number of alert records requested per fetch.
    pub max_alerts: u32,
}

impl TdxConfig {
    /// Create a new configuration with the given client credentials.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            auth_url: DEFAULT_AUTH_URL.to_string(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            operator: DEFAULT_OPERATOR.to_string(),
            max_alerts: DEFAULT_MAX_ALERTS,
        }
    }

    /// Override the API base URL.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Override the identity provider base URL.
    pub fn with_auth_url(mut self, url: impl Into<String>) -> Self {
        self.auth_url = url.into();
        self
    }

    /// Set the metro operator code.
    pub fn with_operator(mut self, operator: impl Into<String>) -> Self {
        self.operator = operator.into();
        self
    }

    /// Set the maximum number of alert records per fetch.
    pub fn with_max_alerts(mut self, max_alerts: u32) -> Self {
        self.max_alerts = max_alerts;
        self
    }

    /// Get the token endpoint URL.
    pub fn token_url(&self) -> String {
        format!(
            "{}/auth/realms/TDXConnect/protocol/openid-connect/token",
            self.auth_url
        )
    }

    /// Get the metro alert endpoint URL for the configured operator.
    pub fn alerts_url(&self) -> String {
        format!(
            "{}/api/basic/v2/Rail/Metro/Alert/{}",
            self.api_url, self.operator
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = TdxConfig::new("id", "secret");
        assert_eq!(config.api_url, "https://tdx.transportdata.tw");
        assert_eq!(config.auth_url, "https://tdx.transportdata.tw");
        assert_eq!(config.client_id, "id");
        assert_eq!(config.client_secret, "secret");
        assert_eq!(config.operator, "TRTC");
        assert_eq!(config.max_alerts, 30);
    }

    #[test]
    fn test_config_urls() {
        let config = TdxConfig::new("id", "secret");
        assert_eq!(
            config.token_url(),
            "https://tdx.transportdata.tw/auth/realms/TDXConnect/protocol/openid-connect/token"
        );
        assert_eq!(
            config.alerts_url(),
            "https://tdx.transportdata.tw/api/basic/v2/Rail/Metro/Alert/TRTC"
        );
    }

    #[test]
    fn test_config_overrides() {
        let config = TdxConfig::new("id", "secret")
            .with_api_url("http://127.0.0.1:9000")
            .with_auth_url("http://127.0.0.1:9001")
            .with_operator("KRTC")
            .with_max_alerts(5);
        assert_eq!(
            config.alerts_url(),
            "http://127.0.0.1:9000/api/basic/v2/Rail/Metro/Alert/KRTC"
        );
        assert_eq!(
            config.token_url(),
            "http://127.0.0.1:9001/auth/realms/TDXConnect/protocol/openid-connect/token"
        );
        assert_eq!(config.max_alerts, 5);
    }
}
