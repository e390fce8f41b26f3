//! Configuration types for the LINE push client.

/// Default base URL for the LINE Messaging API.
pub const DEFAULT_API_URL: &str = "https://api.line.me";

/// Configuration for the LINE Messaging API.
#[derive(Debug, Clone)]
pub struct LinePushConfig {
    /// Base URL of the Messaging API host.
    pub base_url: String,
    /// Channel access token used as the bearer credential.
    pub access_token: String,
}

impl LinePushConfig {
    /// Create a new configuration with the given channel access token.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            access_token: access_token.into(),
        }
    }

    /// Override the API base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Get the push message endpoint URL.
    pub fn push_url(&self) -> String {
        format!("{}/v2/bot/message/push", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default_url() {
        let config = LinePushConfig::new("token");
        assert_eq!(config.base_url, "https://api.line.me");
        assert_eq!(config.push_url(), "https://api.line.me/v2/bot/message/push");
    }

    #[test]
    fn test_config_base_url_override() {
        let config = LinePushConfig::new("token").with_base_url("http://127.0.0.1:9000");
        assert_eq!(config.push_url(), "http://127.0.0.1:9000/v2/bot/message/push");
    }
}
