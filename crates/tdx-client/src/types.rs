//! TDX API request and response types.

use serde::{Deserialize, Serialize};

/// Response from the identity provider's token endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    /// The issued bearer token.
    #[serde(default)]
    pub access_token: Option<String>,

    /// Token lifetime in seconds.
    #[serde(default)]
    pub expires_in: Option<u64>,

    /// Token type (normally "Bearer").
    #[serde(default)]
    pub token_type: Option<String>,
}

/// A bearer token for the TDX API.
///
/// Always holds a non-empty token string; absence is modelled with
/// `Result`/`Option` at the call sites, never with an empty string.
#[derive(Clone)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wrap an issued token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token string, for use in an Authorization header.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(..)")
    }
}

/// Wrapper object returned by the metro alert endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetroAlertList {
    /// Upstream update timestamp.
    #[serde(default)]
    pub update_time: Option<String>,

    /// The alert records.
    #[serde(default)]
    pub alerts: Vec<MetroAlert>,
}

/// A service alert for a metro operator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetroAlert {
    /// Upstream alert identifier.
    #[serde(rename = "AlertID", default)]
    pub alert_id: Option<String>,

    /// Short headline.
    #[serde(default)]
    pub title: String,

    /// Longer human-readable description.
    #[serde(default)]
    pub description: String,

    /// Status code; `1` means normal service.
    #[serde(default = "default_status")]
    pub status: i32,

    /// Cause of the disruption.
    #[serde(default)]
    pub reason: String,

    /// Operational effect of the disruption.
    #[serde(default)]
    pub effect: String,

    /// Severity level, when reported.
    #[serde(default)]
    pub level: Option<i32>,

    /// Publish timestamp.
    #[serde(default)]
    pub publish_time: Option<String>,

    /// Last update timestamp.
    #[serde(default)]
    pub update_time: Option<String>,
}

/// Status code the upstream uses for normal service.
pub const STATUS_NORMAL: i32 = 1;

fn default_status() -> i32 {
    STATUS_NORMAL
}

impl MetroAlert {
    /// Whether this record reports normal service.
    pub fn is_normal(&self) -> bool {
        self.status == STATUS_NORMAL
    }
}
