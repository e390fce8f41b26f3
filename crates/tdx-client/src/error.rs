//! Error types for the TDX client.

use thiserror::Error;

/// Errors that can occur when talking to the TDX platform.
#[derive(Debug, Error)]
pub enum TdxError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Token endpoint rejected the client credentials.
    #[error("token request rejected (HTTP {status}): {body}")]
    Auth { status: u16, body: String },

    /// Token endpoint responded 2xx but without an access token.
    #[error("token response missing access_token")]
    MissingToken,

    /// Alert endpoint returned a non-success status.
    #[error("API error (HTTP {status}): {body}")]
    Api { status: u16, body: String },
}
