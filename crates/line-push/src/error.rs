//! Error types for the LINE push client.

use thiserror::Error;

/// Errors that can occur when pushing messages via the Messaging API.
#[derive(Debug, Error)]
pub enum LinePushError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Messaging API returned a non-success status.
    #[error("push rejected (HTTP {status}): {body}")]
    Api { status: u16, body: String },
}
