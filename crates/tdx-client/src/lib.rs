//! TDX open-data API client library.
//!
//! This crate provides a Rust client for the TDX (Taiwan Transport Data
//! eXchange) platform. It covers the two calls the alert bridge needs:
//!
//! - Acquiring a short-lived bearer token via the OAuth2 client-credentials
//!   flow against the TDX identity provider
//! - Fetching the current metro service alerts for a fixed operator
//!
//! # Example
//!
//! ```no_run
//! use tdx_client::{TdxClient, TdxConfig};
//!
//! # async fn example() -> Result<(), tdx_client::TdxError> {
//! let config = TdxConfig::new("my-client-id", "my-client-secret");
//! let client = TdxClient::new(config)?;
//!
//! // Token acquisition and alert fetch in one call
//! let list = client.current_alerts().await?;
//! for alert in &list.alerts {
//!     if !alert.is_normal() {
//!         println!("disruption: {}", alert.title);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::TdxClient;
pub use config::TdxConfig;
pub use error::TdxError;
pub use types::{AccessToken, MetroAlert, MetroAlertList, TokenResponse};

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
