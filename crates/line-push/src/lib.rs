//! LINE Messaging API push client library.
//!
//! This crate provides the one Messaging API call the alert bridge needs:
//! pushing a text message to a user, group, or room.
//!
//! # Example
//!
//! ```no_run
//! use line_push::{LineClient, LinePushConfig};
//!
//! # async fn example() -> Result<(), line_push::LinePushError> {
//! let config = LinePushConfig::new("channel-access-token");
//! let client = LineClient::new(config)?;
//!
//! client.push_text("GROUP_ID", "Hello group!").await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::LineClient;
pub use config::LinePushConfig;
pub use error::LinePushError;
pub use types::{PushRequest, TextMessage};

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
