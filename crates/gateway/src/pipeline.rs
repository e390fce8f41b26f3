//! Transport seams between the HTTP handler and the upstream services.

use async_trait::async_trait;
use line_push::{LineClient, LinePushError};
use tdx_client::{MetroAlert, TdxClient, TdxError};

/// Source of current service alerts.
///
/// Abstracted to support different transports (TDX, tests, etc.)
#[async_trait]
pub trait AlertSource: Send + Sync {
    /// Fetch and parse the current alert list, acquiring a token first.
    async fn fetch_alerts(&self) -> Result<Vec<MetroAlert>, TdxError>;

    /// Fetch the unfiltered upstream payload for diagnostics.
    async fn fetch_raw(&self) -> Result<serde_json::Value, TdxError>;
}

/// Destination for rendered alert messages.
#[async_trait]
pub trait AlertSink: Send + Sync {
    /// Deliver one message to the configured recipient.
    async fn push(&self, text: &str) -> Result<(), LinePushError>;
}

#[async_trait]
impl AlertSource for TdxClient {
    async fn fetch_alerts(&self) -> Result<Vec<MetroAlert>, TdxError> {
        Ok(self.current_alerts().await?.alerts)
    }

    async fn fetch_raw(&self) -> Result<serde_json::Value, TdxError> {
        self.current_raw().await
    }
}

/// LINE-backed sink bound to a fixed group.
#[derive(Debug, Clone)]
pub struct LineSink {
    client: LineClient,
    group_id: String,
}

impl LineSink {
    /// Create a sink delivering to the given group.
    pub fn new(client: LineClient, group_id: impl Into<String>) -> Self {
        Self {
            client,
            group_id: group_id.into(),
        }
    }
}

#[async_trait]
impl AlertSink for LineSink {
    async fn push(&self, text: &str) -> Result<(), LinePushError> {
        self.client.push_text(&self.group_id, text).await
    }
}
