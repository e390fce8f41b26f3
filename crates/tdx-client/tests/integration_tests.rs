//! Integration tests for tdx-client.
//!
//! The live tests require TDX credentials in the environment:
//!   TDX_CLIENT_ID / TDX_CLIENT_SECRET
//!
//! Run only tests that don't touch the network:
//!   cargo test --test integration_tests
//!
//! Run ignored tests (require credentials and network access):
//!   cargo test --test integration_tests -- --ignored

use std::env;

use tdx_client::{TdxClient, TdxConfig};

/// Helper to build a config from environment credentials.
fn config_from_env() -> Option<TdxConfig> {
    let client_id = env::var("TDX_CLIENT_ID").ok()?;
    let client_secret = env::var("TDX_CLIENT_SECRET").ok()?;
    Some(TdxConfig::new(client_id, client_secret))
}

mod client_tests {
    use super::*;

    #[test]
    fn test_client_construction() {
        let client = TdxClient::new(TdxConfig::new("id", "secret")).unwrap();
        assert_eq!(client.config().operator, "TRTC");
    }

    #[tokio::test]
    async fn test_token_rejected_against_unreachable_host() {
        // Nothing listens on this port; the call must surface a typed error,
        // not panic.
        let config = TdxConfig::new("id", "secret")
            .with_auth_url("http://127.0.0.1:9")
            .with_api_url("http://127.0.0.1:9");
        let client = TdxClient::new(config).unwrap();

        let result = client.access_token().await;
        assert!(result.is_err());
    }
}

mod live_tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires TDX credentials and network access"]
    async fn test_live_token_acquisition() {
        dotenvy::dotenv().ok();
        let Some(config) = config_from_env() else {
            eprintln!("TDX_CLIENT_ID/TDX_CLIENT_SECRET not set; skipping");
            return;
        };

        let client = TdxClient::new(config).unwrap();
        let token = client.access_token().await.unwrap();
        assert!(!token.as_str().is_empty());
    }

    #[tokio::test]
    #[ignore = "requires TDX credentials and network access"]
    async fn test_live_metro_alerts() {
        dotenvy::dotenv().ok();
        let Some(config) = config_from_env() else {
            eprintln!("TDX_CLIENT_ID/TDX_CLIENT_SECRET not set; skipping");
            return;
        };

        let client = TdxClient::new(config).unwrap();
        let list = client.current_alerts().await.unwrap();
        // The operator always reports at least one record (the all-clear).
        for alert in &list.alerts {
            assert!(alert.status >= 0);
        }
    }
}
