use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use line_push::LineClient;
use tdx_client::TdxClient;
use tracing::{error, info, warn};

mod config;
mod pipeline;
mod routes;

use config::GatewayConfig;
use pipeline::LineSink;
use routes::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = match GatewayConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "Invalid configuration; refusing to start");
            std::process::exit(1);
        }
    };

    if config.trigger_secret.is_none() {
        warn!("CRON_SECRET not set; trigger endpoint is unauthenticated");
    }

    let tdx = match TdxClient::new(config.tdx()) {
        Ok(client) => client,
        Err(err) => {
            error!(error = %err, "Failed to build TDX client");
            std::process::exit(1);
        }
    };

    let line = match LineClient::new(config.line()) {
        Ok(client) => client,
        Err(err) => {
            error!(error = %err, "Failed to build LINE client");
            std::process::exit(1);
        }
    };

    let state = AppState {
        trigger_secret: config.trigger_secret.clone(),
        source: Arc::new(tdx),
        sink: Arc::new(LineSink::new(line, config.line_group_id.clone())),
    };

    let app = Router::new()
        .route("/", get(routes::trigger))
        .route("/health", get(routes::health))
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(%addr, "Alert gateway listening");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
