//! HTTP routes: the trigger pipeline and the liveness probe.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::{error, info, warn};

use crate::pipeline::{AlertSink, AlertSource};

/// Body returned when service is normal.
pub const NORMAL_MESSAGE: &str = "一切正常";

/// Shared state for the request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shared secret the trigger's bearer header must match.
    pub trigger_secret: Option<String>,
    /// Upstream alert source.
    pub source: Arc<dyn AlertSource>,
    /// Notification sink.
    pub sink: Arc<dyn AlertSink>,
}

#[derive(Debug, Serialize)]
pub struct Health {
    status: String,
}

/// Status body for the trigger endpoint.
#[derive(Debug, Serialize)]
pub struct TriggerResponse {
    status: String,
    message: String,
}

impl TriggerResponse {
    fn normal() -> Self {
        Self {
            status: "ok".to_string(),
            message: NORMAL_MESSAGE.to_string(),
        }
    }

    fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}

/// Liveness probe; never touches the upstreams.
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
    })
}

/// Trigger endpoint: check alerts and notify when service is abnormal.
///
/// The `debug` query flag switches the benign paths to diagnostics: a
/// fetch error is surfaced verbatim, and a normal status returns the
/// unfiltered upstream payload instead of the summary body.
pub async fn trigger(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    authorize(&state, &headers)?;
    let debug_mode = params.contains_key("debug");

    let alerts = match state.source.fetch_alerts().await {
        Ok(alerts) => alerts,
        Err(err) => {
            warn!(error = %err, "alert fetch failed; reporting normal service");
            if debug_mode {
                return Ok(Json(TriggerResponse::error(err.to_string())).into_response());
            }
            return Ok(Json(TriggerResponse::normal()).into_response());
        }
    };

    let Some(message) = alert_digest::digest(&alerts) else {
        info!(alerts = alerts.len(), "service normal");
        if debug_mode {
            return Ok(raw_dump(&state).await);
        }
        return Ok(Json(TriggerResponse::normal()).into_response());
    };

    match state.sink.push(&message).await {
        Ok(()) => {
            info!("alert notification delivered");
            Ok(Json(TriggerResponse::success(message)).into_response())
        }
        Err(err) => {
            error!(error = %err, "alert notification failed");
            Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(TriggerResponse::error(err.to_string())),
            )
                .into_response())
        }
    }
}

/// Diagnostic path: return the unfiltered upstream payload verbatim.
async fn raw_dump(state: &AppState) -> Response {
    match state.source.fetch_raw().await {
        Ok(raw) => Json(raw).into_response(),
        Err(err) => {
            warn!(error = %err, "raw alert fetch failed");
            Json(TriggerResponse::error(err.to_string())).into_response()
        }
    }
}

fn authorize(state: &AppState, headers: &HeaderMap) -> Result<(), ApiError> {
    let Some(expected) = state.trigger_secret.as_deref() else {
        return Ok(());
    };

    let Some(value) = headers.get(axum::http::header::AUTHORIZATION) else {
        return Err(ApiError::Unauthorized);
    };

    let Ok(value) = value.to_str() else {
        return Err(ApiError::Unauthorized);
    };

    let Some(token) = value.strip_prefix("Bearer ") else {
        return Err(ApiError::Unauthorized);
    };

    if token != expected {
        return Err(ApiError::Unauthorized);
    }

    Ok(())
}

#[derive(Debug)]
pub enum ApiError {
    Unauthorized,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unauthorized => {
                warn!("Unauthorized trigger request");
                (
                    StatusCode::UNAUTHORIZED,
                    Json(TriggerResponse::error("unauthorized")),
                )
                    .into_response()
            }
        }
    }
}
