//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (frontend bundle is present)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::server::error::{ServerError, ServerResult};
use crate::server::state::AppState;

/// Full health status body
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub frontend: String,
    pub uptime_seconds: u64,
    pub version: String,
}

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Returns 200 once the static bundle can be served.
pub async fn readiness(State(state): State<Arc<AppState>>) -> ServerResult<StatusCode> {
    if state.frontend_ready().await {
        Ok(StatusCode::OK)
    } else {
        Err(ServerError::ServiceUnavailable(format!(
            "frontend bundle missing at {:?}",
            state.config.index_file()
        )))
    }
}

/// GET /health
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let frontend_ok = state.frontend_ready().await;

    Json(HealthResponse {
        status: if frontend_ok { "healthy" } else { "degraded" }.to_string(),
        frontend: if frontend_ok { "ok" } else { "missing" }.to_string(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
