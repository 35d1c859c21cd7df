//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Reports that the process is up.
///
/// # Endpoint
///
/// `GET /healthz`
///
/// # Response
///
/// ```json
/// { "ok": true, "version": "0.1.0", "uptime": 42 }
/// ```
///
/// The store is not probed; this is a liveness check only.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: state.started_at.elapsed().as_secs(),
    })
}
