//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /healthz`     - Liveness check
//! - `GET  /{code}`      - Short link redirect, records a click
//! - `/api/links*`       - JSON link management
//! - `/dashboard/*`      - HTML dashboard
//! - `/_assets/*`        - Static files from `static/`
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive, so the JSON API can be called from other origins
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Builds the router with all routes and per-request middleware.
///
/// Static routes are registered alongside `/{code}`; axum prefers the static
/// segment, so a link whose code is literally `healthz` cannot be reached
/// through the redirect route. Every other top-level prefix contains a
/// character that no code can have, or is longer than 8 characters.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .nest("/api", api::routes::routes())
        .nest("/dashboard", web::routes::routes())
        .nest_service("/_assets", ServeDir::new("static"))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(tracing::layer())
}

/// Constructs the application service served by the binary.
///
/// Wraps [`build_router`] so that `/api/links/` and `/api/links` resolve to
/// the same handler.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}
