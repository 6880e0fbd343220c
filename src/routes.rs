//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`        - Liveness probe
//! - `GET  /{code}`  - Short link redirect
//! - `/api/*`        - REST API (see [`crate::api::routes`])
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{redirect_handler, root_health_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Application routes with tracing, without path normalization.
///
/// Integration tests drive this router directly.
pub fn app_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_health_handler))
        .route("/{code}", get(redirect_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the served application, trimming trailing slashes before routing.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(app_routes(state))
}
