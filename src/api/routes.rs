//! API route configuration.

use crate::api::handlers::{health_handler, shorten_handler, stats_handler, stats_list_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes mounted under `/api`.
///
/// # Endpoints
///
/// - `GET  /health`       - Service health and store size
/// - `POST /shorten`      - Create a short link
/// - `GET  /stats`        - List all links with click counts
/// - `GET  /stats/{code}` - Statistics for one link
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/shorten", post(shorten_handler))
        .route("/stats", get(stats_list_handler))
        .route("/stats/{code}", get(stats_handler))
}
