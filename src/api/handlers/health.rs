//! Handlers for health check endpoints.

use axum::{Json, extract::State};

use crate::api::dto::health::{HealthResponse, RootHealthResponse};
use crate::error::AppError;
use crate::state::AppState;

const SERVICE_NAME: &str = "URL Shortener API";

/// Liveness probe.
///
/// # Endpoint
///
/// `GET /`
pub async fn root_health_handler() -> Json<RootHealthResponse> {
    Json(RootHealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
    })
}

/// Service health with store size.
///
/// # Endpoint
///
/// `GET /api/health`
///
/// # Response
///
/// ```json
/// {
///   "status": "ok",
///   "message": "URL Shortener API is running",
///   "version": "0.1.0",
///   "links": 42
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, AppError> {
    let links = state.stats_service.count_links().await?;

    Ok(Json(HealthResponse {
        status: "ok",
        message: "URL Shortener API is running",
        version: env!("CARGO_PKG_VERSION"),
        links,
    }))
}
