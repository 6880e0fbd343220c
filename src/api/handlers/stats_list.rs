//! Handler for the link listing.

use axum::{Json, extract::State};

use crate::api::dto::stats::{LinkSummary, StatsListResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists every stored link with its click count, oldest first.
///
/// # Endpoint
///
/// `GET /api/stats`
pub async fn stats_list_handler(
    State(state): State<AppState>,
) -> Result<Json<StatsListResponse>, AppError> {
    let urls: Vec<LinkSummary> = state
        .stats_service
        .list_links()
        .await?
        .into_iter()
        .map(LinkSummary::from)
        .collect();

    Ok(Json(StatsListResponse {
        total: urls.len(),
        urls,
    }))
}
