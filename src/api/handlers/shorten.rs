//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "short_code": "aB3dE9",
///   "short_url": "http://localhost:5000/aB3dE9"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not JSON, has no `url`, or the URL
/// is not HTTP(S).
/// Returns 503 Service Unavailable if no unique code could be generated.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) =
        payload.map_err(|rejection| AppError::invalid_url(rejection.body_text()))?;
    payload.validate()?;

    let link = state.link_service.create_short_link(payload.url).await?;
    let short_url = state.link_service.get_short_url(&link.code);

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_code: link.code,
            short_url,
        }),
    ))
}
