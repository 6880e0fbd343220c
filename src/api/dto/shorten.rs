//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::utils::url_validator::validate_url;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be HTTP/HTTPS).
    #[validate(custom(function = "validate_http_url"))]
    pub url: String,
}

/// Response for a created short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_code: String,
    pub short_url: String,
}

fn validate_http_url(url: &str) -> Result<(), ValidationError> {
    validate_url(url).map_err(|e| {
        let mut error = ValidationError::new("url");
        error.message = Some(e.to_string().into());
        error
    })
}
