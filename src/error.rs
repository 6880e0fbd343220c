//! Application error type and its HTTP representation.
//!
//! Every variant carries a human-readable message and a JSON `details`
//! payload. Handlers return `Result<_, AppError>` and axum renders the error
//! through [`IntoResponse`].

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::ValidationErrors;

/// Message returned for any rejected input URL.
pub const INVALID_URL_MESSAGE: &str = "Invalid URL";

/// Message returned when a short code is not in the store.
pub const NOT_FOUND_MESSAGE: &str = "Short code not found";

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    code: &'static str,
    details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    #[error("{message}")]
    Conflict { message: String, details: Value },

    #[error("{message}")]
    CodeSpaceExhausted { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    /// Shorthand for the error returned when a URL fails validation.
    pub fn invalid_url(reason: impl Into<String>) -> Self {
        Self::bad_request(INVALID_URL_MESSAGE, json!({ "reason": reason.into() }))
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    /// Shorthand for the error returned when a short code is unknown.
    pub fn code_not_found(code: &str) -> Self {
        Self::not_found(NOT_FOUND_MESSAGE, json!({ "short_code": code }))
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    /// Raised when every generated code collided with an existing record.
    pub fn code_space_exhausted(attempts: usize) -> Self {
        Self::CodeSpaceExhausted {
            message: "Failed to generate a unique short code".to_string(),
            details: json!({ "attempts": attempts }),
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status code this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::CodeSpaceExhausted { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable code used in the response body.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "invalid_url",
            AppError::NotFound { .. } => "not_found",
            AppError::Conflict { .. } => "conflict",
            AppError::CodeSpaceExhausted { .. } => "code_space_exhausted",
            AppError::Internal { .. } => "internal_error",
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|k| k.to_string())
            .collect();
        AppError::bad_request(INVALID_URL_MESSAGE, json!({ "fields": fields }))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();

        let (message, details) = match self {
            AppError::Validation { message, details }
            | AppError::NotFound { message, details }
            | AppError::Conflict { message, details }
            | AppError::CodeSpaceExhausted { message, details }
            | AppError::Internal { message, details } => (message, details),
        };

        if status.is_server_error() {
            tracing::error!(%status, code, %message, "Request failed");
        }

        let body = ErrorBody {
            error: message,
            code,
            details,
        };

        (status, Json(body)).into_response()
    }
}
