// crates/inference/src/error.rs
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Structured JSON error response for API errors
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

/// API error types that map to HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body parsed but violates a field constraint.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Body missing, not JSON, or the wrong shape.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Every request problem is reported as 422, whatever the extractor
        // would have chosen.
        let error_response = match &self {
            ApiError::Validation(msg) => {
                tracing::debug!(error = %msg, "Request failed validation");
                ErrorResponse::with_details("Validation failed", msg.clone())
            }
            ApiError::InvalidBody(msg) => {
                tracing::debug!(error = %msg, "Request body rejected");
                ErrorResponse::with_details("Invalid request body", msg.clone())
            }
        };

        (StatusCode::UNPROCESSABLE_ENTITY, Json(error_response)).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
