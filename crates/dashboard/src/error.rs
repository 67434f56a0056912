// crates/dashboard/src/error.rs
use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Why a cluster listing could not be produced.
///
/// Never reaches an HTTP client: the collector collapses every variant to an
/// empty listing and tries again next tick.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} timed out after {}s", .timeout.as_secs())]
    Timeout { program: String, timeout: Duration },

    #[error("{program} exited with code {}: {stderr}", .code.map_or_else(|| "none".to_string(), |c| c.to_string()))]
    ExitStatus {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Malformed {listing} JSON: {source}")]
    Malformed {
        listing: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Structured JSON error response for API errors
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

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
    #[error("Badge not found: {0}")]
    BadgeNotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            ApiError::BadgeNotFound(name) => {
                tracing::warn!(badge = %name, "Badge not found");
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse::with_details(
                        "Badge not found",
                        format!("Unknown badge '{name}', expected argocd, pods, health or deployment"),
                    ),
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
