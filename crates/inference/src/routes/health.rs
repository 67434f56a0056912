// crates/inference/src/routes/health.rs
//! Liveness and readiness probes.
//!
//! The classifier has no external dependencies, so readiness is identical
//! to liveness apart from the status string.

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::state::AppState;

/// Service name reported by the probes.
pub const SERVICE_NAME: &str = "ml-inference";

/// Response for the probe endpoints.
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: String,
}

impl HealthResponse {
    fn now(status: &str) -> Self {
        Self {
            status: status.to_string(),
            service: SERVICE_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}

/// GET /health - Kubernetes liveness probe.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::now("healthy"))
}

/// GET /ready - Kubernetes readiness probe.
pub async fn readiness_check() -> Json<HealthResponse> {
    Json(HealthResponse::now("ready"))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
}
