// crates/inference/src/routes/metrics.rs
//! Prometheus metrics endpoint.

use std::sync::Arc;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use gitops_demo_observability::prometheus;

use crate::state::AppState;

/// GET /metrics - Prometheus scrape target.
///
/// 503 until the recorder has been installed.
pub async fn metrics_handler() -> Response {
    let Some(output) = prometheus::render() else {
        return (StatusCode::SERVICE_UNAVAILABLE, "Metrics not initialized").into_response();
    };
    ([(header::CONTENT_TYPE, prometheus::CONTENT_TYPE)], output).into_response()
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/metrics", get(metrics_handler))
}
