// crates/inference/src/routes/mod.rs
//! HTTP route handlers for the inference service.

pub mod health;
pub mod info;
pub mod metrics;
pub mod predict;

use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

/// Create the combined router.
///
/// Routes:
/// - GET  /               - Service info and endpoint map
/// - GET  /health         - Liveness probe
/// - GET  /ready          - Readiness probe
/// - POST /predict        - Classify one text
/// - POST /predict/batch  - Classify up to 20 texts
/// - GET  /metrics        - Prometheus metrics
pub fn api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(info::router())
        .merge(health::router())
        .merge(predict::router())
        .merge(metrics::router())
        .with_state(state)
}
