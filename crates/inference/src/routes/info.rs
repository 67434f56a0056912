// crates/inference/src/routes/info.rs
//! `GET /` - service description and endpoint map.

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

pub const SERVICE_TITLE: &str = "ML Inference Service - GitOps Demo";

#[derive(Debug, Serialize)]
pub struct Endpoints {
    pub health: &'static str,
    pub ready: &'static str,
    pub predict: &'static str,
    pub batch: &'static str,
    pub metrics: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub version: &'static str,
    pub status: &'static str,
    pub endpoints: Endpoints,
}

pub async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: SERVICE_TITLE,
        version: env!("CARGO_PKG_VERSION"),
        status: "running",
        endpoints: Endpoints {
            health: "/health",
            ready: "/ready",
            predict: "/predict",
            batch: "/predict/batch",
            metrics: "/metrics",
        },
    })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(service_info))
}
