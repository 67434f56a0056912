// crates/dashboard/src/routes/index.rs
//! `GET /` - the dashboard page.
//!
//! A static shell; live data arrives over `/api/stream`. Only the outbound
//! service links depend on configuration.

use std::sync::Arc;

use axum::{extract::State, response::Html, routing::get, Router};

use crate::config::ServiceLinks;
use crate::state::AppState;

const TEMPLATE: &str = include_str!("../../assets/dashboard.html");

/// Fill the link placeholders of the page template.
pub fn render_page(links: &ServiceLinks) -> String {
    TEMPLATE
        .replace("{{ARGOCD_URL}}", &links.argocd)
        .replace("{{GRAFANA_URL}}", &links.grafana)
        .replace("{{PROMETHEUS_URL}}", &links.prometheus)
        .replace("{{API_URL}}", &links.api)
}

pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render_page(&state.config.links()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(index))
}
