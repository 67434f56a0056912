// crates/dashboard/src/main.rs
//! GitOps dashboard binary.
//!
//! Starts the collector first so the initial tick is already running while
//! the listener binds, then serves the dashboard until killed.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use gitops_demo_dashboard::{
    create_app, init_metrics, AppState, CliClusterSource, DashboardConfig, StateStore,
    StatusCollector,
};

#[tokio::main]
async fn main() -> Result<()> {
    gitops_demo_observability::init_tracing("warn,gitops_demo_dashboard=info,tower_http=info")?;

    // Initialize Prometheus metrics
    if !init_metrics() {
        tracing::warn!("Prometheus recorder unavailable, /metrics will return 503");
    }

    let config = DashboardConfig::from_env();
    tracing::info!(
        port = config.port,
        base_domain = config.base_domain.as_deref().unwrap_or("<local>"),
        namespaces = ?config.namespaces,
        "Starting GitOps dashboard v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Step 1: Shared snapshot store and background collector
    let store = StateStore::new();
    let source = Arc::new(CliClusterSource::new(config.command_timeout));
    let _collector = StatusCollector::new(source, store.clone(), &config).spawn();

    // Step 2: Bind and serve
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = create_app(AppState::new(store, config));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Dashboard listening");

    axum::serve(listener, app).await?;

    Ok(())
}
