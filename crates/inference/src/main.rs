// crates/inference/src/main.rs
//! Sentiment inference server binary.

use std::net::SocketAddr;

use anyhow::Result;
use gitops_demo_inference::{create_app, init_metrics, InferenceConfig};

#[tokio::main]
async fn main() -> Result<()> {
    gitops_demo_observability::init_tracing("info,tower_http=warn")?;

    // Initialize Prometheus metrics
    if !init_metrics() {
        tracing::warn!("Prometheus recorder unavailable, /metrics will return 503");
    }

    let config = InferenceConfig::from_env();
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = create_app(config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Starting ML inference service v{}", env!("CARGO_PKG_VERSION"));

    axum::serve(listener, app).await?;

    Ok(())
}
