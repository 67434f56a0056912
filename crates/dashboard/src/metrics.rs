// crates/dashboard/src/metrics.rs
//! Dashboard metrics for Prometheus monitoring.
//!
//! The recorder itself lives in `gitops_demo_observability::prometheus`;
//! this module names and records the dashboard's own series.

use std::time::Duration;

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};

use crate::progress::DeploymentStats;

/// Install the Prometheus recorder and describe the dashboard metrics.
pub fn init_metrics() -> bool {
    let installed = gitops_demo_observability::prometheus::install_recorder();
    if installed {
        describe_metrics();
    }
    installed
}

fn describe_metrics() {
    describe_histogram!(
        "dashboard_collector_tick_seconds",
        "Duration of one collector refresh in seconds"
    );
    describe_counter!(
        "dashboard_source_failures_total",
        "Cluster listings that failed and were treated as empty"
    );
    describe_gauge!("dashboard_progress_percent", "Current deployment progress");
    describe_gauge!("dashboard_applications", "Applications by state");
    describe_gauge!("dashboard_pods", "Watched pods by state");
    describe_gauge!(
        "dashboard_stream_clients",
        "Connected /api/stream clients"
    );
}

/// Record a completed collector tick.
pub fn record_tick(duration: Duration, progress: u8, stats: &DeploymentStats) {
    histogram!("dashboard_collector_tick_seconds").record(duration.as_secs_f64());
    gauge!("dashboard_progress_percent").set(f64::from(progress));
    gauge!("dashboard_applications", "state" => "total").set(stats.total_apps as f64);
    gauge!("dashboard_applications", "state" => "synced").set(stats.synced_apps as f64);
    gauge!("dashboard_applications", "state" => "healthy").set(stats.healthy_apps as f64);
    gauge!("dashboard_pods", "state" => "total").set(stats.total_pods as f64);
    gauge!("dashboard_pods", "state" => "running").set(stats.running_pods as f64);
    gauge!("dashboard_pods", "state" => "ready").set(stats.ready_pods as f64);
}

/// Record a listing that collapsed to empty.
pub fn record_source_failure(listing: &'static str) {
    counter!("dashboard_source_failures_total", "listing" => listing).increment(1);
}

/// Keeps `dashboard_stream_clients` accurate for the lifetime of one stream.
pub struct StreamClientGuard;

impl StreamClientGuard {
    pub fn new() -> Self {
        gauge!("dashboard_stream_clients").increment(1.0);
        Self
    }
}

impl Default for StreamClientGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for StreamClientGuard {
    fn drop(&mut self) {
        gauge!("dashboard_stream_clients").decrement(1.0);
    }
}
