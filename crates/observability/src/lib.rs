// crates/observability/src/lib.rs
//! Shared logging and metrics bootstrap for the GitOps demo services.
//!
//! Both binaries call [`init_tracing`] first thing in `main`, then
//! [`prometheus::install_recorder`] before any metric is recorded.

pub mod prometheus;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable selecting the log output format (`json` or `text`).
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Output format for the fmt layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact human-readable lines (default).
    Text,
    /// One JSON object per event, for log shippers in the cluster.
    Json,
}

impl LogFormat {
    /// Resolve the format from `LOG_FORMAT`. Anything other than `json` is text.
    pub fn from_env() -> Self {
        match std::env::var(LOG_FORMAT_ENV) {
            Ok(v) if v.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `default_filter`
/// (e.g. `"warn,gitops_demo_dashboard=info"`).
pub fn init_tracing(default_filter: &str) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let registry = tracing_subscriber::registry().with(filter);

    match LogFormat::from_env() {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .try_init()?,
        LogFormat::Text => registry.with(fmt::layer().compact()).try_init()?,
    }
    Ok(())
}
