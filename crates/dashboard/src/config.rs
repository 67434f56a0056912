// crates/dashboard/src/config.rs
//! Dashboard configuration.
//!
//! Only the port and the base domain come from the environment. Cadences and
//! the namespace allow-list are fixed defaults that tests shorten directly.

use std::time::Duration;

use serde::Serialize;

/// Default port for the dashboard.
pub const DEFAULT_PORT: u16 = 8080;

/// How often the collector refreshes cluster state.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(3);

/// How often each stream client receives a snapshot.
pub const DEFAULT_STREAM_INTERVAL: Duration = Duration::from_secs(3);

/// Upper bound on a single `argocd`/`kubectl` invocation.
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(5);

/// Namespaces whose pods count towards deployment progress.
pub const WATCHED_NAMESPACES: [&str; 3] = ["ml-inference", "monitoring", "argocd"];

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub port: u16,
    /// Public base domain (e.g. `demo.example.com`). `None` means local links.
    pub base_domain: Option<String>,
    pub poll_interval: Duration,
    pub stream_interval: Duration,
    pub command_timeout: Duration,
    pub namespaces: Vec<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            base_domain: None,
            poll_interval: DEFAULT_POLL_INTERVAL,
            stream_interval: DEFAULT_STREAM_INTERVAL,
            command_timeout: DEFAULT_COMMAND_TIMEOUT,
            namespaces: WATCHED_NAMESPACES.iter().map(|ns| ns.to_string()).collect(),
        }
    }
}

impl DashboardConfig {
    /// Read `DASHBOARD_PORT` (falling back to `PORT`) and `BASE_DOMAIN`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("DASHBOARD_PORT")
            .or_else(|| lookup("PORT"))
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let base_domain = lookup("BASE_DOMAIN")
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        Self {
            port,
            base_domain,
            ..Self::default()
        }
    }

    pub fn links(&self) -> ServiceLinks {
        match &self.base_domain {
            Some(domain) => ServiceLinks {
                argocd: format!("https://argocd.{domain}"),
                grafana: format!("https://grafana.{domain}"),
                prometheus: format!("https://prometheus.{domain}"),
                api: format!("https://api.{domain}"),
            },
            None => ServiceLinks {
                argocd: "http://localhost:8081".to_string(),
                grafana: "http://localhost:3000".to_string(),
                prometheus: "http://localhost:9090".to_string(),
                api: "http://localhost:8000".to_string(),
            },
        }
    }
}

/// Outbound links rendered in the dashboard page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceLinks {
    pub argocd: String,
    pub grafana: String,
    pub prometheus: String,
    pub api: String,
}
