// crates/dashboard/src/source.rs
//! Cluster listings: where applications and pods come from.
//!
//! [`ClusterSource`] is the seam between the collector and the outside world.
//! Production uses [`CliClusterSource`], which shells out to `argocd` and
//! `kubectl`; tests plug in canned listings.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::command::run_command;
use crate::error::SourceError;
use crate::model::{
    HealthStatus, ManagedApplication, PodPhase, ReadyRatio, SyncStatus, WorkloadInstance,
};

const UNKNOWN_NAME: &str = "unknown";

/// Something that can list GitOps applications and pods.
#[async_trait]
pub trait ClusterSource: Send + Sync {
    /// Every application known to the GitOps controller.
    async fn list_applications(&self) -> Result<Vec<ManagedApplication>, SourceError>;

    /// Every pod in the cluster, across all namespaces.
    async fn list_workloads(&self) -> Result<Vec<WorkloadInstance>, SourceError>;

    /// Source name for logging.
    fn name(&self) -> &str;
}

/// Lists cluster state through the `argocd` and `kubectl` CLIs.
pub struct CliClusterSource {
    argocd_bin: String,
    kubectl_bin: String,
    timeout: Duration,
}

impl CliClusterSource {
    pub fn new(timeout: Duration) -> Self {
        Self {
            argocd_bin: "argocd".to_string(),
            kubectl_bin: "kubectl".to_string(),
            timeout,
        }
    }

    /// Override the binaries invoked (e.g. absolute paths inside an image).
    pub fn with_binaries(mut self, argocd: impl Into<String>, kubectl: impl Into<String>) -> Self {
        self.argocd_bin = argocd.into();
        self.kubectl_bin = kubectl.into();
        self
    }
}

#[async_trait]
impl ClusterSource for CliClusterSource {
    async fn list_applications(&self) -> Result<Vec<ManagedApplication>, SourceError> {
        let raw = run_command(&self.argocd_bin, &["app", "list", "-o", "json"], self.timeout).await?;
        parse_applications(&raw)
    }

    async fn list_workloads(&self) -> Result<Vec<WorkloadInstance>, SourceError> {
        let raw = run_command(
            &self.kubectl_bin,
            &["get", "pods", "--all-namespaces", "-o", "json"],
            self.timeout,
        )
        .await?;
        parse_workloads(&raw)
    }

    fn name(&self) -> &str {
        "cli"
    }
}

// ============================================================================
// Wire formats
// ============================================================================

#[derive(Debug, Default, Deserialize)]
struct ObjectMeta {
    name: Option<String>,
    namespace: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct StatusField {
    status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ApplicationStatus {
    sync: Option<StatusField>,
    health: Option<StatusField>,
}

#[derive(Debug, Deserialize)]
struct ApplicationItem {
    #[serde(default)]
    metadata: ObjectMeta,
    #[serde(default)]
    status: ApplicationStatus,
}

#[derive(Debug, Deserialize)]
struct ContainerStatus {
    #[serde(default)]
    ready: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PodStatus {
    phase: Option<String>,
    container_statuses: Option<Vec<ContainerStatus>>,
}

#[derive(Debug, Deserialize)]
struct PodItem {
    #[serde(default)]
    metadata: ObjectMeta,
    #[serde(default)]
    status: PodStatus,
}

#[derive(Debug, Deserialize)]
struct PodList {
    #[serde(default)]
    items: Vec<PodItem>,
}

fn status_of(field: Option<StatusField>) -> String {
    field
        .and_then(|f| f.status)
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Parse `argocd app list -o json`. Empty output and `null` mean no apps.
pub fn parse_applications(raw: &str) -> Result<Vec<ManagedApplication>, SourceError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(Vec::new());
    }
    let items: Option<Vec<ApplicationItem>> =
        serde_json::from_str(raw).map_err(|source| SourceError::Malformed {
            listing: "application",
            source,
        })?;

    Ok(items
        .unwrap_or_default()
        .into_iter()
        .map(|item| {
            ManagedApplication::new(
                item.metadata.name.unwrap_or_else(|| UNKNOWN_NAME.to_string()),
                SyncStatus::from(status_of(item.status.sync).as_str()),
                HealthStatus::from(status_of(item.status.health).as_str()),
            )
        })
        .collect())
}

/// Parse `kubectl get pods -A -o json`. Pods without a namespace are dropped.
pub fn parse_workloads(raw: &str) -> Result<Vec<WorkloadInstance>, SourceError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(Vec::new());
    }
    let list: PodList = serde_json::from_str(raw).map_err(|source| SourceError::Malformed {
        listing: "pod",
        source,
    })?;

    Ok(list
        .items
        .into_iter()
        .filter_map(|item| {
            let namespace = item.metadata.namespace?;
            let ready = item
                .status
                .container_statuses
                .map(|containers| {
                    let ready = containers.iter().filter(|c| c.ready).count();
                    ReadyRatio::new(ready as u32, containers.len() as u32)
                })
                .unwrap_or_default();
            let phase = item
                .status
                .phase
                .as_deref()
                .map(PodPhase::from)
                .unwrap_or(PodPhase::Unknown);
            Some(WorkloadInstance::new(
                namespace,
                item.metadata.name.unwrap_or_else(|| UNKNOWN_NAME.to_string()),
                phase,
                ready,
            ))
        })
        .collect())
}
