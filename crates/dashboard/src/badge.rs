// crates/dashboard/src/badge.rs
//! Shields.io endpoint badges.
//!
//! Each badge is `{"schemaVersion":1,"label":..,"message":..,"color":..}`,
//! ready for `https://img.shields.io/endpoint?url=...`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::{DeploymentSnapshot, HealthStatus};
use crate::progress::DeploymentStats;

/// Named shields.io colors used by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeColor {
    Success,
    Inactive,
    Blue,
    Orange,
    Yellow,
    Red,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub schema_version: u8,
    pub label: String,
    pub message: String,
    pub color: BadgeColor,
}

impl Badge {
    fn new(label: &str, message: impl Into<String>, color: BadgeColor) -> Self {
        Self {
            schema_version: 1,
            label: label.to_string(),
            message: message.into(),
            color,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeKind {
    Argocd,
    Pods,
    Health,
    Deployment,
}

impl FromStr for BadgeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "argocd" => Ok(Self::Argocd),
            "pods" => Ok(Self::Pods),
            "health" => Ok(Self::Health),
            "deployment" => Ok(Self::Deployment),
            other => Err(other.to_string()),
        }
    }
}

impl BadgeKind {
    pub fn render(self, snapshot: &DeploymentSnapshot) -> Badge {
        let stats = DeploymentStats::collect(&snapshot.applications, &snapshot.workloads);
        match self {
            Self::Argocd => argocd_badge(&stats),
            Self::Pods => pods_badge(&stats),
            Self::Health => health_badge(snapshot),
            Self::Deployment => deployment_badge(snapshot.progress),
        }
    }
}

fn argocd_badge(stats: &DeploymentStats) -> Badge {
    if stats.total_apps == 0 {
        return Badge::new("ArgoCD", "No Apps", BadgeColor::Inactive);
    }
    let color = if stats.synced_apps == stats.total_apps {
        BadgeColor::Success
    } else {
        BadgeColor::Yellow
    };
    Badge::new(
        "ArgoCD",
        format!("{}/{} Synced", stats.synced_apps, stats.total_apps),
        color,
    )
}

fn pods_badge(stats: &DeploymentStats) -> Badge {
    if stats.total_pods == 0 {
        return Badge::new("Pods", "No Pods", BadgeColor::Inactive);
    }
    let color = if stats.running_pods == stats.total_pods {
        BadgeColor::Success
    } else {
        BadgeColor::Orange
    };
    Badge::new(
        "Pods",
        format!("{}/{} Running", stats.running_pods, stats.total_pods),
        color,
    )
}

fn health_badge(snapshot: &DeploymentSnapshot) -> Badge {
    let apps = &snapshot.applications;
    if apps.is_empty() {
        Badge::new("Health", "Unknown", BadgeColor::Inactive)
    } else if apps.iter().any(|a| a.health == HealthStatus::Degraded) {
        Badge::new("Health", "Degraded", BadgeColor::Red)
    } else if apps.iter().all(|a| a.health == HealthStatus::Healthy) {
        Badge::new("Health", "Healthy", BadgeColor::Success)
    } else {
        Badge::new("Health", "Progressing", BadgeColor::Yellow)
    }
}

fn deployment_badge(progress: u8) -> Badge {
    let color = match progress {
        100..=u8::MAX => return Badge::new("Deployment", "Complete", BadgeColor::Success),
        70..=99 => BadgeColor::Yellow,
        30..=69 => BadgeColor::Orange,
        _ => BadgeColor::Blue,
    };
    Badge::new("Deployment", format!("{progress}%"), color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ManagedApplication, PodPhase, ReadyRatio, SyncStatus, WorkloadInstance};
    use pretty_assertions::assert_eq;

    fn snapshot(
        applications: Vec<ManagedApplication>,
        workloads: Vec<WorkloadInstance>,
        progress: u8,
    ) -> DeploymentSnapshot {
        DeploymentSnapshot {
            applications,
            workloads,
            progress,
            ..DeploymentSnapshot::initial()
        }
    }

    fn app(sync: SyncStatus, health: HealthStatus) -> ManagedApplication {
        ManagedApplication::new("app", sync, health)
    }

    #[test]
    fn test_badge_kind_parse() {
        assert_eq!("argocd".parse::<BadgeKind>(), Ok(BadgeKind::Argocd));
        assert_eq!("deployment".parse::<BadgeKind>(), Ok(BadgeKind::Deployment));
        assert_eq!("coverage".parse::<BadgeKind>(), Err("coverage".to_string()));
    }

    #[test]
    fn test_badge_serialization() {
        let json = serde_json::to_value(Badge::new("Pods", "No Pods", BadgeColor::Inactive)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "schemaVersion": 1,
                "label": "Pods",
                "message": "No Pods",
                "color": "inactive",
            })
        );
    }

    #[test]
    fn test_argocd_badge() {
        let none = BadgeKind::Argocd.render(&snapshot(vec![], vec![], 10));
        assert_eq!(none.color, BadgeColor::Inactive);

        let synced = vec![
            app(SyncStatus::Synced, HealthStatus::Healthy),
            app(SyncStatus::Synced, HealthStatus::Progressing),
        ];
        let all = BadgeKind::Argocd.render(&snapshot(synced, vec![], 60));
        assert_eq!(all, Badge::new("ArgoCD", "2/2 Synced", BadgeColor::Success));

        let mixed = vec![
            app(SyncStatus::Synced, HealthStatus::Healthy),
            app(SyncStatus::OutOfSync, HealthStatus::Healthy),
        ];
        let partial = BadgeKind::Argocd.render(&snapshot(mixed, vec![], 60));
        assert_eq!(partial, Badge::new("ArgoCD", "1/2 Synced", BadgeColor::Yellow));
    }

    #[test]
    fn test_pods_badge() {
        let pods = vec![
            WorkloadInstance::new("argocd", "a", PodPhase::Running, ReadyRatio::new(1, 1)),
            WorkloadInstance::new("argocd", "b", PodPhase::Pending, ReadyRatio::new(0, 1)),
        ];
        let badge = BadgeKind::Pods.render(&snapshot(vec![], pods, 10));
        assert_eq!(badge, Badge::new("Pods", "1/2 Running", BadgeColor::Orange));

        let badge = BadgeKind::Pods.render(&snapshot(vec![], vec![], 10));
        assert_eq!(badge.message, "No Pods");
    }

    #[test]
    fn test_health_badge() {
        let degraded = vec![
            app(SyncStatus::Synced, HealthStatus::Healthy),
            app(SyncStatus::Synced, HealthStatus::Degraded),
        ];
        assert_eq!(
            BadgeKind::Health.render(&snapshot(degraded, vec![], 50)).color,
            BadgeColor::Red
        );

        let healthy = vec![app(SyncStatus::Synced, HealthStatus::Healthy)];
        assert_eq!(
            BadgeKind::Health.render(&snapshot(healthy, vec![], 70)).message,
            "Healthy"
        );

        let progressing = vec![app(SyncStatus::Synced, HealthStatus::Progressing)];
        assert_eq!(
            BadgeKind::Health.render(&snapshot(progressing, vec![], 40)).color,
            BadgeColor::Yellow
        );
    }

    #[test]
    fn test_deployment_badge_bands() {
        let color = |p| deployment_badge(p).color;
        assert_eq!(color(0), BadgeColor::Blue);
        assert_eq!(color(29), BadgeColor::Blue);
        assert_eq!(color(30), BadgeColor::Orange);
        assert_eq!(color(69), BadgeColor::Orange);
        assert_eq!(color(70), BadgeColor::Yellow);
        assert_eq!(color(99), BadgeColor::Yellow);
        assert_eq!(
            deployment_badge(100),
            Badge::new("Deployment", "Complete", BadgeColor::Success)
        );
        assert_eq!(deployment_badge(25).message, "25%");
    }
}
