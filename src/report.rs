// Endpoint bodies. Each call queries its sources afresh and always yields a complete body.

use crate::config::AppConfig;
use crate::docker_repo;
use crate::env_repo;
use crate::models::{ContainerInventory, Dashboard, HealthReport, HostMetrics};
use crate::sysinfo_repo::{self, HostSample};
use std::time::Duration;
use tracing::error;

/// GET /api/health
pub fn health() -> HealthReport {
    HealthReport::ok(env_repo::database_settings())
}

/// GET /api/containers
pub async fn containers(config: &AppConfig) -> ContainerInventory {
    docker_repo::container_inventory(&config.docker).await
}

/// GET /api/system. The daemon query overlaps the CPU sampling window.
pub async fn system(config: &AppConfig) -> HostMetrics {
    let timestamp = chrono::Utc::now().to_rfc3339();
    let interval = Duration::from_millis(config.monitoring.cpu_sample_interval_ms);
    let (host, docker) = tokio::join!(
        sysinfo_repo::sample_host(interval),
        docker_repo::daemon_status(&config.docker),
    );
    let host = host.unwrap_or_else(|e| {
        error!("host metrics unavailable: {}", e);
        HostSample::unavailable()
    });
    HostMetrics {
        timestamp,
        hostname: host.hostname,
        platform: host.platform,
        cpu: host.cpu,
        memory: host.memory,
        uptime: host.uptime,
        docker,
    }
}

/// GET /api/dashboard: the three bodies above, unmodified.
pub async fn dashboard(config: &AppConfig) -> Dashboard {
    let (containers, system) = tokio::join!(containers(config), system(config));
    Dashboard {
        health: health(),
        containers,
        system,
    }
}
