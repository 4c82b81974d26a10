// Host metrics models (GET /api/system)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformInfo {
    /// OS name, e.g. "Linux".
    pub system: String,
    /// Kernel release.
    pub release: String,
    /// Machine architecture, e.g. "x86_64".
    pub machine: String,
    /// Build identity of this service.
    pub runtime_version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpuInfo {
    pub logical_cores: u32,
    pub usage_percent: f64,
    /// 1, 5 and 15 minute load averages; null where the OS has none.
    pub load_average: Option<[f64; 3]>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryInfo {
    pub total_mb: f64,
    pub available_mb: f64,
    pub used_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UptimeInfo {
    pub seconds: f64,
    pub boot_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaemonInfo {
    pub name: String,
    pub server_version: String,
    pub os: String,
    pub kernel_version: String,
    pub cpus: i64,
    pub memory_total_mb: f64,
}

/// Daemon block of the system report: real info or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DaemonStatus {
    Available(DaemonInfo),
    Unavailable { error: String },
}

impl DaemonStatus {
    pub fn unavailable(message: impl Into<String>) -> Self {
        DaemonStatus::Unavailable {
            error: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostMetrics {
    /// RFC 3339 UTC.
    pub timestamp: String,
    pub hostname: String,
    pub platform: PlatformInfo,
    pub cpu: CpuInfo,
    pub memory: MemoryInfo,
    pub uptime: UptimeInfo,
    pub docker: DaemonStatus,
}
