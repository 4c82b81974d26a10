// Host metrics via sysinfo. Every call samples a fresh System; no state survives between requests.

mod platform;

use platform::uptime_info;

use crate::models::{CpuInfo, MemoryInfo, PlatformInfo, UptimeInfo};
use crate::units::{bytes_to_mb, round2, used_percent};
use std::time::Duration;
use sysinfo::System;
use tracing::instrument;

/// Host part of the system report (everything except the Docker daemon block).
#[derive(Debug, Clone)]
pub struct HostSample {
    pub hostname: String,
    pub platform: PlatformInfo,
    pub cpu: CpuInfo,
    pub memory: MemoryInfo,
    pub uptime: UptimeInfo,
}

impl HostSample {
    /// Zeroed sample used when the OS could not be read; keeps the report shape intact.
    pub fn unavailable() -> Self {
        Self {
            hostname: System::host_name().unwrap_or_default(),
            platform: platform::platform_info(),
            cpu: CpuInfo {
                logical_cores: 0,
                usage_percent: 0.0,
                load_average: None,
            },
            memory: MemoryInfo {
                total_mb: 0.0,
                available_mb: 0.0,
                used_percent: 0.0,
            },
            uptime: UptimeInfo {
                seconds: 0.0,
                boot_time: String::new(),
            },
        }
    }
}

/// Samples CPU, memory, uptime and platform identity. Blocks for `cpu_sample_interval`
/// (at least sysinfo's minimum refresh interval) on a blocking thread to measure CPU usage.
#[instrument(fields(repo = "sysinfo", operation = "sample_host"))]
pub async fn sample_host(cpu_sample_interval: Duration) -> anyhow::Result<HostSample> {
    tokio::task::spawn_blocking(move || {
        let mut sys = System::new();

        sys.refresh_cpu_usage();
        std::thread::sleep(cpu_sample_interval.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL));
        sys.refresh_cpu_usage();
        let cpu = CpuInfo {
            logical_cores: sys.cpus().len() as u32,
            usage_percent: round2(sys.global_cpu_usage() as f64).clamp(0.0, 100.0),
            load_average: platform::load_average(),
        };

        sys.refresh_memory();
        let total = sys.total_memory();
        let available = sys.available_memory();
        let memory = MemoryInfo {
            total_mb: bytes_to_mb(total),
            available_mb: bytes_to_mb(available),
            used_percent: used_percent(total, available),
        };

        Ok(HostSample {
            hostname: System::host_name().unwrap_or_default(),
            platform: platform::platform_info(),
            cpu,
            memory,
            uptime: uptime_info(System::boot_time(), chrono::Utc::now()),
        })
    })
    .await
    .map_err(|e| anyhow::anyhow!("sysinfo task join: {}", e))?
}
