// Platform identity, load average and uptime helpers.

use crate::models::{PlatformInfo, UptimeInfo};
use crate::units::round2;
use crate::version::{NAME, VERSION};
use chrono::{DateTime, Utc};
use sysinfo::System;

pub(super) fn platform_info() -> PlatformInfo {
    PlatformInfo {
        system: System::name().unwrap_or_else(|| os_family().into()),
        release: System::kernel_version().unwrap_or_default(),
        machine: std::env::consts::ARCH.into(),
        runtime_version: format!("{} {}", NAME, VERSION),
    }
}

/// "Linux", "Darwin", ... as `uname -s` would print it.
fn os_family() -> &'static str {
    match std::env::consts::OS {
        "linux" => "Linux",
        "macos" => "Darwin",
        "windows" => "Windows",
        "freebsd" => "FreeBSD",
        other => other,
    }
}

/// 1/5/15 minute load averages. Windows has none, so it reports `None` rather than zeros.
pub(super) fn load_average() -> Option<[f64; 3]> {
    #[cfg(unix)]
    {
        let l = System::load_average();
        Some([round2(l.one), round2(l.five), round2(l.fifteen)])
    }
    #[cfg(not(unix))]
    None
}

/// Uptime relative to `now` for a boot time in seconds since the epoch.
pub(super) fn uptime_info(boot_time_secs: u64, now: DateTime<Utc>) -> UptimeInfo {
    let boot = DateTime::<Utc>::from_timestamp(boot_time_secs as i64, 0).unwrap_or(now);
    let elapsed_ms = (now - boot).num_milliseconds().max(0);
    UptimeInfo {
        seconds: round2(elapsed_ms as f64 / 1000.0),
        boot_time: boot.to_rfc3339(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn uptime_info_measures_from_boot() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
            + chrono::Duration::milliseconds(1_234);
        let boot = Utc.with_ymd_and_hms(2024, 5, 1, 11, 0, 0).unwrap();
        let u = uptime_info(boot.timestamp() as u64, now);
        assert_eq!(u.seconds, 3601.23);
        assert_eq!(u.boot_time, "2024-05-01T11:00:00+00:00");
    }

    #[test]
    fn uptime_info_never_negative() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let u = uptime_info(now.timestamp() as u64 + 60, now);
        assert_eq!(u.seconds, 0.0);
    }

    #[test]
    fn platform_info_reports_build_identity() {
        let p = platform_info();
        assert!(!p.system.is_empty());
        assert_eq!(p.machine, std::env::consts::ARCH);
        assert!(p.runtime_version.starts_with("dockwatch "));
    }

    #[cfg(unix)]
    #[test]
    fn load_average_present_on_unix() {
        let l = load_average().unwrap();
        assert!(l.iter().all(|v| *v >= 0.0));
    }
}
