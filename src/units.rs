// Number formatting shared by the host and daemon reports.

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Rounds to two decimal places (half away from zero).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Bytes to mebibytes, rounded to two decimals.
pub fn bytes_to_mb(bytes: u64) -> f64 {
    round2(bytes as f64 / BYTES_PER_MB)
}

/// Share of `total` not covered by `available`, in percent, clamped to [0, 100].
pub fn used_percent(total: u64, available: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let used = total.saturating_sub(available);
    round2((used as f64 / total as f64) * 100.0).clamp(0.0, 100.0)
}
