// Shared test helpers

use dockwatch::config::AppConfig;

/// Config whose Docker socket does not exist, so every daemon query reports unavailable.
pub fn config_without_docker() -> AppConfig {
    let mut config = AppConfig::default();
    config.docker.socket_path = "/nonexistent/dockwatch-test/docker.sock".into();
    config.docker.timeout_secs = 2;
    config.monitoring.cpu_sample_interval_ms = 50;
    config
}

/// Sorted top-level keys of a JSON object.
#[allow(dead_code)]
pub fn keys(value: &serde_json::Value) -> Vec<String> {
    let mut keys: Vec<String> = value
        .as_object()
        .map(|o| o.keys().cloned().collect())
        .unwrap_or_default();
    keys.sort();
    keys
}
