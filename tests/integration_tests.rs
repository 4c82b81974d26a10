// Integration tests: HTTP endpoints with the Docker daemon unreachable

mod common;

use axum_test::TestServer;
use common::{config_without_docker, keys};
use dockwatch::routes;
use serde_json::{Value, json};

fn test_server() -> TestServer {
    TestServer::new(routes::app(config_without_docker())).unwrap()
}

#[tokio::test]
async fn test_root_endpoint() {
    let server = test_server();
    let response = server.get("/").await;
    response.assert_status_ok();
    response.assert_text("dockwatch: host and container monitor");
}

#[tokio::test]
async fn test_version_endpoint() {
    let server = test_server();
    let response = server.get("/version").await;
    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json.get("name").and_then(|v| v.as_str()), Some("dockwatch"));
    assert!(json.get("version").and_then(|v| v.as_str()).is_some());
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = test_server();
    let response = server.get("/api/health").await;
    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "backend");
    assert_eq!(keys(&json["database"]), ["host", "name", "port", "user"]);
    for key in ["host", "port", "name", "user"] {
        let value = json["database"][key].as_str().unwrap();
        assert!(!value.is_empty(), "database.{key} is empty");
    }
}

#[tokio::test]
async fn test_containers_unavailable_without_socket() {
    let server = test_server();
    let response = server.get("/api/containers").await;
    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(
        json,
        json!({
            "docker_access": "unavailable",
            "error": "Docker socket not accessible from backend container.",
            "count": 0,
            "containers": [],
        })
    );
}

#[tokio::test]
async fn test_system_keeps_shape_without_socket() {
    let server = test_server();
    let response = server.get("/api/system").await;
    response.assert_status_ok();
    let json: Value = response.json();

    assert_eq!(
        keys(&json),
        ["cpu", "docker", "hostname", "memory", "platform", "timestamp", "uptime"]
    );
    assert_eq!(
        keys(&json["platform"]),
        ["machine", "release", "runtime_version", "system"]
    );
    assert_eq!(
        keys(&json["cpu"]),
        ["load_average", "logical_cores", "usage_percent"]
    );
    assert_eq!(
        keys(&json["memory"]),
        ["available_mb", "total_mb", "used_percent"]
    );
    assert_eq!(keys(&json["uptime"]), ["boot_time", "seconds"]);
    assert_eq!(json["docker"], json!({ "error": "Docker socket not accessible." }));

    let used = json["memory"]["used_percent"].as_f64().unwrap();
    assert!((0.0..=100.0).contains(&used));
    for key in ["total_mb", "available_mb"] {
        let mb = json["memory"][key].as_f64().unwrap();
        assert!(mb >= 0.0);
        assert!(((mb * 100.0).round() - mb * 100.0).abs() < 1e-6, "{key} = {mb}");
    }
    assert!(
        chrono::DateTime::parse_from_rfc3339(json["timestamp"].as_str().unwrap()).is_ok()
    );
}

#[tokio::test]
async fn test_dashboard_nests_endpoint_bodies() {
    let server = test_server();
    let dashboard: Value = server.get("/api/dashboard").await.json();
    assert_eq!(keys(&dashboard), ["containers", "health", "system"]);

    let health: Value = server.get("/api/health").await.json();
    let containers: Value = server.get("/api/containers").await.json();
    let system: Value = server.get("/api/system").await.json();

    assert_eq!(dashboard["health"], health);
    assert_eq!(dashboard["containers"], containers);
    assert_eq!(keys(&dashboard["system"]), keys(&system));
    assert_eq!(dashboard["system"]["docker"], system["docker"]);
    assert_eq!(dashboard["system"]["platform"], system["platform"]);
    assert_eq!(dashboard["system"]["hostname"], system["hostname"]);
    assert_eq!(
        dashboard["system"]["memory"]["total_mb"],
        system["memory"]["total_mb"]
    );
    assert_eq!(
        dashboard["system"]["cpu"]["logical_cores"],
        system["cpu"]["logical_cores"]
    );
}
