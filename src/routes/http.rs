// GET handlers. None of them can fail: source errors are already folded into the bodies.

use axum::{Json, extract::State, response::IntoResponse};

use super::AppState;
use crate::report;
use crate::version::{NAME, VERSION};

/// GET /version: returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// GET /api/health: liveness plus the DB_* settings currently in the environment.
pub(super) async fn health_handler() -> impl IntoResponse {
    Json(report::health())
}

pub(super) async fn containers_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(report::containers(&state.config).await)
}

/// GET /api/system: blocks for the CPU sampling window before answering.
pub(super) async fn system_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(report::system(&state.config).await)
}

pub(super) async fn dashboard_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(report::dashboard(&state.config).await)
}
