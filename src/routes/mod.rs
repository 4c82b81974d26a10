// HTTP routes

mod http;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::config::AppConfig;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: Arc<AppConfig>,
}

pub fn app(config: AppConfig) -> Router {
    let state = AppState {
        config: Arc::new(config),
    };
    Router::new()
        .route("/", get(|| async { "dockwatch: host and container monitor" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/health", get(http::health_handler)) // GET /api/health
        .route("/api/containers", get(http::containers_handler)) // GET /api/containers
        .route("/api/system", get(http::system_handler)) // GET /api/system
        .route("/api/dashboard", get(http::dashboard_handler)) // GET /api/dashboard
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
