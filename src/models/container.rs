// Docker container inventory models

use serde::{Deserialize, Serialize};

/// Shown when the daemon socket cannot be reached at all.
pub const DOCKER_UNAVAILABLE_MESSAGE: &str = "Docker socket not accessible from backend container.";

/// Whether the inventory could talk to the daemon; serializes lowercase (e.g. "unavailable").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DockerAccess {
    Ok,
    Unavailable,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerSummary {
    pub id: String,
    pub name: String,
    pub image: String,
    /// Daemon lifecycle state ("running", "exited", ...), "unknown" when the daemon omits it.
    pub state: String,
    pub status: String,
}

/// GET /api/containers body. Every key is always present, whatever the daemon's state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerInventory {
    pub docker_access: DockerAccess,
    pub error: Option<String>,
    pub count: usize,
    pub containers: Vec<ContainerSummary>,
}

impl ContainerInventory {
    /// Sorts by name (stable, so duplicate names keep daemon order) and counts.
    pub fn ok(mut containers: Vec<ContainerSummary>) -> Self {
        containers.sort_by(|a, b| a.name.cmp(&b.name));
        Self {
            docker_access: DockerAccess::Ok,
            error: None,
            count: containers.len(),
            containers,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            docker_access: DockerAccess::Unavailable,
            error: Some(DOCKER_UNAVAILABLE_MESSAGE.to_string()),
            count: 0,
            containers: vec![],
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            docker_access: DockerAccess::Error,
            error: Some(message.into()),
            count: 0,
            containers: vec![],
        }
    }
}
