// Docker daemon queries via bollard. Each request connects afresh; nothing is pooled.

mod summary;

use crate::config::DockerConfig;
use crate::models::{ContainerInventory, ContainerSummary, DaemonInfo, DaemonStatus};
use bollard::Docker;
use bollard::query_parameters::ListContainersOptions;
use std::collections::HashMap;
use tracing::{instrument, warn};

/// Shown in the system report when the daemon socket cannot be reached.
pub const DAEMON_UNAVAILABLE_MESSAGE: &str = "Docker socket not accessible.";

#[derive(Debug, thiserror::Error)]
pub enum DockerError {
    #[error("Docker daemon unreachable: {0}")]
    Unreachable(bollard::errors::Error),
    #[error(transparent)]
    Query(#[from] bollard::errors::Error),
}

pub struct DockerRepo {
    docker: Docker,
}

impl DockerRepo {
    /// Opens a client on the configured socket and pings the daemon.
    pub async fn try_connect(config: &DockerConfig) -> Result<Self, DockerError> {
        let docker = Docker::connect_with_unix(
            &config.socket_path,
            config.timeout_secs,
            bollard::API_DEFAULT_VERSION,
        )
        .map_err(DockerError::Unreachable)?;
        docker.ping().await.map_err(DockerError::Unreachable)?;
        Ok(Self { docker })
    }

    /// Like [`try_connect`](Self::try_connect) but never fails: any connection problem is `None`.
    pub async fn connect(config: &DockerConfig) -> Option<Self> {
        match Self::try_connect(config).await {
            Ok(repo) => Some(repo),
            Err(e) => {
                warn!(socket = %config.socket_path, "{}", e);
                None
            }
        }
    }

    /// All containers, running or not, in daemon order.
    #[instrument(skip(self), fields(repo = "docker", operation = "list_containers"))]
    pub async fn list_containers(&self) -> Result<Vec<ContainerSummary>, DockerError> {
        let options = ListContainersOptions {
            all: true,
            ..Default::default()
        };
        let containers = self.docker.list_containers(Some(options)).await?;

        let mut tags_by_image: HashMap<String, Option<Vec<String>>> = HashMap::new();
        let mut out = Vec::with_capacity(containers.len());
        for c in &containers {
            let tags = match c.image_id.as_deref() {
                Some(image_id) => {
                    if !tags_by_image.contains_key(image_id) {
                        let tags = self.image_tags(image_id).await;
                        tags_by_image.insert(image_id.to_string(), tags);
                    }
                    tags_by_image.get(image_id).cloned().flatten()
                }
                None => None,
            };
            out.push(summary::summarize(c, tags.as_deref()));
        }
        Ok(out)
    }

    /// Tags of an image; `None` when the image cannot be inspected (e.g. removed since).
    async fn image_tags(&self, image_id: &str) -> Option<Vec<String>> {
        match self.docker.inspect_image(image_id).await {
            Ok(image) => image.repo_tags,
            Err(e) => {
                warn!(image = %image_id, "Docker inspect_image failed: {}", e);
                None
            }
        }
    }

    #[instrument(skip(self), fields(repo = "docker", operation = "daemon_info"))]
    pub async fn daemon_info(&self) -> Result<DaemonInfo, DockerError> {
        let info = self.docker.info().await?;
        let version = match self.docker.version().await {
            Ok(v) => Some(v),
            Err(e) => {
                warn!("Docker version failed: {}", e);
                None
            }
        };
        Ok(summary::daemon_info(&info, version.as_ref()))
    }
}

/// GET /api/containers: unavailable when the socket is unreachable, error when a query fails.
pub async fn container_inventory(config: &DockerConfig) -> ContainerInventory {
    let Some(repo) = DockerRepo::connect(config).await else {
        return ContainerInventory::unavailable();
    };
    match repo.list_containers().await {
        Ok(containers) => ContainerInventory::ok(containers),
        Err(e) => {
            warn!("Docker list_containers failed: {}", e);
            ContainerInventory::error(e.to_string())
        }
    }
}

/// Daemon block of GET /api/system; failures become an `{"error": ...}` placeholder.
pub async fn daemon_status(config: &DockerConfig) -> DaemonStatus {
    let Some(repo) = DockerRepo::connect(config).await else {
        return DaemonStatus::unavailable(DAEMON_UNAVAILABLE_MESSAGE);
    };
    match repo.daemon_info().await {
        Ok(info) => DaemonStatus::Available(info),
        Err(e) => {
            warn!("Docker info failed: {}", e);
            DaemonStatus::unavailable(e.to_string())
        }
    }
}
