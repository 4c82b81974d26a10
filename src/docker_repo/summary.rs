// Project raw Docker API responses into our models.

use crate::models::{ContainerSummary, DaemonInfo};
use crate::units::bytes_to_mb;
use bollard::models::{ContainerSummary as DockerContainer, SystemInfo, SystemVersion};

const SHORT_ID_LEN: usize = 12;
const SHORT_IMAGE_DIGEST_LEN: usize = 10;

/// Container id as printed by `docker ps` (first 12 chars).
pub(crate) fn short_id(id: &str) -> String {
    id.chars().take(SHORT_ID_LEN).collect()
}

/// Image id as printed by `docker images`: "sha256:" plus 10 hex chars.
pub(crate) fn short_image_id(id: &str) -> String {
    match id.strip_prefix("sha256:") {
        Some(digest) => format!(
            "sha256:{}",
            digest.chars().take(SHORT_IMAGE_DIGEST_LEN).collect::<String>()
        ),
        None => id.chars().take(SHORT_IMAGE_DIGEST_LEN).collect(),
    }
}

/// Builds a summary from a list entry. `image_tags` are the tags of the container's image,
/// when the image could be inspected.
pub(crate) fn summarize(c: &DockerContainer, image_tags: Option<&[String]>) -> ContainerSummary {
    let id = c.id.as_deref().unwrap_or_default();
    let name = c
        .names
        .as_ref()
        .and_then(|n| n.first())
        .map(|n| n.trim_start_matches('/').to_string())
        .unwrap_or_else(|| short_id(id));

    let image = image_tags
        .and_then(|tags| tags.first())
        .cloned()
        .or_else(|| c.image_id.as_deref().map(short_image_id))
        .or_else(|| c.image.clone())
        .unwrap_or_default();

    let state = c
        .state
        .as_ref()
        .map(|s| s.to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".into());

    ContainerSummary {
        id: short_id(id),
        name,
        image,
        state,
        status: c.status.clone().unwrap_or_default(),
    }
}

/// Daemon identity from `/info`; the server version prefers `/version` when it answered.
pub(crate) fn daemon_info(info: &SystemInfo, version: Option<&SystemVersion>) -> DaemonInfo {
    let server_version = version
        .and_then(|v| v.version.clone())
        .or_else(|| info.server_version.clone())
        .unwrap_or_default();
    DaemonInfo {
        name: info.name.clone().unwrap_or_default(),
        server_version,
        os: info.operating_system.clone().unwrap_or_default(),
        kernel_version: info.kernel_version.clone().unwrap_or_default(),
        cpus: info.ncpu.unwrap_or(0),
        memory_total_mb: bytes_to_mb(info.mem_total.unwrap_or(0).max(0) as u64),
    }
}
