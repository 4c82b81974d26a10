// Response models; each serializes to the fixed JSON shape of its endpoint.

mod container;
mod health;
mod system;

pub use container::{ContainerInventory, ContainerSummary, DOCKER_UNAVAILABLE_MESSAGE, DockerAccess};
pub use health::{Dashboard, DatabaseSettings, HealthReport, NOT_SET};
pub use system::{
    CpuInfo, DaemonInfo, DaemonStatus, HostMetrics, MemoryInfo, PlatformInfo, UptimeInfo,
};
