// Health and dashboard bodies

use serde::{Deserialize, Serialize};

use super::{ContainerInventory, HostMetrics};

/// Substituted for any DB_* variable that is not set.
pub const NOT_SET: &str = "not-set";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: String,
    pub name: String,
    pub user: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub service: String,
    pub database: DatabaseSettings,
}

impl HealthReport {
    pub fn ok(database: DatabaseSettings) -> Self {
        Self {
            status: "ok".into(),
            service: "backend".into(),
            database,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub health: HealthReport,
    pub containers: ContainerInventory,
    pub system: HostMetrics,
}
