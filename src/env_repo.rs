// Database connection settings as seen in the process environment (reported, never used).

use crate::models::{DatabaseSettings, NOT_SET};

pub const DB_HOST: &str = "DB_HOST";
pub const DB_PORT: &str = "DB_PORT";
pub const DB_NAME: &str = "DB_NAME";
pub const DB_USER: &str = "DB_USER";

/// Reads the DB_* variables from the process environment.
pub fn database_settings() -> DatabaseSettings {
    database_settings_from(|key| std::env::var(key).ok())
}

/// Reads the DB_* variables through `lookup`. Unset, empty or non-UTF-8 values become "not-set".
pub fn database_settings_from<F>(lookup: F) -> DatabaseSettings
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| {
        lookup(key)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| NOT_SET.to_string())
    };
    DatabaseSettings {
        host: get(DB_HOST),
        port: get(DB_PORT),
        name: get(DB_NAME),
        user: get(DB_USER),
    }
}
