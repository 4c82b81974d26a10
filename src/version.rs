// Build-time identity from Cargo.toml

/// Package version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name (from Cargo.toml); also reported as the runtime version in /api/system.
pub const NAME: &str = env!("CARGO_PKG_NAME");
