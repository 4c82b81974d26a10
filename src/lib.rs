// Library for tests to access modules

pub mod config;
pub mod docker_repo;
pub mod env_repo;
pub mod models;
pub mod report;
pub mod routes;
pub mod sysinfo_repo;
pub mod units;
pub mod version;
