// DB_* settings read from the real process environment

use dockwatch::env_repo::{DB_HOST, DB_NAME, DB_PORT, DB_USER, database_settings};
use dockwatch::models::NOT_SET;
use dockwatch::report;

#[test]
fn test_database_settings_follow_process_env() {
    unsafe {
        std::env::set_var(DB_HOST, "postgres");
        std::env::set_var(DB_PORT, "5432");
        std::env::remove_var(DB_NAME);
        std::env::set_var(DB_USER, "");
    }
    let s = database_settings();
    assert_eq!(s.host, "postgres");
    assert_eq!(s.port, "5432");
    assert_eq!(s.name, NOT_SET);
    assert_eq!(s.user, NOT_SET);

    let health = report::health();
    assert_eq!(health.status, "ok");
    assert_eq!(health.service, "backend");
    assert_eq!(health.database, s);

    unsafe {
        std::env::remove_var(DB_HOST);
        std::env::remove_var(DB_PORT);
        std::env::remove_var(DB_USER);
    }
    let s = database_settings();
    assert_eq!(s.host, NOT_SET);
    assert_eq!(s.port, NOT_SET);
}
