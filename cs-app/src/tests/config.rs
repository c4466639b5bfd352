use crate::AppConfig;
use crate::tests::EnvGuard;

use std::path::PathBuf;
use std::time::Duration;

use serial_test::serial;

#[test]
#[serial]
fn test_config_defaults() {
    let _db = EnvGuard::remove("DATABASE_PATH");
    let _latency = EnvGuard::remove("AUTH_LATENCY_MS");
    let _level = EnvGuard::remove("LOG_LEVEL");
    let _key = EnvGuard::remove("MAIL_PUBLIC_KEY");

    let config = AppConfig::from_env();

    assert_eq!(config.database_path, PathBuf::from("data/curbshare.db"));
    assert_eq!(config.auth_latency, Duration::from_millis(1000));
    assert_eq!(config.log_level, "info");
    assert!(config.log_colored);
    assert!(config.log_file.is_none());
    assert!(!config.mail.is_configured());
}

#[test]
#[serial]
fn test_config_reads_overrides() {
    let _db = EnvGuard::set("DATABASE_PATH", "/tmp/other.db");
    let _latency = EnvGuard::set("AUTH_LATENCY_MS", "0");
    let _level = EnvGuard::set("LOG_LEVEL", "debug");
    let _key = EnvGuard::set("MAIL_PUBLIC_KEY", "pk_live_1234");

    let config = AppConfig::from_env();

    assert_eq!(config.database_path, PathBuf::from("/tmp/other.db"));
    assert_eq!(config.auth_latency, Duration::ZERO);
    assert_eq!(config.log_level, "debug");
    assert!(config.mail.is_configured());
}

#[test]
#[serial]
fn test_unparseable_latency_falls_back_to_default() {
    let _latency = EnvGuard::set("AUTH_LATENCY_MS", "soon");

    let config = AppConfig::from_env();

    assert_eq!(config.auth_latency, Duration::from_millis(1000));
}
