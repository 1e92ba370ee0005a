//! Integration tests for configuration loading and validation
//!
//! These tests read and write real process environment variables, so they
//! are serialized through `ENV_MUTEX`.

use std::sync::{Mutex, MutexGuard};
use test_case::test_case;
use userflow::config::{load_config, load_logging_config, Environment};
use userflow::domain::UserflowError;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

const VARS: &[&str] = &[
    "API_ENV",
    "API_BASE_URL",
    "API_USE_MOCK",
    "API_TIMEOUT",
    "APP_NAME",
    "APP_VERSION",
    "APP_DEBUG",
    "LOG_LOCAL_ENABLED",
    "LOG_LOCAL_PATH",
    "LOG_LOCAL_ROTATION",
];

/// Lock the environment and start from a clean slate
fn clean_env() -> MutexGuard<'static, ()> {
    let guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    for var in VARS {
        std::env::remove_var(var);
    }
    guard
}

#[test]
fn test_defaults_when_environment_is_empty() {
    let _env = clean_env();

    let config = load_config().unwrap();
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.base_url, "/mock");
    assert!(!config.use_mock);
    assert_eq!(config.timeout_ms, 5000);
    assert_eq!(config.app_name, "Service Demo");
    assert_eq!(config.app_version, "1.0.0");
    assert!(config.app_debug);
}

#[test]
fn test_full_production_config() {
    let _env = clean_env();
    std::env::set_var("API_ENV", "production");
    std::env::set_var("API_BASE_URL", "https://api.example.com");
    std::env::set_var("API_USE_MOCK", "false");
    std::env::set_var("API_TIMEOUT", "12000");
    std::env::set_var("APP_NAME", "Admin Console");
    std::env::set_var("APP_VERSION", "2.4.1");

    let config = load_config().unwrap();
    assert_eq!(config.environment, Environment::Production);
    assert_eq!(config.base_url, "https://api.example.com");
    assert_eq!(config.timeout_ms, 12000);
    assert_eq!(config.app_name, "Admin Console");
    assert_eq!(config.app_version, "2.4.1");
    assert!(!config.app_debug);
}

#[test]
fn test_explicit_debug_flag_overrides_environment() {
    let _env = clean_env();
    std::env::set_var("API_ENV", "docker");
    std::env::set_var("APP_DEBUG", "true");
    assert!(load_config().unwrap().app_debug);

    std::env::set_var("API_ENV", "development");
    std::env::set_var("APP_DEBUG", "false");
    assert!(!load_config().unwrap().app_debug);
}

#[test]
fn test_mock_flag_requires_exact_true() {
    let _env = clean_env();
    std::env::set_var("API_USE_MOCK", "TRUE");
    assert!(!load_config().unwrap().use_mock);

    std::env::set_var("API_USE_MOCK", "true");
    assert!(load_config().unwrap().use_mock);
}

#[test]
fn test_unparsable_timeout_falls_back_to_default() {
    let _env = clean_env();
    std::env::set_var("API_TIMEOUT", "soon");

    assert_eq!(load_config().unwrap().timeout_ms, 5000);
}

#[test_case("API_ENV", "staging", "environment" ; "unknown environment")]
#[test_case("API_TIMEOUT", "0", "timeout" ; "zero timeout")]
#[test_case("API_TIMEOUT", "-250", "timeout" ; "negative timeout")]
fn test_invalid_values_are_rejected(var: &str, value: &str, field: &str) {
    let _env = clean_env();
    std::env::set_var(var, value);

    match load_config() {
        Err(UserflowError::Configuration(message)) => {
            assert!(message.contains("Config validation failed"), "{message}");
            assert!(message.contains(field), "{message}");
        }
        other => panic!("expected configuration error, got {other:?}"),
    }
}

#[test]
fn test_logging_config_from_environment() {
    let _env = clean_env();
    std::env::set_var("LOG_LOCAL_ENABLED", "true");
    std::env::set_var("LOG_LOCAL_PATH", "/tmp/userflow-logs");
    std::env::set_var("LOG_LOCAL_ROTATION", "hourly");

    let logging = load_logging_config().unwrap();
    assert!(logging.local_enabled);
    assert_eq!(logging.local_path, "/tmp/userflow-logs");
    assert_eq!(logging.local_rotation, "hourly");
}

#[test]
fn test_logging_config_rejects_unknown_rotation() {
    let _env = clean_env();
    std::env::set_var("LOG_LOCAL_ROTATION", "weekly");

    assert!(matches!(
        load_logging_config(),
        Err(UserflowError::Configuration(_))
    ));
}
