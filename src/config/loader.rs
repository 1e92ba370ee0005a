//! Configuration loader
//!
//! Assembles the configuration from environment variables and validates it
//! against the config schema. Coercion happens here, before validation:
//!
//! - strings pass through; absent or empty values fall back to a default
//! - numbers accept decimal and exponent forms (`1e4`); absent, unparsable or
//!   non-finite values fall back to a default, and the schema rejects fractions
//! - booleans are `true` only for the exact string `"true"`
//! - `appDebug` follows `APP_DEBUG` when set, otherwise it is enabled in `development`

use super::schema::{AppConfig, LoggingConfig};
use crate::domain::errors::UserflowError;
use crate::domain::result::Result;
use crate::schema::{registry, validate};
use serde_json::{json, Number, Value};

pub const ENV_API_ENV: &str = "API_ENV";
pub const ENV_API_BASE_URL: &str = "API_BASE_URL";
pub const ENV_API_USE_MOCK: &str = "API_USE_MOCK";
pub const ENV_API_TIMEOUT: &str = "API_TIMEOUT";
pub const ENV_APP_NAME: &str = "APP_NAME";
pub const ENV_APP_VERSION: &str = "APP_VERSION";
pub const ENV_APP_DEBUG: &str = "APP_DEBUG";

pub const ENV_LOG_LOCAL_ENABLED: &str = "LOG_LOCAL_ENABLED";
pub const ENV_LOG_LOCAL_PATH: &str = "LOG_LOCAL_PATH";
pub const ENV_LOG_LOCAL_ROTATION: &str = "LOG_LOCAL_ROTATION";

pub const DEFAULT_ENVIRONMENT: &str = "development";
pub const DEFAULT_BASE_URL: &str = "/mock";
pub const DEFAULT_TIMEOUT_MS: i64 = 5000;
pub const DEFAULT_APP_NAME: &str = "Service Demo";
pub const DEFAULT_APP_VERSION: &str = "1.0.0";

/// Loads configuration from the process environment
///
/// Called once at startup; the result is passed explicitly to every collaborator.
///
/// # Errors
///
/// Returns [`UserflowError::Configuration`] naming the offending fields if any
/// value violates the config schema. No partial configuration is ever returned.
///
/// # Examples
///
/// ```no_run
/// use userflow::config::load_config;
///
/// let config = load_config().expect("invalid configuration");
/// println!("API: {} ({})", config.base_url, config.environment);
/// ```
pub fn load_config() -> Result<AppConfig> {
    load_config_from(|key| std::env::var(key).ok())
}

/// Loads configuration from an arbitrary key/value source
///
/// # Examples
///
/// ```
/// use userflow::config::load_config_from;
/// use std::collections::HashMap;
///
/// let vars = HashMap::from([("API_TIMEOUT", "1500")]);
/// let config = load_config_from(|key| vars.get(key).map(|v| v.to_string())).unwrap();
/// assert_eq!(config.timeout_ms, 1500);
/// assert_eq!(config.base_url, "/mock");
/// ```
pub fn load_config_from<F>(lookup: F) -> Result<AppConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = assemble_raw_config(&lookup);
    let schema = registry::config_schema()?;

    let config = validate(&schema, &raw, "Config").map_err(|e| {
        UserflowError::Configuration(format!(
            "Config validation failed for [{}]: {}",
            e.fields().join(", "),
            e
        ))
    })?;

    tracing::debug!(
        environment = %config.environment,
        base_url = %config.base_url,
        use_mock = config.use_mock,
        timeout_ms = config.timeout_ms,
        "Configuration loaded"
    );

    Ok(config)
}

/// Loads logging configuration from the process environment
///
/// # Errors
///
/// Returns [`UserflowError::Configuration`] if the settings are invalid
pub fn load_logging_config() -> Result<LoggingConfig> {
    load_logging_config_from(|key| std::env::var(key).ok())
}

/// Loads logging configuration from an arbitrary key/value source
///
/// # Errors
///
/// Returns [`UserflowError::Configuration`] if the settings are invalid
pub fn load_logging_config_from<F>(lookup: F) -> Result<LoggingConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = LoggingConfig::default();
    let config = LoggingConfig {
        local_enabled: flag(lookup(ENV_LOG_LOCAL_ENABLED)),
        local_path: string_or(lookup(ENV_LOG_LOCAL_PATH), &defaults.local_path),
        local_rotation: string_or(lookup(ENV_LOG_LOCAL_ROTATION), &defaults.local_rotation),
    };

    config
        .validate()
        .map_err(|e| UserflowError::Configuration(format!("Logging configuration invalid: {e}")))?;

    Ok(config)
}

/// Builds the raw, unvalidated config object
fn assemble_raw_config<F>(lookup: &F) -> Value
where
    F: Fn(&str) -> Option<String>,
{
    let environment = string_or(lookup(ENV_API_ENV), DEFAULT_ENVIRONMENT);
    let app_debug = match lookup(ENV_APP_DEBUG) {
        Some(value) if !value.is_empty() => value == "true",
        _ => environment == DEFAULT_ENVIRONMENT,
    };

    json!({
        "environment": environment,
        "baseURL": string_or(lookup(ENV_API_BASE_URL), DEFAULT_BASE_URL),
        "useMock": flag(lookup(ENV_API_USE_MOCK)),
        "timeout": number_or(lookup(ENV_API_TIMEOUT), DEFAULT_TIMEOUT_MS),
        "appName": string_or(lookup(ENV_APP_NAME), DEFAULT_APP_NAME),
        "appVersion": string_or(lookup(ENV_APP_VERSION), DEFAULT_APP_VERSION),
        "appDebug": app_debug,
    })
}

fn string_or(value: Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => default.to_string(),
    }
}

/// Any finite decimal or exponent form is kept as a number; integrality and range
/// are left to the config schema. Unparsable input falls back to `default`.
fn number_or(value: Option<String>, default: i64) -> Value {
    let Some(raw) = value else {
        return Value::from(default);
    };
    let raw = raw.trim();

    if let Ok(n) = raw.parse::<i64>() {
        return Value::from(n);
    }
    raw.parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or_else(|| Value::from(default))
}

fn flag(value: Option<String>) -> bool {
    value.as_deref() == Some("true")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        load_config_from(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_ms, 5000);
        assert_eq!(config.app_name, DEFAULT_APP_NAME);
        assert_eq!(config.app_version, DEFAULT_APP_VERSION);
        assert!(!config.use_mock);
        assert!(config.app_debug);
    }

    #[test]
    fn test_empty_strings_fall_back() {
        let config = load(&[(ENV_API_BASE_URL, ""), (ENV_APP_NAME, "")]).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.app_name, DEFAULT_APP_NAME);
    }

    #[test]
    fn test_unparsable_timeout_falls_back() {
        let config = load(&[(ENV_API_TIMEOUT, "soon")]).unwrap();
        assert_eq!(config.timeout_ms, 5000);
    }

    #[test]
    fn test_exponent_timeout_is_honoured() {
        let config = load(&[(ENV_API_TIMEOUT, "1e4")]).unwrap();
        assert_eq!(config.timeout_ms, 10_000);
    }

    #[test]
    fn test_fractional_timeout_rejected() {
        match load(&[(ENV_API_TIMEOUT, "1500.5")]) {
            Err(UserflowError::Configuration(msg)) => assert!(msg.contains("timeout"), "{msg}"),
            other => panic!("Expected Configuration error, got {other:?}"),
        }
    }

    #[test]
    fn test_overflowing_timeout_rejected() {
        match load(&[(ENV_API_TIMEOUT, "99999999999999999999")]) {
            Err(UserflowError::Configuration(msg)) => assert!(msg.contains("timeout"), "{msg}"),
            other => panic!("Expected Configuration error, got {other:?}"),
        }
    }

    #[test]
    fn test_non_finite_timeout_falls_back() {
        assert_eq!(load(&[(ENV_API_TIMEOUT, "inf")]).unwrap().timeout_ms, 5000);
        assert_eq!(load(&[(ENV_API_TIMEOUT, "NaN")]).unwrap().timeout_ms, 5000);
    }

    #[test]
    fn test_non_positive_timeout_rejected() {
        let err = load(&[(ENV_API_TIMEOUT, "0")]).unwrap_err();
        match err {
            UserflowError::Configuration(msg) => assert!(msg.contains("timeout")),
            other => panic!("Expected Configuration error, got {other:?}"),
        }
        assert!(load(&[(ENV_API_TIMEOUT, "-10")]).is_err());
    }

    #[test]
    fn test_unknown_environment_rejected() {
        let err = load(&[(ENV_API_ENV, "staging")]).unwrap_err();
        assert!(err.to_string().contains("environment"));
    }

    #[test]
    fn test_boolean_requires_exact_true() {
        assert!(load(&[(ENV_API_USE_MOCK, "true")]).unwrap().use_mock);
        assert!(!load(&[(ENV_API_USE_MOCK, "TRUE")]).unwrap().use_mock);
        assert!(!load(&[(ENV_API_USE_MOCK, "1")]).unwrap().use_mock);
    }

    #[test]
    fn test_debug_follows_environment_unless_set() {
        assert!(!load(&[(ENV_API_ENV, "production")]).unwrap().app_debug);
        assert!(load(&[(ENV_API_ENV, "production"), (ENV_APP_DEBUG, "true")])
            .unwrap()
            .app_debug);
        assert!(!load(&[(ENV_APP_DEBUG, "false")]).unwrap().app_debug);
    }

    #[test]
    fn test_logging_config_from_vars() {
        let config = load_logging_config_from(|key| match key {
            ENV_LOG_LOCAL_ENABLED => Some("true".to_string()),
            ENV_LOG_LOCAL_PATH => Some("/tmp/userflow".to_string()),
            _ => None,
        })
        .unwrap();
        assert!(config.local_enabled);
        assert_eq!(config.local_path, "/tmp/userflow");
        assert_eq!(config.local_rotation, "daily");
    }

    #[test]
    fn test_logging_config_rejects_rotation() {
        let result = load_logging_config_from(|key| {
            (key == ENV_LOG_LOCAL_ROTATION).then(|| "weekly".to_string())
        });
        assert!(matches!(result, Err(UserflowError::Configuration(_))));
    }
}
