//! Configuration schema types
//!
//! Typed configuration produced by [`crate::config::loader`]. `AppConfig` values
//! only come out of schema validation, so every field already satisfies its
//! constraint when you hold one.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Containerised deployment
    Docker,
    /// Production
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Docker => "docker",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application configuration
///
/// Field names on the wire follow the environment-facing names
/// (`baseURL`, `useMock`, ...), which is what the config schema validates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,

    /// API base URL, or the fixture directory in mock mode
    #[serde(rename = "baseURL")]
    pub base_url: String,

    /// Read static fixtures instead of calling the live API
    pub use_mock: bool,

    /// Request timeout in milliseconds
    #[serde(rename = "timeout")]
    pub timeout_ms: u64,

    /// Application name
    pub app_name: String,

    /// Application version
    pub app_version: String,

    /// Verbose payload diagnostics
    pub app_debug: bool,
}

impl AppConfig {
    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Whether `base_url` points at a remote server rather than a local directory
    pub fn base_url_is_remote(&self) -> bool {
        self.base_url.starts_with("http://") || self.base_url.starts_with("https://")
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily or hourly)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    /// Validates the logging configuration
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid setting
    pub fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when file logging is enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_config() -> AppConfig {
        AppConfig {
            environment: Environment::Docker,
            base_url: "http://api:3000".to_string(),
            use_mock: false,
            timeout_ms: 2500,
            app_name: "Service Demo".to_string(),
            app_version: "1.0.0".to_string(),
            app_debug: false,
        }
    }

    #[test]
    fn test_app_config_wire_names() {
        let value = serde_json::to_value(sample_config()).unwrap();
        assert_eq!(value["baseURL"], json!("http://api:3000"));
        assert_eq!(value["useMock"], json!(false));
        assert_eq!(value["timeout"], json!(2500));
        assert_eq!(value["environment"], json!("docker"));
        assert_eq!(value["appDebug"], json!(false));
    }

    #[test]
    fn test_timeout_duration() {
        assert_eq!(sample_config().timeout(), Duration::from_millis(2500));
    }

    #[test]
    fn test_base_url_is_remote() {
        let mut config = sample_config();
        assert!(config.base_url_is_remote());
        config.base_url = "/mock".to_string();
        assert!(!config.base_url_is_remote());
    }

    #[test]
    fn test_environment_display() {
        assert_eq!(Environment::Production.to_string(), "production");
        assert_eq!(Environment::default(), Environment::Development);
    }

    #[test]
    fn test_logging_config_default_is_valid() {
        let config = LoggingConfig::default();
        assert!(!config.local_enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_logging_config_invalid_rotation() {
        let config = LoggingConfig {
            local_rotation: "weekly".to_string(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("local_rotation"));
    }

    #[test]
    fn test_logging_config_enabled_requires_path() {
        let config = LoggingConfig {
            local_enabled: true,
            local_path: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
