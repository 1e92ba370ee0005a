//! Validate config command implementation

use super::{EXIT_CONFIG, EXIT_OK};
use crate::config::{load_config, load_logging_config};
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!("Validating configuration");

        println!("🔍 Validating configuration from environment");
        println!();

        let config = match load_config() {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                return Ok(EXIT_CONFIG);
            }
        };

        let logging = match load_logging_config() {
            Ok(l) => l,
            Err(e) => {
                println!("❌ Logging configuration is invalid");
                println!("   Error: {e}");
                println!();
                return Ok(EXIT_CONFIG);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Application: {}", config.app_name);
        println!("  Version: {}", config.app_version);
        println!("  Environment: {}", config.environment);
        println!("  Base URL: {}", config.base_url);
        println!("  Mock Mode: {}", config.use_mock);
        println!("  Timeout: {} ms", config.timeout_ms);
        println!("  Debug: {}", config.app_debug);
        if logging.local_enabled {
            println!(
                "  File Logging: {} ({})",
                logging.local_path, logging.local_rotation
            );
        } else {
            println!("  File Logging: disabled");
        }
        println!();

        Ok(EXIT_OK)
    }
}
