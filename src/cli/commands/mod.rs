//! CLI command implementations
//!
//! Commands return a process exit code: 0 on success, 2 for configuration
//! errors, 5 for any other failure.

pub mod users;
pub mod validate;

use crate::api::UserApi;
use crate::config::{load_config, AppConfig};
use std::sync::Arc;

/// Exit code for a successful command
pub const EXIT_OK: i32 = 0;

/// Exit code when the configuration cannot be loaded
pub const EXIT_CONFIG: i32 = 2;

/// Exit code for request, validation and other runtime failures
pub const EXIT_FATAL: i32 = 5;

/// Load the configuration and build a client, printing the reason on failure
pub(crate) fn connect() -> Result<(Arc<AppConfig>, Arc<UserApi>), i32> {
    let config = match load_config() {
        Ok(c) => Arc::new(c),
        Err(e) => {
            println!("❌ Failed to load configuration");
            println!("   Error: {e}");
            return Err(EXIT_CONFIG);
        }
    };

    match UserApi::from_config(config.clone()) {
        Ok(api) => Ok((config, Arc::new(api))),
        Err(e) => {
            println!("❌ Failed to create API client");
            println!("   Error: {e}");
            Err(EXIT_CONFIG)
        }
    }
}
