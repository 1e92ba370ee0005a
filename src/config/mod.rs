//! Configuration management for Userflow.
//!
//! Runtime settings come from environment variables (a `.env` file is loaded by
//! the binary through `dotenvy`), are coerced into a raw JSON object, and are then
//! validated against the config schema. Either every field is valid or loading
//! fails; there is no partial configuration.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use userflow::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config()?;
//! println!("Environment: {}", config.environment);
//! println!("Mock mode: {}", config.use_mock);
//! # Ok(())
//! # }
//! ```
//!
//! # Environment Variables
//!
//! | Variable       | Field        | Default        |
//! |----------------|--------------|----------------|
//! | `API_ENV`      | environment  | `development`  |
//! | `API_BASE_URL` | baseURL      | `/mock`        |
//! | `API_USE_MOCK` | useMock      | `false`        |
//! | `API_TIMEOUT`  | timeout (ms) | `5000`         |
//! | `APP_NAME`     | appName      | `Service Demo` |
//! | `APP_VERSION`  | appVersion   | `1.0.0`        |
//! | `APP_DEBUG`    | appDebug     | `true` in development, else `false` |

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_from, load_logging_config, load_logging_config_from};
pub use schema::{AppConfig, Environment, LoggingConfig};
