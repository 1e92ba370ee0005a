//! Logging and observability
//!
//! Everything logs through `tracing`; [`init_logging`] installs the subscriber
//! once at startup. Config assembly, transports and the API client log
//! structured fields rather than formatted strings.
//!
//! # Example
//!
//! ```no_run
//! use userflow::logging::init_logging;
//! use userflow::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the start of a user operation and where it is sent
///
/// # Example
///
/// ```no_run
/// use userflow::log_operation_start;
///
/// log_operation_start!("list_users", "http://localhost:3000");
/// ```
#[macro_export]
macro_rules! log_operation_start {
    ($operation:expr, $location:expr) => {
        tracing::info!(
            operation = $operation,
            location = %$location,
            "Starting operation"
        );
    };
}

/// Log a failed operation together with the error it produced
///
/// # Example
///
/// ```no_run
/// use userflow::log_error_with_context;
/// use userflow::domain::ApiError;
///
/// let error = ApiError::ListFailed;
/// log_error_with_context!(&error, "Failed to refresh user list");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            operation = $context,
            "Operation failed"
        );
    };
}
