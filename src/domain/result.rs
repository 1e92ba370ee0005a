//! Result type alias for Userflow
//!
//! Convenience alias that uses [`UserflowError`] as the error type.

use super::errors::UserflowError;

/// Result type alias for Userflow operations
///
/// # Examples
///
/// ```
/// use userflow::domain::result::Result;
/// use userflow::domain::errors::UserflowError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(UserflowError::Configuration("baseURL is empty".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, UserflowError>;
