//! Domain models and types for Userflow.
//!
//! The domain layer provides:
//! - **Identifiers** ([`UserId`])
//! - **Models** ([`User`], [`CreateUserInput`], [`UpdateUserInput`], [`ApiResponse`])
//! - **Error types** ([`UserflowError`], [`ApiError`], [`TransportError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, UserflowError>`]. Input validation
//! failures and API failures are separate variants:
//!
//! ```rust
//! use userflow::domain::{ApiError, UserflowError};
//!
//! fn describe(err: &UserflowError) -> &'static str {
//!     match err {
//!         UserflowError::Validation(_) => "fix the form",
//!         UserflowError::Api(ApiError::ListFailed) => "try again later",
//!         _ => "unexpected",
//!     }
//! }
//! ```

pub mod errors;
pub mod ids;
pub mod result;
pub mod user;

pub use errors::{ApiError, TransportError, UserflowError};
pub use ids::UserId;
pub use result::Result;
pub use user::{
    ApiResponse, BaseResponse, CreateUserInput, DeleteOutcome, UpdateUserInput, User,
    DEFAULT_DELETE_MESSAGE,
};
