//! Domain error types
//!
//! This module defines the error hierarchy for Userflow. Errors are domain-specific
//! and don't expose third-party types (reqwest, jsonschema) to callers.

use crate::schema::ValidationError;
use thiserror::Error;

/// Main Userflow error type
///
/// Input validation failures are surfaced distinctly from the coarse,
/// operation-named API failures so callers can branch without string matching.
#[derive(Debug, Error)]
pub enum UserflowError {
    /// Configuration failed validation; fatal, there is no degraded mode
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Caller-supplied data was rejected before any transport call
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A user API operation failed (transport or envelope problem)
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Schema registry could not be compiled
    #[error("Schema error: {0}")]
    Schema(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Coarse, operation-named API failures
///
/// The underlying cause (network unreachable, malformed envelope, schema
/// rejection) is logged at the client boundary and intentionally not carried here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Failed to retrieve user list")]
    ListFailed,

    #[error("Failed to retrieve user")]
    GetFailed,

    #[error("Failed to create user")]
    CreateFailed,

    #[error("Failed to update user")]
    UpdateFailed,

    #[error("Failed to delete user")]
    DeleteFailed,

    /// Operation only exists against a live API
    #[error("Operation '{0}' is not available in mock mode")]
    MockModeUnsupported(&'static str),
}

/// Transport-level failures
///
/// Produced by [`crate::adapters::Transport`] implementations and consumed by the
/// API client, which logs them and re-signals an [`ApiError`].
#[derive(Debug, Error)]
pub enum TransportError {
    /// Failed to reach the remote service
    #[error("Failed to connect to API server: {0}")]
    ConnectionFailed(String),

    /// Resource does not exist (HTTP 404 or missing fixture)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Client error (4xx other than 404)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Request timeout
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Body was not JSON
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),

    /// The transport cannot serve this request (e.g. writes against fixtures)
    #[error("Unsupported request: {0}")]
    Unsupported(String),

    /// Fixture file could not be read
    #[error("Fixture error: {0}")]
    Fixture(String),
}

impl TransportError {
    /// Whether this failure means the resource is absent rather than unreachable
    pub fn is_not_found(&self) -> bool {
        matches!(self, TransportError::NotFound(_))
    }
}

impl From<serde_json::Error> for UserflowError {
    fn from(err: serde_json::Error) -> Self {
        UserflowError::Serialization(err.to_string())
    }
}
