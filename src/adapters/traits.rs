//! Transport abstraction
//!
//! The user API client talks to its backend only through [`Transport`], so the
//! same client code runs against a live REST server, a directory of fixtures, or
//! a test double that counts calls.

use crate::domain::TransportError;
use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

/// HTTP-style request method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// A request relative to the transport's base location
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path beginning with `/`, e.g. `/api/users/3`
    pub path: String,
    /// JSON body for POST/PUT
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            body: Some(body),
        }
    }

    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Put,
            path: path.into(),
            body: Some(body),
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            path: path.into(),
            body: None,
        }
    }
}

impl fmt::Display for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// Backend used by the user API client
///
/// Implementations return the decoded JSON body untouched; envelope and schema
/// checks are the caller's job.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one request and return the JSON body
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if the backend is unreachable, answers with a
    /// non-success status, or the body is not JSON.
    async fn send(&self, request: ApiRequest) -> Result<Value, TransportError>;

    /// Where requests go (base URL or fixture directory), for diagnostics
    fn location(&self) -> &str;
}
