//! Domain identifier types
//!
//! Newtype wrapper for user identifiers so that ids can't be confused with
//! other integers (ages, timeouts) flowing through the same code.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User identifier newtype wrapper
///
/// Assigned by the server in live mode, or derived from the wall clock when a
/// user is created in mock mode.
///
/// # Examples
///
/// ```
/// use userflow::domain::ids::UserId;
/// use std::str::FromStr;
///
/// let id = UserId::from_str("42").unwrap();
/// assert_eq!(id.value(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Creates a new UserId
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw integer value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for UserId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|e| format!("Invalid user id '{s}': {e}"))
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}
