//! User domain models
//!
//! Typed counterparts of the shapes declared in [`crate::schema::registry`].
//! Values of these types are only ever produced by validation, so holding a
//! `User` means the record satisfied the User schema at the boundary it crossed.

use super::ids::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// A user record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server- or client-assigned identifier
    pub id: UserId,

    /// Display name, never empty
    pub name: String,

    /// Email address
    pub email: String,

    /// Age in years (optional, positive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,

    /// Whether the account is active (defaults to true)
    #[serde(default = "default_true")]
    pub is_active: bool,

    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    /// Assemble a user from a creation input plus the fields assigned at creation
    pub fn from_input(id: UserId, input: CreateUserInput, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
            age: input.age,
            is_active: input.is_active,
            created_at: Some(created_at),
        }
    }
}

/// Input for creating a user: the User shape without `id` and `createdAt`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserInput {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl CreateUserInput {
    /// Creates an input with the required fields; `is_active` defaults to true
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age: None,
            is_active: true,
        }
    }

    /// Sets the age
    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    /// Sets the active flag
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}

/// Partial update for an existing user; absent fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl UpdateUserInput {
    /// True when no field would be changed
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.age.is_none() && self.is_active.is_none()
    }
}

/// Response envelope wrapping every API payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

/// Envelope without a payload, as returned by delete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Message reported when the server acknowledges a delete without one
pub const DEFAULT_DELETE_MESSAGE: &str = "User deleted successfully";

/// Result of deleting a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub success: bool,
    pub message: String,
}

impl From<BaseResponse> for DeleteOutcome {
    fn from(response: BaseResponse) -> Self {
        Self {
            success: response.success,
            message: response
                .message
                .unwrap_or_else(|| DEFAULT_DELETE_MESSAGE.to_string()),
        }
    }
}
