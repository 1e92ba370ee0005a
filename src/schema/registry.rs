//! Schema registry
//!
//! Declarative JSON Schema documents for every shape Userflow accepts from the
//! outside world: configuration, users, user lists, create/update inputs and the
//! response envelope. Unknown properties are ignored rather than rejected, so
//! servers may add fields without breaking clients.

use super::validate::Schema;
use crate::config::AppConfig;
use crate::domain::{ApiResponse, BaseResponse, CreateUserInput, Result, UpdateUserInput, User};
use serde_json::{json, Value};

/// Local part, `@`, and a domain containing at least one dot
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Largest timeout accepted, in milliseconds (2^31 - 1)
const MAX_TIMEOUT_MS: i64 = 2_147_483_647;

fn user_properties() -> Value {
    json!({
        "id": { "type": "integer", "minimum": i64::MIN, "maximum": i64::MAX },
        "name": { "type": "string", "minLength": 1 },
        "email": { "type": "string", "format": "email", "pattern": EMAIL_PATTERN },
        "age": { "type": "integer", "minimum": 1, "maximum": u32::MAX },
        "isActive": { "type": "boolean", "default": true },
        "createdAt": { "type": "string", "format": "date-time" }
    })
}

/// User properties without the fields assigned at creation
fn input_properties() -> Value {
    let mut properties = user_properties();
    if let Some(map) = properties.as_object_mut() {
        map.remove("id");
        map.remove("createdAt");
    }
    properties
}

fn user_document() -> Value {
    json!({
        "title": "User",
        "type": "object",
        "properties": user_properties(),
        "required": ["id", "name", "email"]
    })
}

/// Configuration schema
pub fn config_schema() -> Result<Schema<AppConfig>> {
    Schema::compile(
        "Config",
        json!({
            "title": "Config",
            "type": "object",
            "properties": {
                "environment": { "enum": ["development", "docker", "production"] },
                "baseURL": { "type": "string", "minLength": 1 },
                "useMock": { "type": "boolean" },
                "timeout": { "type": "integer", "exclusiveMinimum": 0, "maximum": MAX_TIMEOUT_MS },
                "appName": { "type": "string", "minLength": 1 },
                "appVersion": { "type": "string", "minLength": 1 },
                "appDebug": { "type": "boolean" }
            },
            "required": [
                "environment", "baseURL", "useMock", "timeout",
                "appName", "appVersion", "appDebug"
            ]
        }),
    )
}

/// Single user schema
pub fn user_schema() -> Result<Schema<User>> {
    Schema::compile("User", user_document())
}

/// Sequence of users
pub fn user_list_schema() -> Result<Schema<Vec<User>>> {
    Schema::compile(
        "UserList",
        json!({
            "title": "UserList",
            "type": "array",
            "items": user_document()
        }),
    )
}

/// Creation input: User without `id` and `createdAt`
pub fn create_user_schema() -> Result<Schema<CreateUserInput>> {
    Schema::compile(
        "CreateUserInput",
        json!({
            "title": "CreateUserInput",
            "type": "object",
            "properties": input_properties(),
            "required": ["name", "email"]
        }),
    )
}

/// Partial update: every creation field optional, at least one present
pub fn update_user_schema() -> Result<Schema<UpdateUserInput>> {
    Schema::compile(
        "UpdateUserInput",
        json!({
            "title": "UpdateUserInput",
            "type": "object",
            "properties": input_properties(),
            "minProperties": 1
        }),
    )
}

/// Envelope without payload
pub fn base_response_schema() -> Result<Schema<BaseResponse>> {
    Schema::compile("BaseResponse", base_response_document())
}

fn base_response_document() -> Value {
    json!({
        "type": "object",
        "properties": {
            "success": { "type": "boolean" },
            "message": { "type": "string" }
        },
        "required": ["success"]
    })
}

/// Build the envelope schema `{ success, message?, data: T }` around a payload schema
pub fn envelope_schema<T>(payload: &Schema<T>) -> Result<Schema<ApiResponse<T>>> {
    let mut document = base_response_document();
    document["title"] = json!(format!("ApiResponse<{}>", payload.name()));
    document["properties"]["data"] = payload.document().clone();
    document["required"] = json!(["success", "data"]);

    Schema::compile("ApiResponse", document)
}

/// All compiled schemas, built once and shared
#[derive(Debug)]
pub struct SchemaRegistry {
    pub config: Schema<AppConfig>,
    pub user: Schema<User>,
    pub user_list: Schema<Vec<User>>,
    pub create_user: Schema<CreateUserInput>,
    pub update_user: Schema<UpdateUserInput>,
    pub user_response: Schema<ApiResponse<User>>,
    pub user_list_response: Schema<ApiResponse<Vec<User>>>,
    pub base_response: Schema<BaseResponse>,
}

impl SchemaRegistry {
    /// Compile every schema
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::UserflowError::Schema`] if any document fails to compile.
    pub fn new() -> Result<Self> {
        let user = user_schema()?;
        let user_list = user_list_schema()?;
        let user_response = envelope_schema(&user)?;
        let user_list_response = envelope_schema(&user_list)?;

        Ok(Self {
            config: config_schema()?,
            user,
            user_list,
            create_user: create_user_schema()?,
            update_user: update_user_schema()?,
            user_response,
            user_list_response,
            base_response: base_response_schema()?,
        })
    }
}
