//! User API client
//!
//! All user CRUD goes through [`UserApi`]. Each operation follows the same order:
//! validate input (if any), call the transport, validate the response envelope.
//! Transport and envelope failures are logged with their cause and re-signalled
//! as one coarse [`ApiError`] per operation; input validation failures reach the
//! caller as [`UserflowError::Validation`] with field-level detail.

use crate::adapters::{create_transport, ApiRequest, Transport};
use crate::config::AppConfig;
use crate::domain::{
    ApiError, CreateUserInput, DeleteOutcome, Result, TransportError, UpdateUserInput, User,
    UserId, UserflowError,
};
use crate::schema::{validate, validate_batch, BatchValidation, Schema, SchemaRegistry, ValidationError};
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use thiserror::Error;

/// Live collection endpoint
pub const USERS_PATH: &str = "/api/users";

/// Fixture document served in mock mode
pub const MOCK_USERS_FIXTURE: &str = "/users.json";

fn user_path(id: UserId) -> String {
    format!("{USERS_PATH}/{id}")
}

/// Why an exchange failed; logged, never returned to callers
#[derive(Debug, Error)]
enum Cause {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Envelope(#[from] ValidationError),
}

/// Client for the user resource
///
/// Built once and shared by reference. Mock vs live mode is read from the
/// configuration at the start of every operation.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use userflow::api::UserApi;
/// use userflow::config::load_config;
/// use userflow::domain::CreateUserInput;
///
/// # async fn example() -> userflow::domain::Result<()> {
/// let config = Arc::new(load_config()?);
/// let api = UserApi::from_config(config)?;
///
/// let users = api.list_users().await?;
/// let created = api
///     .create_user(CreateUserInput::new("Ann", "ann@example.com"))
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct UserApi {
    config: Arc<AppConfig>,
    schemas: Arc<SchemaRegistry>,
    transport: Arc<dyn Transport>,
    last_mock_id: AtomicI64,
}

impl UserApi {
    pub fn new(
        config: Arc<AppConfig>,
        schemas: Arc<SchemaRegistry>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            config,
            schemas,
            transport,
            last_mock_id: AtomicI64::new(0),
        }
    }

    /// Build the schema registry and the transport described by `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the schemas fail to compile or the transport cannot
    /// be created from the configured base URL.
    pub fn from_config(config: Arc<AppConfig>) -> Result<Self> {
        let schemas = Arc::new(SchemaRegistry::new()?);
        let transport = create_transport(&config)?;
        Ok(Self::new(config, schemas, transport))
    }

    /// Configuration this client was built with
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Fetch all users
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ListFailed`] on any transport or envelope failure.
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let path = if self.config.use_mock {
            MOCK_USERS_FIXTURE
        } else {
            USERS_PATH
        };

        let response = self
            .exchange(
                ApiRequest::get(path),
                &self.schemas.user_list_response,
                "User list response",
            )
            .await
            .map_err(|cause| self.fail("list_users", cause, ApiError::ListFailed))?;

        tracing::debug!(count = response.data.len(), "Users listed");
        Ok(response.data)
    }

    /// Fetch one user by id
    ///
    /// Returns `Ok(None)` when no such user exists. In mock mode the full list is
    /// scanned; in live mode a 404 from the server means absent, while any other
    /// failure is an error.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::GetFailed`] on transport or envelope failures.
    pub async fn get_user(&self, id: UserId) -> Result<Option<User>> {
        if self.config.use_mock {
            let users = self.list_users().await.map_err(|e| {
                tracing::error!(user_id = %id, error = %e, "Mock lookup could not list users");
                UserflowError::from(ApiError::GetFailed)
            })?;
            return Ok(users.into_iter().find(|u| u.id == id));
        }

        match self
            .exchange(ApiRequest::get(user_path(id)), &self.schemas.user_response, "User response")
            .await
        {
            Ok(response) => Ok(Some(response.data)),
            Err(Cause::Transport(e)) if e.is_not_found() => {
                tracing::debug!(user_id = %id, "User not found");
                Ok(None)
            }
            Err(cause) => Err(self.fail("get_user", cause, ApiError::GetFailed)),
        }
    }

    /// Create a user
    ///
    /// The input is validated before anything is sent. In mock mode the record is
    /// assembled locally with a clock-derived id and creation timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`UserflowError::Validation`] for invalid input (no request is made),
    /// or [`ApiError::CreateFailed`] if the exchange fails.
    pub async fn create_user(&self, input: CreateUserInput) -> Result<User> {
        let body = serde_json::to_value(&input)?;
        let input = validate(&self.schemas.create_user, &body, "User input")?;

        if self.config.use_mock {
            let user = User::from_input(self.next_mock_id(), input, Utc::now());
            let value = serde_json::to_value(&user)?;
            let user = validate(&self.schemas.user, &value, "Created user")
                .map_err(|e| self.fail("create_user", e.into(), ApiError::CreateFailed))?;
            tracing::debug!(user_id = %user.id, "User created in mock mode");
            return Ok(user);
        }

        let response = self
            .exchange(
                ApiRequest::post(USERS_PATH, body),
                &self.schemas.user_response,
                "Create user response",
            )
            .await
            .map_err(|cause| self.fail("create_user", cause, ApiError::CreateFailed))?;

        tracing::debug!(user_id = %response.data.id, "User created");
        Ok(response.data)
    }

    /// Apply a partial update to a user (live mode only)
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MockModeUnsupported`] in mock mode,
    /// [`UserflowError::Validation`] for invalid input, or [`ApiError::UpdateFailed`].
    pub async fn update_user(&self, id: UserId, input: UpdateUserInput) -> Result<User> {
        if self.config.use_mock {
            return Err(ApiError::MockModeUnsupported("update_user").into());
        }

        let body = serde_json::to_value(&input)?;
        validate(&self.schemas.update_user, &body, "User update")?;

        let response = self
            .exchange(
                ApiRequest::put(user_path(id), body),
                &self.schemas.user_response,
                "Update user response",
            )
            .await
            .map_err(|cause| self.fail("update_user", cause, ApiError::UpdateFailed))?;

        Ok(response.data)
    }

    /// Delete a user (live mode only)
    ///
    /// The returned message falls back to
    /// [`DEFAULT_DELETE_MESSAGE`](crate::domain::DEFAULT_DELETE_MESSAGE) when the
    /// server sends none.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MockModeUnsupported`] in mock mode, or
    /// [`ApiError::DeleteFailed`].
    pub async fn delete_user(&self, id: UserId) -> Result<DeleteOutcome> {
        if self.config.use_mock {
            return Err(ApiError::MockModeUnsupported("delete_user").into());
        }

        let response = self
            .exchange(
                ApiRequest::delete(user_path(id)),
                &self.schemas.base_response,
                "Delete user response",
            )
            .await
            .map_err(|cause| self.fail("delete_user", cause, ApiError::DeleteFailed))?;

        Ok(response.into())
    }

    /// Validate an untrusted value as a user
    ///
    /// # Errors
    ///
    /// Returns [`UserflowError::Validation`] listing every violated constraint.
    pub fn validate_user(&self, value: &Value) -> Result<User> {
        Ok(validate(&self.schemas.user, value, "User")?)
    }

    /// Validate many untrusted values as users, one outcome per element
    pub fn validate_users(&self, values: &[Value]) -> BatchValidation<User> {
        validate_batch(&self.schemas.user, values, "Users")
    }

    async fn exchange<T>(
        &self,
        request: ApiRequest,
        schema: &Schema<T>,
        context: &str,
    ) -> std::result::Result<T, Cause>
    where
        T: DeserializeOwned,
    {
        let body = self.transport.send(request).await?;
        Ok(validate(schema, &body, context)?)
    }

    fn fail(&self, operation: &'static str, cause: Cause, error: ApiError) -> UserflowError {
        match cause {
            Cause::Transport(ref e) => tracing::error!(
                operation = operation,
                location = self.transport.location(),
                error = %e,
                "User API request failed"
            ),
            Cause::Envelope(ref e) => tracing::error!(
                operation = operation,
                location = self.transport.location(),
                fields = ?e.fields(),
                error = %e,
                "User API response rejected"
            ),
        }
        error.into()
    }

    /// Wall-clock milliseconds, bumped when needed so ids never repeat
    fn next_mock_id(&self) -> UserId {
        let now = Utc::now().timestamp_millis();
        let previous = self
            .last_mock_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or_else(|last| last);
        UserId::new(now.max(previous + 1))
    }
}
