//! User data flow
//!
//! Presentation-facing state for the user list. [`UserFlow`] owns the in-memory
//! list and the busy/error indicators, and drives [`UserApi`] operations that
//! update them. Methods take `&mut self`, so one operation finishes before the
//! next can start and the list needs no locking.

use crate::api::UserApi;
use crate::config::AppConfig;
use crate::domain::{CreateUserInput, User, UserId};
use std::sync::Arc;

/// Observable state of the user list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserState {
    pub users: Vec<User>,
    pub loading: bool,
    pub creating: bool,
    /// Last error as display text; empty when the last operation succeeded
    pub error: String,
}

/// Sets a flag for as long as it lives, clears it on drop
struct BusyFlag<'a>(&'a mut bool);

impl<'a> BusyFlag<'a> {
    fn raise(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for BusyFlag<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

/// View model binding [`UserState`] to the user API
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use userflow::api::UserApi;
/// use userflow::config::load_config;
/// use userflow::flow::UserFlow;
///
/// # async fn example() -> userflow::domain::Result<()> {
/// let config = Arc::new(load_config()?);
/// let api = Arc::new(UserApi::from_config(config.clone())?);
/// let mut flow = UserFlow::new(config, api);
///
/// flow.activate().await;
/// for user in &flow.state().users {
///     println!("{} <{}>", user.name, user.email);
/// }
/// # Ok(())
/// # }
/// ```
pub struct UserFlow {
    config: Arc<AppConfig>,
    api: Arc<UserApi>,
    state: UserState,
    activated: bool,
}

impl UserFlow {
    pub fn new(config: Arc<AppConfig>, api: Arc<UserApi>) -> Self {
        Self {
            config,
            api,
            state: UserState::default(),
            activated: false,
        }
    }

    pub fn state(&self) -> &UserState {
        &self.state
    }

    /// Configuration the flow was built with
    pub fn project_config(&self) -> &AppConfig {
        &self.config
    }

    /// Load the list the first time the flow becomes active; later calls do nothing
    pub async fn activate(&mut self) {
        if self.activated {
            return;
        }
        self.activated = true;
        self.load_users().await;
    }

    /// Empty the in-memory list without contacting the server
    pub fn clear_users(&mut self) {
        self.state.users.clear();
    }

    /// Replace the list with a fresh copy from the API
    ///
    /// On failure the list is left untouched and `error` is set.
    pub async fn load_users(&mut self) {
        self.state.error.clear();

        let result = {
            let _loading = BusyFlag::raise(&mut self.state.loading);
            self.api.list_users().await
        };

        match result {
            Ok(users) => {
                if self.verbose() {
                    tracing::debug!(users = ?users, config = ?self.config, "Loaded users");
                }
                self.state.users = users;
            }
            Err(e) => {
                if self.verbose() {
                    tracing::debug!(error = %e, "Loading users failed");
                }
                self.state.error = e.to_string();
            }
        }
    }

    /// Refresh one user in place if it is already in the list
    pub async fn load_single_user(&mut self, id: UserId) {
        match self.api.get_user(id).await {
            Ok(Some(user)) => {
                if self.verbose() {
                    tracing::debug!(user = ?user, "Loaded single user");
                }
                if let Some(slot) = self.state.users.iter_mut().find(|u| u.id == id) {
                    *slot = user;
                }
            }
            Ok(None) => {
                tracing::debug!(user_id = %id, "No matching user");
            }
            Err(e) => {
                self.state.error = e.to_string();
            }
        }
    }

    /// Create a user and append it to the list
    ///
    /// On failure the list is left untouched and `error` is set.
    pub async fn create_new_user(&mut self, input: CreateUserInput) {
        self.state.error.clear();

        let result = {
            let _creating = BusyFlag::raise(&mut self.state.creating);
            self.api.create_user(input).await
        };

        match result {
            Ok(user) => {
                if self.verbose() {
                    tracing::debug!(user = ?user, "Created user");
                }
                self.state.users.push(user);
            }
            Err(e) => {
                if self.verbose() {
                    tracing::debug!(error = %e, "Creating user failed");
                }
                self.state.error = e.to_string();
            }
        }
    }

    fn verbose(&self) -> bool {
        self.config.app_debug
    }
}
