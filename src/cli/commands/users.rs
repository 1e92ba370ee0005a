//! User commands
//!
//! `list` and `create` run through [`UserFlow`] so they observe the same state
//! transitions a UI would; the remaining commands call [`crate::api::UserApi`] directly.

use super::{connect, EXIT_FATAL, EXIT_OK};
use crate::domain::{CreateUserInput, UpdateUserInput, User, UserId, UserflowError};
use crate::flow::UserFlow;
use crate::{log_error_with_context, log_operation_start};
use clap::Args;

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print users as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the get command
#[derive(Args, Debug)]
pub struct GetArgs {
    /// User id
    pub id: UserId,
}

/// Arguments for the create command
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Display name
    #[arg(long)]
    pub name: String,

    /// Email address
    #[arg(long)]
    pub email: String,

    /// Age in years
    #[arg(long)]
    pub age: Option<u32>,

    /// Create the user as inactive
    #[arg(long)]
    pub inactive: bool,
}

/// Arguments for the update command
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// User id
    pub id: UserId,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub age: Option<u32>,

    /// Set the active flag (true or false)
    #[arg(long)]
    pub active: Option<bool>,
}

/// Arguments for the delete command
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// User id
    pub id: UserId,
}

impl ListArgs {
    /// Execute the list command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        let (config, api) = match connect() {
            Ok(c) => c,
            Err(code) => return Ok(code),
        };
        log_operation_start!("list_users", config.base_url);

        let mut flow = UserFlow::new(config, api);
        flow.activate().await;

        let state = flow.state();
        if !state.error.is_empty() {
            println!("❌ {}", state.error);
            return Ok(EXIT_FATAL);
        }

        if self.json {
            println!("{}", serde_json::to_string_pretty(&state.users)?);
            return Ok(EXIT_OK);
        }

        if state.users.is_empty() {
            println!("No users found.");
            return Ok(EXIT_OK);
        }

        println!("Found {} user(s):", state.users.len());
        println!();
        print_table(&state.users);
        Ok(EXIT_OK)
    }
}

impl GetArgs {
    /// Execute the get command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        let (config, api) = match connect() {
            Ok(c) => c,
            Err(code) => return Ok(code),
        };
        log_operation_start!("get_user", config.base_url);

        match api.get_user(self.id).await {
            Ok(Some(user)) => {
                println!("{}", serde_json::to_string_pretty(&user)?);
                Ok(EXIT_OK)
            }
            Ok(None) => {
                println!("No user with id {}", self.id);
                Ok(EXIT_OK)
            }
            Err(e) => Ok(report("get_user", &e)),
        }
    }
}

impl CreateArgs {
    fn input(&self) -> CreateUserInput {
        let input = CreateUserInput::new(self.name.clone(), self.email.clone())
            .with_active(!self.inactive);
        match self.age {
            Some(age) => input.with_age(age),
            None => input,
        }
    }

    /// Execute the create command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        let (config, api) = match connect() {
            Ok(c) => c,
            Err(code) => return Ok(code),
        };
        log_operation_start!("create_user", config.base_url);

        let mut flow = UserFlow::new(config, api);
        flow.create_new_user(self.input()).await;

        let state = flow.state();
        match state.users.last() {
            Some(user) if state.error.is_empty() => {
                println!("✅ User created");
                println!("{}", serde_json::to_string_pretty(user)?);
                Ok(EXIT_OK)
            }
            _ => {
                println!("❌ {}", state.error);
                Ok(EXIT_FATAL)
            }
        }
    }
}

impl UpdateArgs {
    fn input(&self) -> UpdateUserInput {
        UpdateUserInput {
            name: self.name.clone(),
            email: self.email.clone(),
            age: self.age,
            is_active: self.active,
        }
    }

    /// Execute the update command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        let input = self.input();
        if input.is_empty() {
            println!("❌ Nothing to update: pass at least one of --name, --email, --age, --active");
            return Ok(EXIT_FATAL);
        }

        let (config, api) = match connect() {
            Ok(c) => c,
            Err(code) => return Ok(code),
        };
        log_operation_start!("update_user", config.base_url);

        match api.update_user(self.id, input).await {
            Ok(user) => {
                println!("✅ User updated");
                println!("{}", serde_json::to_string_pretty(&user)?);
                Ok(EXIT_OK)
            }
            Err(e) => Ok(report("update_user", &e)),
        }
    }
}

impl DeleteArgs {
    /// Execute the delete command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        let (config, api) = match connect() {
            Ok(c) => c,
            Err(code) => return Ok(code),
        };
        log_operation_start!("delete_user", config.base_url);

        match api.delete_user(self.id).await {
            Ok(outcome) => {
                println!("✅ {}", outcome.message);
                Ok(EXIT_OK)
            }
            Err(e) => Ok(report("delete_user", &e)),
        }
    }
}

fn report(operation: &str, error: &UserflowError) -> i32 {
    log_error_with_context!(error, operation);
    println!("❌ {error}");
    EXIT_FATAL
}

fn print_table(users: &[User]) {
    println!(
        "{:<16} {:<24} {:<32} {:<5} {:<8}",
        "ID", "Name", "Email", "Age", "Active"
    );
    println!("{}", "-".repeat(88));
    for user in users {
        let age = user
            .age
            .map(|a| a.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<16} {:<24} {:<32} {:<5} {:<8}",
            user.id,
            user.name,
            user.email,
            age,
            if user.is_active { "yes" } else { "no" }
        );
    }
    println!();
}
