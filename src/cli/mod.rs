//! CLI interface and argument parsing
//!
//! The `userflow` binary is a thin presentation host over [`crate::flow`] and
//! [`crate::api`]. Runtime settings come from the environment (see [`crate::config`]).

pub mod commands;

use clap::{Parser, Subcommand};

/// Userflow - validated user management over a REST API or mock fixtures
#[derive(Parser, Debug)]
#[command(name = "userflow")]
#[command(version, about, long_about = None)]
#[command(author = "Userflow Contributors")]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assemble and validate the runtime configuration
    ValidateConfig(commands::validate::ValidateArgs),

    /// List all users
    List(commands::users::ListArgs),

    /// Show one user
    Get(commands::users::GetArgs),

    /// Create a user
    Create(commands::users::CreateArgs),

    /// Update fields of an existing user
    Update(commands::users::UpdateArgs),

    /// Delete a user
    Delete(commands::users::DeleteArgs),
}
