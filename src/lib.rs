// Userflow - Validated user management over REST or mock fixtures
// Copyright (c) 2025 Userflow Contributors
// Licensed under the MIT License

//! # Userflow - validated configuration and user data flow
//!
//! Userflow assembles a runtime configuration from environment variables,
//! checks it against a JSON Schema, and drives user CRUD against either a live
//! REST API or local mock fixtures. Every payload that crosses a boundary is
//! validated: inputs before they are sent, responses before they are trusted.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Runtime configuration assembled from the environment
//! - [`schema`] - JSON Schema registry and typed validation
//! - [`adapters`] - Transports (HTTP, fixture files)
//! - [`api`] - The user API client
//! - [`flow`] - Presentation-facing user state
//! - [`domain`] - Core domain types and errors
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use userflow::api::UserApi;
//! use userflow::config::load_config;
//! use userflow::flow::UserFlow;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Arc::new(load_config()?);
//!     let api = Arc::new(UserApi::from_config(config.clone())?);
//!
//!     let mut flow = UserFlow::new(config, api);
//!     flow.activate().await;
//!
//!     println!("Loaded {} users", flow.state().users.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Library operations return [`domain::Result`]. API failures surface as one
//! coarse [`domain::ApiError`] per operation; the underlying cause is logged.
//! Input validation failures carry field-level detail:
//!
//! ```rust,no_run
//! use userflow::api::UserApi;
//! use userflow::domain::{CreateUserInput, UserflowError};
//!
//! # async fn example(api: &UserApi) {
//! match api.create_user(CreateUserInput::new("", "not-an-email")).await {
//!     Err(UserflowError::Validation(e)) => println!("bad fields: {:?}", e.fields()),
//!     Err(e) => println!("request failed: {e}"),
//!     Ok(user) => println!("created {}", user.id),
//! }
//! # }
//! ```

pub mod adapters;
pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod flow;
pub mod logging;
pub mod schema;
