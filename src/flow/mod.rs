//! View-model layer
//!
//! Observable state for presentation code, driven by the API clients.

pub mod user_flow;

pub use user_flow::{UserFlow, UserState};
