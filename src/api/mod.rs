//! Domain API clients
//!
//! [`UserApi`] performs user CRUD against the configured transport, validating
//! inputs before sending and envelopes after receiving.

pub mod user;

pub use user::{UserApi, MOCK_USERS_FIXTURE, USERS_PATH};
