//! External integrations
//!
//! Backends the user API client can talk to:
//!
//! - [`http`] - live REST server (reqwest)
//! - [`fixture`] - static JSON fixtures on disk
//! - [`factory`] - picks one from configuration

pub mod factory;
pub mod fixture;
pub mod http;
pub mod traits;

pub use factory::create_transport;
pub use fixture::FixtureTransport;
pub use http::HttpTransport;
pub use traits::{ApiRequest, Method, Transport};
