//! Transport factory
//!
//! Picks the transport implementation from configuration.

use super::fixture::FixtureTransport;
use super::http::HttpTransport;
use super::traits::Transport;
use crate::config::AppConfig;
use crate::domain::Result;
use std::sync::Arc;

/// Create the transport described by `config`
///
/// - mock mode with a local `baseURL`: fixtures are read from that directory
/// - mock mode with an http(s) `baseURL`: fixtures are fetched from that server
/// - live mode: requests go to the API at `baseURL`
///
/// # Errors
///
/// Returns a configuration error if an HTTP transport is needed and `baseURL`
/// is not an absolute http(s) URL.
pub fn create_transport(config: &AppConfig) -> Result<Arc<dyn Transport>> {
    if config.use_mock && !config.base_url_is_remote() {
        tracing::info!(fixture_dir = %config.base_url, "Creating fixture transport");
        return Ok(Arc::new(FixtureTransport::new(&config.base_url)));
    }

    tracing::info!(
        base_url = %config.base_url,
        use_mock = config.use_mock,
        "Creating HTTP transport"
    );
    Ok(Arc::new(HttpTransport::new(config)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;

    fn config(base_url: &str, use_mock: bool) -> AppConfig {
        AppConfig {
            environment: Environment::Development,
            base_url: base_url.to_string(),
            use_mock,
            timeout_ms: 5000,
            app_name: "Service Demo".to_string(),
            app_version: "1.0.0".to_string(),
            app_debug: false,
        }
    }

    #[test]
    fn test_mock_with_local_dir_uses_fixtures() {
        let transport = create_transport(&config("/mock", true)).unwrap();
        assert_eq!(transport.location(), "/mock");
    }

    #[test]
    fn test_mock_with_remote_url_uses_http() {
        let transport = create_transport(&config("http://localhost:3000", true)).unwrap();
        assert_eq!(transport.location(), "http://localhost:3000");
    }

    #[test]
    fn test_live_with_local_dir_fails() {
        assert!(create_transport(&config("/mock", false)).is_err());
    }
}
