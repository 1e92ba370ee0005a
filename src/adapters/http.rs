//! Live REST transport
//!
//! Sends requests to the configured API server with reqwest and maps HTTP
//! failures onto [`TransportError`] so no reqwest types leak out.

use super::traits::{ApiRequest, Method, Transport};
use crate::config::AppConfig;
use crate::domain::{Result, TransportError, UserflowError};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, StatusCode};
use serde_json::Value;
use url::Url;

/// Transport backed by a reqwest [`Client`]
pub struct HttpTransport {
    /// Base URL without trailing slash
    base_url: String,

    client: Client,
}

impl HttpTransport {
    /// Create a transport for `config.base_url` with `config.timeout` applied per request
    ///
    /// # Errors
    ///
    /// Returns [`UserflowError::Configuration`] if the base URL is not an absolute
    /// http(s) URL, or if the HTTP client cannot be built.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use userflow::adapters::HttpTransport;
    /// use userflow::config::load_config;
    ///
    /// # fn example() -> userflow::domain::Result<()> {
    /// let config = load_config()?;
    /// let transport = HttpTransport::new(&config)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(config: &AppConfig) -> Result<Self> {
        let parsed = Url::parse(&config.base_url).map_err(|e| {
            UserflowError::Configuration(format!(
                "API base URL '{}' is not a valid URL: {e}",
                config.base_url
            ))
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(UserflowError::Configuration(format!(
                "API base URL must start with http:// or https://, got '{}'",
                config.base_url
            )));
        }

        let client = ClientBuilder::new()
            .timeout(config.timeout())
            .build()
            .map_err(|e| {
                UserflowError::Configuration(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> std::result::Result<Value, TransportError> {
        let url = self.url_for(&request.path);
        tracing::debug!(method = %request.method, url = %url, "Sending API request");

        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Delete => self.client.delete(&url),
        };
        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }

        let resp = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout(format!("{request}: {e}"))
            } else {
                TransportError::ConnectionFailed(format!("{request}: {e}"))
            }
        })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(match status {
                StatusCode::NOT_FOUND => TransportError::NotFound(request.path),
                s if s.is_server_error() => TransportError::ServerError {
                    status: s.as_u16(),
                    message: body,
                },
                s => TransportError::ClientError {
                    status: s.as_u16(),
                    message: body,
                },
            });
        }

        resp.json::<Value>()
            .await
            .map_err(|e| TransportError::InvalidResponse(format!("{request}: {e}")))
    }

    fn location(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;
    use serde_json::json;

    fn config_for(base_url: &str) -> AppConfig {
        AppConfig {
            environment: Environment::Development,
            base_url: base_url.to_string(),
            use_mock: false,
            timeout_ms: 1000,
            app_name: "Service Demo".to_string(),
            app_version: "1.0.0".to_string(),
            app_debug: false,
        }
    }

    #[test]
    fn test_relative_base_url_rejected() {
        let result = HttpTransport::new(&config_for("/mock"));
        assert!(matches!(result, Err(UserflowError::Configuration(_))));
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let result = HttpTransport::new(&config_for("ftp://example.com"));
        assert!(matches!(result, Err(UserflowError::Configuration(_))));
    }

    #[test]
    fn test_url_join() {
        let transport = HttpTransport::new(&config_for("http://localhost:3000/")).unwrap();
        assert_eq!(transport.location(), "http://localhost:3000");
        assert_eq!(
            transport.url_for("/api/users"),
            "http://localhost:3000/api/users"
        );
    }

    #[tokio::test]
    async fn test_send_returns_json_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/users")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success": true, "data": []}"#)
            .expect(1)
            .create_async()
            .await;

        let transport = HttpTransport::new(&config_for(&server.url())).unwrap();
        let body = transport.send(ApiRequest::get("/api/users")).await.unwrap();

        assert_eq!(body, json!({"success": true, "data": []}));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_send_maps_status_codes() {
        let mut server = mockito::Server::new_async().await;
        let _missing = server
            .mock("GET", "/api/users/9")
            .with_status(404)
            .create_async()
            .await;
        let _broken = server
            .mock("GET", "/api/users/10")
            .with_status(503)
            .with_body("unavailable")
            .create_async()
            .await;
        let _bad = server
            .mock("POST", "/api/users")
            .with_status(422)
            .create_async()
            .await;

        let transport = HttpTransport::new(&config_for(&server.url())).unwrap();

        let err = transport.send(ApiRequest::get("/api/users/9")).await.unwrap_err();
        assert!(err.is_not_found());

        let err = transport.send(ApiRequest::get("/api/users/10")).await.unwrap_err();
        assert!(matches!(
            err,
            TransportError::ServerError { status: 503, ref message } if message == "unavailable"
        ));

        let err = transport
            .send(ApiRequest::post("/api/users", json!({})))
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::ClientError { status: 422, .. }));
    }

    #[tokio::test]
    async fn test_send_rejects_non_json_body() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/api/users")
            .with_status(200)
            .with_body("<html>oops</html>")
            .create_async()
            .await;

        let transport = HttpTransport::new(&config_for(&server.url())).unwrap();
        let err = transport.send(ApiRequest::get("/api/users")).await.unwrap_err();
        assert!(matches!(err, TransportError::InvalidResponse(_)));
    }
}
