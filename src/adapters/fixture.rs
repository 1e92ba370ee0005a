//! Static fixture transport
//!
//! Serves `GET` requests from JSON files under a directory, mirroring how a
//! front end would fetch `/users.json` from its static assets in mock mode.

use super::traits::{ApiRequest, Method, Transport};
use crate::domain::TransportError;
use async_trait::async_trait;
use serde_json::Value;
use std::path::{Component, Path, PathBuf};

/// Transport reading JSON documents from a fixture directory
#[derive(Debug, Clone)]
pub struct FixtureTransport {
    root: PathBuf,
    location: String,
}

impl FixtureTransport {
    /// Serve fixtures from `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let location = root.display().to_string();
        Self { root, location }
    }

    /// Resolve a request path inside the fixture root, refusing to escape it
    fn resolve(&self, path: &str) -> Result<PathBuf, TransportError> {
        let relative = Path::new(path.trim_start_matches('/'));
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
        {
            return Err(TransportError::Unsupported(format!(
                "fixture path '{path}' must stay inside the fixture directory"
            )));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl Transport for FixtureTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, TransportError> {
        if request.method != Method::Get {
            return Err(TransportError::Unsupported(format!(
                "{request}: fixtures are read-only"
            )));
        }

        let file = self.resolve(&request.path)?;
        tracing::debug!(file = %file.display(), "Reading fixture");

        let contents = tokio::fs::read_to_string(&file).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TransportError::NotFound(request.path.clone())
            } else {
                TransportError::Fixture(format!("{}: {e}", file.display()))
            }
        })?;

        serde_json::from_str(&contents)
            .map_err(|e| TransportError::InvalidResponse(format!("{}: {e}", file.display())))
    }

    fn location(&self) -> &str {
        &self.location
    }
}
