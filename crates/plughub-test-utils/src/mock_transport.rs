// SPDX-FileCopyrightText: 2026 Plughub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock transport serving canned bodies by exact location.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use plughub_core::{PlughubError, Transport};

#[derive(Debug, Clone)]
enum Response {
    Body(String),
    Failure(String),
}

/// A transport that answers from a location-to-body table.
///
/// Locations without an entry fail with a "404 Not Found" transport error.
/// Every requested location is logged in order.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: HashMap<String, Response>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockTransport {
    /// Create a transport with no canned responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` at `uri`.
    pub fn with_body(mut self, uri: &str, body: impl Into<String>) -> Self {
        self.responses
            .insert(uri.to_string(), Response::Body(body.into()));
        self
    }

    /// Serve `value` serialized as JSON at `uri`.
    pub fn with_json(self, uri: &str, value: &serde_json::Value) -> Self {
        self.with_body(uri, value.to_string())
    }

    /// Fail requests to `uri` with a transport error carrying `message`.
    pub fn with_failure(mut self, uri: &str, message: &str) -> Self {
        self.responses
            .insert(uri.to_string(), Response::Failure(message.to_string()));
        self
    }

    /// All requested locations, in request order.
    pub async fn requests(&self) -> Vec<String> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, uri: &str) -> Result<String, PlughubError> {
        self.requests.lock().await.push(uri.to_string());
        match self.responses.get(uri) {
            Some(Response::Body(body)) => Ok(body.clone()),
            Some(Response::Failure(message)) => Err(PlughubError::Transport {
                uri: uri.to_string(),
                message: message.clone(),
                source: None,
            }),
            None => Err(PlughubError::Transport {
                uri: uri.to_string(),
                message: "404 Not Found".to_string(),
                source: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_bodies_and_logs_requests() {
        let transport = MockTransport::new()
            .with_body("http://reg/a", "hello")
            .with_failure("http://reg/b", "connection refused");

        assert_eq!(transport.get("http://reg/a").await.unwrap(), "hello");
        let err = transport.get("http://reg/b").await.unwrap_err();
        assert!(err.to_string().contains("connection refused"));
        let err = transport.get("http://reg/c").await.unwrap_err();
        assert!(err.to_string().contains("404"));

        assert_eq!(
            transport.requests().await,
            vec!["http://reg/a", "http://reg/b", "http://reg/c"]
        );
    }
}
