// SPDX-FileCopyrightText: 2026 Plughub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP transport for registry resources.

use std::time::Duration;

use async_trait::async_trait;
use plughub_core::{PlughubError, Transport};
use tracing::debug;

/// Transport backed by a pooled `reqwest` client.
///
/// Any non-2xx status is a transport failure naming the status.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport with the given per-request timeout and user agent.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, PlughubError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent.to_string())
            .build()
            .map_err(|e| PlughubError::Configuration(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, uri: &str) -> Result<String, PlughubError> {
        let response = self
            .client
            .get(uri)
            .send()
            .await
            .map_err(|e| PlughubError::Transport {
                uri: uri.to_string(),
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(uri = %uri, status = %status, "registry response received");
        if !status.is_success() {
            return Err(PlughubError::Transport {
                uri: uri.to_string(),
                message: format!("server returned {status}"),
                source: None,
            });
        }

        response.text().await.map_err(|e| PlughubError::Transport {
            uri: uri.to_string(),
            message: format!("failed to read response body: {e}"),
            source: Some(Box::new(e)),
        })
    }
}
