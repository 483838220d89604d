// SPDX-FileCopyrightText: 2026 Plughub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transport trait for fetching remote registry resources.

use async_trait::async_trait;

use crate::error::PlughubError;

/// Fetches the textual body at a location.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    /// Returns the response body, or [`PlughubError::Transport`] on failure.
    ///
    /// An empty body is a successful, empty response.
    async fn get(&self, uri: &str) -> Result<String, PlughubError>;
}
