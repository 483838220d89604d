// SPDX-FileCopyrightText: 2026 Plughub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for plughub.

use thiserror::Error;

/// The primary error type shared by every plughub crate.
///
/// Per-item failures during a cache rebuild (`RegistryUnreachable`,
/// `InvalidIndex`, `PluginDocument`) are converted to observer notifications
/// and never reach the rebuild caller. `Configuration` aborts a rebuild.
/// `DevfileUpdate` is surfaced to the caller of a reconciliation operation.
#[derive(Debug, Error)]
pub enum PlughubError {
    /// Missing or invalid registry settings.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A raw transport failure (connection refused, non-2xx status, timeout).
    #[error("request to {uri} failed: {message}")]
    Transport {
        uri: String,
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A registry index could not be fetched.
    #[error("registry unreachable at {uri}: {message}")]
    RegistryUnreachable {
        uri: String,
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A registry index was fetched but is not a JSON array of plugin summaries.
    #[error("invalid registry index at {uri}: {message}")]
    InvalidIndex { uri: String, message: String },

    /// A plugin metadata document could not be fetched or parsed.
    #[error("failed to load plugin document {uri}: {message}")]
    PluginDocument { uri: String, message: String },

    /// A configuration document is structurally unusable.
    #[error("malformed devfile: {0}")]
    MalformedDocument(String),

    /// The external document store failed to read or write.
    #[error("document store error: {message}")]
    Store {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A reconciliation operation failed; names the keys it was applying.
    #[error("failed to update devfile plugins [{}]: {message}", .keys.join(", "))]
    DevfileUpdate {
        keys: Vec<String>,
        message: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl PlughubError {
    /// Wrap a failure from a devfile read-modify-write cycle, keeping the
    /// underlying message in the rendered error.
    pub fn devfile_update(keys: &[&str], cause: PlughubError) -> Self {
        PlughubError::DevfileUpdate {
            keys: keys.iter().map(|k| (*k).to_string()).collect(),
            message: cause.to_string(),
            source: Box::new(cause),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn devfile_update_names_keys_and_cause() {
        let cause = PlughubError::Store {
            message: "disk full".into(),
            source: None,
        };
        let err = PlughubError::devfile_update(&["pub/a/1.0", "pub/b/2.0"], cause);
        let rendered = err.to_string();
        assert!(rendered.contains("pub/a/1.0, pub/b/2.0"), "got: {rendered}");
        assert!(rendered.contains("disk full"), "got: {rendered}");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn transport_error_keeps_source() {
        let err = PlughubError::Transport {
            uri: "http://reg/plugins/".into(),
            message: "connection refused".into(),
            source: Some(Box::new(std::io::Error::other("refused"))),
        };
        assert!(err.to_string().contains("http://reg/plugins/"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
