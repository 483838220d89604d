// SPDX-FileCopyrightText: 2026 Plughub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Channel-backed cache observer.
//!
//! Forwards rebuild notifications as [`CacheEvent`] values over an unbounded
//! channel, for callers that prefer consuming progress as a stream.

use plughub_core::{CacheObserver, PluginRegistry};
use tokio::sync::mpsc;

/// A cache rebuild notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheEvent {
    SizeChanged(usize),
    PluginCached(usize),
    InvalidRegistry(PluginRegistry),
    InvalidPlugin(String),
    Complete,
}

impl CacheEvent {
    /// Returns true for the terminal event of a rebuild.
    pub fn is_terminal(&self) -> bool {
        matches!(self, CacheEvent::Complete)
    }
}

/// Observer that sends every notification into a channel.
///
/// Events sent after the receiver is dropped are discarded.
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    tx: mpsc::UnboundedSender<CacheEvent>,
}

impl ChannelObserver {
    /// Create an observer and the receiving end of its channel.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<CacheEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    fn send(&self, event: CacheEvent) {
        if self.tx.send(event).is_err() {
            tracing::trace!("cache event receiver dropped");
        }
    }
}

impl CacheObserver for ChannelObserver {
    fn on_cache_size_changed(&self, size: usize) {
        self.send(CacheEvent::SizeChanged(size));
    }

    fn on_plugin_cached(&self, cached: usize) {
        self.send(CacheEvent::PluginCached(cached));
    }

    fn on_invalid_registry(&self, registry: &PluginRegistry) {
        self.send(CacheEvent::InvalidRegistry(registry.clone()));
    }

    fn on_invalid_plugin(&self, uri: &str) {
        self.send(CacheEvent::InvalidPlugin(uri.to_string()));
    }

    fn on_caching_complete(&self) {
        self.send(CacheEvent::Complete);
    }
}
