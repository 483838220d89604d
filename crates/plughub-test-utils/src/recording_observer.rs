// SPDX-FileCopyrightText: 2026 Plughub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Observer that records every notification in order.

use std::sync::Mutex;

use plughub_core::{CacheObserver, PluginRegistry};

/// One recorded observer notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObservedEvent {
    SizeChanged(usize),
    PluginCached(usize),
    InvalidRegistry(String),
    InvalidPlugin(String),
    Complete,
}

/// Records the notification sequence of cache rebuilds.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<ObservedEvent>>,
}

impl RecordingObserver {
    /// Create an observer with an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications received so far.
    pub fn events(&self) -> Vec<ObservedEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Names of registries reported invalid.
    pub fn invalid_registries(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ObservedEvent::InvalidRegistry(name) => Some(name),
                _ => None,
            })
            .collect()
    }

    /// Locations of plugins reported invalid.
    pub fn invalid_plugins(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ObservedEvent::InvalidPlugin(uri) => Some(uri),
                _ => None,
            })
            .collect()
    }

    /// Number of terminal notifications received.
    pub fn completions(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| **e == ObservedEvent::Complete)
            .count()
    }

    fn record(&self, event: ObservedEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl CacheObserver for RecordingObserver {
    fn on_cache_size_changed(&self, size: usize) {
        self.record(ObservedEvent::SizeChanged(size));
    }

    fn on_plugin_cached(&self, cached: usize) {
        self.record(ObservedEvent::PluginCached(cached));
    }

    fn on_invalid_registry(&self, registry: &PluginRegistry) {
        self.record(ObservedEvent::InvalidRegistry(registry.name.clone()));
    }

    fn on_invalid_plugin(&self, uri: &str) {
        self.record(ObservedEvent::InvalidPlugin(uri.to_string()));
    }

    fn on_caching_complete(&self) {
        self.record(ObservedEvent::Complete);
    }
}
