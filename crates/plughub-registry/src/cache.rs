// SPDX-FileCopyrightText: 2026 Plughub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared in-memory plugin metadata cache.
//!
//! The cache is written only by the active rebuild and read by queries.
//! Readers never wait on a rebuild: mid-rebuild they see an empty or
//! partially populated list.

use std::sync::{Arc, RwLock};

use plughub_core::PluginMetadata;

/// Cloneable handle to the plugin metadata cache.
#[derive(Debug, Clone, Default)]
pub struct PluginCache {
    entries: Arc<RwLock<Vec<PluginMetadata>>>,
}

impl PluginCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }

    /// Append an entry and return the new number of entries.
    pub fn push(&self, metadata: PluginMetadata) -> usize {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        entries.push(metadata);
        entries.len()
    }

    /// Copy of the current entries in insertion order.
    pub fn snapshot(&self) -> Vec<PluginMetadata> {
        self.entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    /// Returns true if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(key: &str, plugin_type: &str) -> PluginMetadata {
        PluginMetadata {
            publisher: "pub".into(),
            name: key.into(),
            version: "1.0".into(),
            plugin_type: plugin_type.into(),
            display_name: None,
            title: None,
            description: None,
            icon: None,
            url: format!("http://reg/{key}/meta.yaml"),
            repository: None,
            first_publication_date: None,
            category: None,
            latest_update_date: None,
            key: key.into(),
            built_in: false,
        }
    }

    #[test]
    fn push_returns_running_size() {
        let cache = PluginCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.push(metadata("a", "plugin")), 1);
        assert_eq!(cache.push(metadata("b", "plugin")), 2);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn snapshot_is_detached_from_cache() {
        let cache = PluginCache::new();
        cache.push(metadata("a", "plugin"));
        let snapshot = cache.snapshot();
        cache.clear();
        assert_eq!(snapshot.len(), 1);
        assert!(cache.is_empty());
    }

    #[test]
    fn clones_share_entries() {
        let cache = PluginCache::new();
        let reader = cache.clone();
        cache.push(metadata("a", "plugin"));
        assert_eq!(reader.len(), 1);
    }
}
