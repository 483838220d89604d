// SPDX-FileCopyrightText: 2026 Plughub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Observer trait for cache rebuild progress.

use crate::types::PluginRegistry;

/// Receives progress notifications from a cache rebuild.
///
/// For one rebuild the sequence is `on_cache_size_changed(0)`, then any
/// interleaving of the other callbacks in processing order, then exactly one
/// `on_caching_complete()`.
pub trait CacheObserver: Send + Sync + 'static {
    /// Running total of plugin summaries discovered across the registries
    /// processed so far. Never decreases within a rebuild.
    fn on_cache_size_changed(&self, size: usize);

    /// Number of plugins cached so far.
    fn on_plugin_cached(&self, cached: usize);

    /// A registry's index could not be fetched or was not a plugin list.
    fn on_invalid_registry(&self, registry: &PluginRegistry);

    /// A plugin's metadata document could not be loaded.
    fn on_invalid_plugin(&self, uri: &str);

    /// The rebuild has finished.
    fn on_caching_complete(&self);
}
