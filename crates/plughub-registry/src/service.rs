// SPDX-FileCopyrightText: 2026 Plughub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin service: cache rebuilds and queries behind one handle.

use std::sync::Arc;

use plughub_core::{
    CacheObserver, PluginFilter, PluginMetadata, PluginRegistry, PlughubError, SettingsProvider,
    Transport,
};

use crate::builder::CacheBuilder;
use crate::cache::PluginCache;
use crate::client::RegistryClient;
use crate::filter::KeywordFilter;
use crate::query::PluginQuery;

/// Rebuilds and serves the plugin metadata cache.
#[derive(Debug)]
pub struct PluginService {
    builder: CacheBuilder,
    query: PluginQuery,
}

impl PluginService {
    /// Create a service using the default [`KeywordFilter`] for queries.
    pub fn new(transport: Arc<dyn Transport>, settings: Arc<dyn SettingsProvider>) -> Self {
        Self::with_filter(transport, settings, Arc::new(KeywordFilter))
    }

    /// Create a service with a custom plugin filter.
    pub fn with_filter(
        transport: Arc<dyn Transport>,
        settings: Arc<dyn SettingsProvider>,
        filter: Arc<dyn PluginFilter>,
    ) -> Self {
        let cache = PluginCache::new();
        let client = RegistryClient::new(transport, settings);
        Self {
            builder: CacheBuilder::new(client, cache.clone()),
            query: PluginQuery::new(cache, filter),
        }
    }

    /// Attach the observer that receives rebuild notifications.
    pub fn set_observer(&self, observer: Arc<dyn CacheObserver>) {
        self.builder.set_observer(observer);
    }

    /// Detach the current observer. Rebuilds become no-ops until another is set.
    pub fn clear_observer(&self) {
        self.builder.clear_observer();
    }

    /// The registry resolved from workspace settings.
    pub async fn default_registry(&self) -> Result<PluginRegistry, PlughubError> {
        self.builder
            .client()
            .resolve_default_registry()
            .await
            .cloned()
    }

    /// Rebuild the cache from `registries`. See [`CacheBuilder::rebuild_cache`].
    pub async fn rebuild_cache(&self, registries: &[PluginRegistry]) -> Result<(), PlughubError> {
        self.builder.rebuild_cache(registries).await
    }

    /// Cached plugins, optionally narrowed by a filter expression. Editors are
    /// never returned.
    pub fn query_plugins(&self, expression: Option<&str>) -> Vec<PluginMetadata> {
        self.query.query(expression)
    }
}
