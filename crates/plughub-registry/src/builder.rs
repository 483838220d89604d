// SPDX-FileCopyrightText: 2026 Plughub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Multi-registry cache rebuild.
//!
//! Registries are processed one at a time, and plugins within a registry in
//! index order, so observer notifications arrive strictly ordered. A bad
//! registry or a bad plugin is reported to the observer and skipped; only an
//! unresolvable default registry aborts the rebuild.

use std::sync::{Arc, RwLock};

use plughub_core::{
    CacheObserver, PluginMetadata, PluginRegistry, PlughubError, RawPluginSummary,
};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::cache::PluginCache;
use crate::client::{RegistryClient, RegistryIndex};

/// Rebuilds the plugin cache from a set of registries.
pub struct CacheBuilder {
    client: RegistryClient,
    cache: PluginCache,
    observer: RwLock<Option<Arc<dyn CacheObserver>>>,
    rebuild_lock: Mutex<()>,
}

impl std::fmt::Debug for CacheBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheBuilder")
            .field("client", &self.client)
            .field("cached", &self.cache.len())
            .field("observer", &self.observer().is_some())
            .finish()
    }
}

impl CacheBuilder {
    /// Create a builder writing into `cache`.
    pub fn new(client: RegistryClient, cache: PluginCache) -> Self {
        Self {
            client,
            cache,
            observer: RwLock::new(None),
            rebuild_lock: Mutex::new(()),
        }
    }

    /// The registry client used for fetching.
    pub fn client(&self) -> &RegistryClient {
        &self.client
    }

    /// Attach the observer that receives rebuild notifications.
    pub fn set_observer(&self, observer: Arc<dyn CacheObserver>) {
        *self
            .observer
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(observer);
    }

    /// Detach the current observer.
    pub fn clear_observer(&self) {
        *self
            .observer
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
    }

    fn observer(&self) -> Option<Arc<dyn CacheObserver>> {
        self.observer
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Rebuild the cache from `registries`, in the given order.
    ///
    /// Does nothing when no observer is attached. Concurrent calls are
    /// serialized. Returns an error only if the default registry cannot be
    /// resolved; every other failure is reported to the observer, which
    /// always receives exactly one `on_caching_complete()` otherwise.
    pub async fn rebuild_cache(&self, registries: &[PluginRegistry]) -> Result<(), PlughubError> {
        let Some(observer) = self.observer() else {
            debug!("no cache observer attached, skipping rebuild");
            return Ok(());
        };
        let _guard = self.rebuild_lock.lock().await;

        self.cache.clear();
        observer.on_cache_size_changed(0);

        let default_uri = self.client.resolve_default_registry().await?.uri.clone();

        let mut discovered = 0usize;
        for registry in registries {
            let summaries = match self.client.fetch_index(registry).await {
                Ok(RegistryIndex::Plugins(summaries)) => summaries,
                Ok(RegistryIndex::NotAList(value)) => {
                    warn!(registry = %registry.name, uri = %registry.uri, body = %value, "registry index is not a plugin list");
                    observer.on_invalid_registry(registry);
                    continue;
                }
                Err(e) => {
                    warn!(registry = %registry.name, error = %e, "skipping invalid registry");
                    observer.on_invalid_registry(registry);
                    continue;
                }
            };

            discovered += summaries.len();
            observer.on_cache_size_changed(discovered);

            let is_default = registry.uri == default_uri;
            for summary in &summaries {
                match self.load_plugin(registry, summary, is_default).await {
                    Ok(metadata) => {
                        let cached = self.cache.push(metadata);
                        observer.on_plugin_cached(cached);
                    }
                    Err((uri, e)) => {
                        warn!(registry = %registry.name, plugin = %summary.id, error = %e, "skipping invalid plugin");
                        observer.on_invalid_plugin(&uri);
                    }
                }
            }
        }

        info!(
            registries = registries.len(),
            discovered,
            cached = self.cache.len(),
            "plugin cache rebuilt"
        );
        observer.on_caching_complete();
        Ok(())
    }

    /// Resolve, fetch, and normalize one plugin. On failure, returns the
    /// location to report alongside the error.
    async fn load_plugin(
        &self,
        registry: &PluginRegistry,
        summary: &RawPluginSummary,
        is_default: bool,
    ) -> Result<PluginMetadata, (String, PlughubError)> {
        let uri = self
            .client
            .resolve_plugin_document_uri(registry, summary, is_default)
            .map_err(|e| {
                let reported = summary.self_link().unwrap_or(summary.id.as_str()).to_string();
                (reported, e)
            })?;

        let document = self
            .client
            .fetch_plugin_document(&uri)
            .await
            .map_err(|e| (uri.clone(), e))?;

        Ok(document.into_metadata(&uri, registry, !is_default))
    }
}
