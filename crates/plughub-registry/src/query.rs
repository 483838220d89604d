// SPDX-FileCopyrightText: 2026 Plughub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin queries over the cache.

use std::sync::Arc;

use plughub_core::{PluginFilter, PluginMetadata};

use crate::cache::PluginCache;

/// Serves filtered views of the plugin cache. Never touches the network.
#[derive(Clone)]
pub struct PluginQuery {
    cache: PluginCache,
    filter: Arc<dyn PluginFilter>,
}

impl std::fmt::Debug for PluginQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginQuery")
            .field("cached", &self.cache.len())
            .finish()
    }
}

impl PluginQuery {
    /// Create a query service reading `cache` and narrowing with `filter`.
    pub fn new(cache: PluginCache, filter: Arc<dyn PluginFilter>) -> Self {
        Self { cache, filter }
    }

    /// Copy of the cache, narrowed by `expression` when given. Editors are
    /// always excluded.
    pub fn query(&self, expression: Option<&str>) -> Vec<PluginMetadata> {
        let plugins = self.cache.snapshot();
        let plugins = match expression {
            Some(expression) => self.filter.filter(plugins, expression),
            None => plugins,
        };
        plugins.into_iter().filter(|p| !p.is_editor()).collect()
    }
}
