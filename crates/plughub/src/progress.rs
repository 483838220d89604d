// SPDX-FileCopyrightText: 2026 Plughub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal progress for cache rebuilds.

use indicatif::{ProgressBar, ProgressStyle};
use plughub_core::{CacheObserver, PluginRegistry};

/// Drives a progress bar from cache rebuild notifications.
///
/// The bar's length tracks the number of discovered plugins and advances
/// once per plugin, cached or not.
#[derive(Clone)]
pub struct ProgressObserver {
    bar: ProgressBar,
}

impl ProgressObserver {
    /// A bar drawn on stderr.
    pub fn stderr() -> Self {
        let bar = ProgressBar::new(0);
        if let Ok(style) =
            ProgressStyle::with_template("{spinner} {msg} [{bar:30}] {pos}/{len}")
        {
            bar.set_style(style.progress_chars("=> "));
        }
        bar.set_message("caching plugins");
        Self { bar }
    }

    /// A bar that never draws.
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    #[cfg(test)]
    fn bar(&self) -> &ProgressBar {
        &self.bar
    }
}

impl CacheObserver for ProgressObserver {
    fn on_cache_size_changed(&self, size: usize) {
        self.bar.set_length(size as u64);
    }

    fn on_plugin_cached(&self, _cached: usize) {
        self.bar.inc(1);
    }

    fn on_invalid_registry(&self, registry: &PluginRegistry) {
        self.bar.println(format!(
            "warning: registry `{}` ({}) is unavailable",
            registry.name, registry.uri
        ));
    }

    fn on_invalid_plugin(&self, uri: &str) {
        self.bar.inc(1);
        tracing::debug!(uri, "plugin skipped");
    }

    fn on_caching_complete(&self) {
        self.bar.finish_and_clear();
    }
}
