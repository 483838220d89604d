// SPDX-FileCopyrightText: 2026 Plughub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin filter trait used by plugin queries.

use crate::types::PluginMetadata;

/// Narrows a plugin list by a filter expression whose syntax is defined by
/// the implementation.
pub trait PluginFilter: Send + Sync + 'static {
    /// Returns the entries of `plugins` matching `expression`.
    fn filter(&self, plugins: Vec<PluginMetadata>, expression: &str) -> Vec<PluginMetadata>;
}
