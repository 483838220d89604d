// SPDX-FileCopyrightText: 2026 Plughub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for plughub.
//!
//! This crate provides the error taxonomy, the registry/plugin/devfile data
//! model, plugin key normalization, and the collaborator traits that the
//! registry client, cache builder, and devfile reconciler are built on.

pub mod devfile;
pub mod error;
pub mod key;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use devfile::{Component, Devfile, PluginReference};
pub use error::PlughubError;
pub use types::{PluginLinks, PluginMetadata, PluginRegistry, RawPluginSummary, WorkspaceSettings};

pub use traits::{CacheObserver, DocumentStore, PluginFilter, SettingsProvider, Transport};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_traits_are_object_safe() {
        // Every collaborator is injected as a trait object.
        fn _transport(_: &dyn Transport) {}
        fn _settings(_: &dyn SettingsProvider) {}
        fn _store(_: &dyn DocumentStore) {}
        fn _filter(_: &dyn PluginFilter) {}
        fn _observer(_: &dyn CacheObserver) {}
    }

    #[test]
    fn plugin_metadata_serializes_camel_case() {
        let metadata = PluginMetadata {
            publisher: "pub".into(),
            name: "pl".into(),
            version: "1.0".into(),
            plugin_type: "VS Code extension".into(),
            display_name: Some("Plugin".into()),
            title: None,
            description: None,
            icon: Some("https://reg/icons/pl.svg".into()),
            url: "https://reg/plugins/pub/pl/1.0/meta.yaml".into(),
            repository: None,
            first_publication_date: None,
            category: None,
            latest_update_date: None,
            key: "pub/pl/1.0".into(),
            built_in: false,
        };
        let json = serde_json::to_value(&metadata).unwrap();
        assert_eq!(json["type"], "VS Code extension");
        assert_eq!(json["displayName"], "Plugin");
        assert_eq!(json["builtIn"], false);
        assert!(!metadata.is_editor());
    }
}
