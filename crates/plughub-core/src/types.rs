// SPDX-FileCopyrightText: 2026 Plughub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registry and plugin types shared across plughub crates.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Plugin type reserved for editors. Editors are never returned by plugin queries.
pub const EDITOR_TYPE: &str = "editor";

/// A remote plugin registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginRegistry {
    /// Display name of the registry.
    pub name: String,
    /// Internally reachable base location, without a trailing slash.
    pub uri: String,
    /// Externally reachable base used to absolutize relative resource links.
    pub public_uri: String,
}

impl PluginRegistry {
    /// Create a registry, stripping trailing slashes from both locations.
    ///
    /// `public_uri` defaults to `uri` when not given.
    pub fn new(name: impl Into<String>, uri: &str, public_uri: Option<&str>) -> Self {
        let uri = strip_trailing_slashes(uri);
        let public_uri = public_uri
            .map(strip_trailing_slashes)
            .unwrap_or_else(|| uri.clone());
        Self {
            name: name.into(),
            uri,
            public_uri,
        }
    }
}

/// Remove every trailing `/` from a location.
pub fn strip_trailing_slashes(location: &str) -> String {
    location.trim_end_matches('/').to_string()
}

/// Links section of a registry index entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginLinks {
    /// Location of the plugin's metadata document, absolute-path or relative.
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    /// Any other links published by the registry.
    #[serde(flatten)]
    pub other: BTreeMap<String, serde_json::Value>,
}

/// A plugin summary as listed by a registry's index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawPluginSummary {
    pub id: String,
    pub display_name: Option<String>,
    pub version: Option<String>,
    #[serde(rename = "type")]
    pub plugin_type: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub publisher: Option<String>,
    pub links: Option<PluginLinks>,
}

impl RawPluginSummary {
    /// The `links.self` value, if the registry published one.
    pub fn self_link(&self) -> Option<&str> {
        self.links.as_ref().and_then(|l| l.self_link.as_deref())
    }
}

/// Canonical, cached plugin metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginMetadata {
    pub publisher: String,
    pub name: String,
    pub version: String,
    #[serde(rename = "type")]
    pub plugin_type: String,
    pub display_name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Always absolute once cached.
    pub icon: Option<String>,
    /// Location of the plugin's metadata document.
    pub url: String,
    pub repository: Option<String>,
    pub first_publication_date: Option<String>,
    pub category: Option<String>,
    pub latest_update_date: Option<String>,
    /// Canonical cache and reference key (short or long form).
    pub key: String,
    /// Always `false` for registry-sourced entries.
    pub built_in: bool,
}

impl PluginMetadata {
    /// Returns true if this entry is an editor rather than a plugin.
    pub fn is_editor(&self) -> bool {
        self.plugin_type == EDITOR_TYPE
    }
}

/// Workspace-wide registry settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSettings {
    pub public_registry_url: Option<String>,
    pub internal_registry_url: Option<String>,
}
