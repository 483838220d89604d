// SPDX-FileCopyrightText: 2026 Plughub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin metadata documents (`meta.yaml`) and their normalization into
//! cached [`PluginMetadata`].

use plughub_core::key::canonical_key;
use plughub_core::{PluginMetadata, PluginRegistry};
use serde::{Deserialize, Deserializer};
use url::Url;

/// A plugin metadata document as published by a registry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginDocument {
    #[serde(deserialize_with = "scalar_string")]
    pub publisher: String,
    #[serde(deserialize_with = "scalar_string")]
    pub name: String,
    #[serde(deserialize_with = "scalar_string")]
    pub version: String,
    #[serde(rename = "type", default)]
    pub plugin_type: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub repository: Option<String>,
    #[serde(default, deserialize_with = "optional_scalar_string")]
    pub first_publication_date: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "optional_scalar_string")]
    pub latest_update_date: Option<String>,
}

impl PluginDocument {
    /// Parse a metadata document. Returns the parser's message on failure.
    pub fn from_yaml(content: &str) -> Result<Self, String> {
        serde_yaml::from_str(content).map_err(|e| format!("invalid plugin metadata: {e}"))
    }

    /// Normalize into cached metadata.
    ///
    /// The icon is made absolute against the registry's public base, and the
    /// key is derived from the document location (long form when
    /// `long_format`).
    pub fn into_metadata(
        self,
        document_uri: &str,
        registry: &PluginRegistry,
        long_format: bool,
    ) -> PluginMetadata {
        let key = canonical_key(
            &self.publisher,
            &self.name,
            &self.version,
            document_uri,
            long_format,
        );
        let icon = self
            .icon
            .map(|icon| absolute_icon(&icon, &registry.public_uri));

        PluginMetadata {
            publisher: self.publisher,
            name: self.name,
            version: self.version,
            plugin_type: self.plugin_type,
            display_name: self.display_name,
            title: self.title,
            description: self.description,
            icon,
            url: document_uri.to_string(),
            repository: self.repository,
            first_publication_date: self.first_publication_date,
            category: self.category,
            latest_update_date: self.latest_update_date,
            key,
            built_in: false,
        }
    }
}

/// Prefix a relative icon path with the registry's public base.
fn absolute_icon(icon: &str, public_uri: &str) -> String {
    if Url::parse(icon).is_ok() {
        return icon.to_string();
    }
    if icon.starts_with('/') {
        format!("{public_uri}{icon}")
    } else {
        format!("{public_uri}/{icon}")
    }
}

// Versions and dates are often written unquoted, which YAML reads as numbers.
fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_yaml::Value::deserialize(deserializer)?;
    scalar_to_string(value).ok_or_else(|| serde::de::Error::custom("expected a scalar value"))
}

fn optional_scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_yaml::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    scalar_to_string(value)
        .map(Some)
        .ok_or_else(|| serde::de::Error::custom("expected a scalar value"))
}

fn scalar_to_string(value: serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const META: &str = r#"
apiVersion: v2
publisher: redhat
name: java
version: 0.57.0
type: VS Code extension
displayName: Language Support for Java
title: Java
description: Java Linting, Intellisense, formatting, refactoring
icon: /images/redhat-java-icon.png
repository: https://github.com/redhat-developer/vscode-java
category: Language
firstPublicationDate: "2020-02-20"
latestUpdateDate: 2020-03-02
"#;

    fn registry() -> PluginRegistry {
        PluginRegistry::new("b", "http://internal/b", Some("https://public/b/"))
    }

    #[test]
    fn parses_che_style_metadata() {
        let doc = PluginDocument::from_yaml(META).unwrap();
        assert_eq!(doc.publisher, "redhat");
        assert_eq!(doc.version, "0.57.0");
        assert_eq!(doc.plugin_type, "VS Code extension");
        assert_eq!(doc.first_publication_date.as_deref(), Some("2020-02-20"));
        assert_eq!(doc.latest_update_date.as_deref(), Some("2020-03-02"));
    }

    #[test]
    fn numeric_version_is_read_as_string() {
        let doc = PluginDocument::from_yaml("publisher: p\nname: n\nversion: 1.0\n").unwrap();
        assert_eq!(doc.version, "1.0");
    }

    #[test]
    fn missing_publisher_is_rejected() {
        assert!(PluginDocument::from_yaml("name: n\nversion: latest\n").is_err());
    }

    #[test]
    fn relative_icon_is_prefixed_with_public_uri() {
        let metadata = PluginDocument::from_yaml(META).unwrap().into_metadata(
            "http://internal/b/redhat/java/0.57.0/meta.yaml",
            &registry(),
            true,
        );
        assert_eq!(
            metadata.icon.as_deref(),
            Some("https://public/b/images/redhat-java-icon.png")
        );
        assert_eq!(metadata.key, "http://internal/b/redhat/java/0.57.0");
        assert_eq!(metadata.url, "http://internal/b/redhat/java/0.57.0/meta.yaml");
        assert!(!metadata.built_in);
    }

    #[test]
    fn icon_without_leading_slash_gets_one() {
        assert_eq!(absolute_icon("icons/x.svg", "https://pub"), "https://pub/icons/x.svg");
    }

    #[test]
    fn absolute_icon_is_unchanged() {
        assert_eq!(
            absolute_icon("https://cdn/icons/x.svg", "https://pub"),
            "https://cdn/icons/x.svg"
        );
        assert_eq!(absolute_icon("data:image/png;base64,AA", "https://pub"), "data:image/png;base64,AA");
    }

    #[test]
    fn short_key_for_default_registry() {
        let metadata = PluginDocument::from_yaml(META).unwrap().into_metadata(
            "http://internal/b/plugins/redhat/java/0.57.0/",
            &registry(),
            false,
        );
        assert_eq!(metadata.key, "redhat/java/0.57.0");
    }
}
