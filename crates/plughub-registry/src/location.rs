// SPDX-FileCopyrightText: 2026 Plughub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Metadata document location resolution.
//!
//! Registries publish the location of each plugin's metadata document in
//! different ways depending on how they are deployed. The four cases are kept
//! as explicit variants so each can be resolved and tested on its own.

use plughub_core::{PluginRegistry, PlughubError, RawPluginSummary};
use url::Url;

use plughub_core::key::META_YAML;

/// How a plugin summary locates its metadata document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentLocation<'a> {
    /// Absolute-path self link on the default registry. The literal path is
    /// ignored: the document always lives at `{uri}/plugins/{id}/`.
    AbsolutePathOnDefault { id: &'a str },
    /// Absolute-path self link on another registry, resolved against that
    /// registry's scheme and authority.
    AbsolutePathCrossHost { path: &'a str },
    /// Relative self link, resolved against the registry's base directory.
    RelativeToBase { path: &'a str },
    /// No self link: `{id}/meta.yaml` under the base directory.
    NoSelfLink { id: &'a str },
}

impl<'a> DocumentLocation<'a> {
    /// Pick the resolution case for `summary`.
    pub fn classify(summary: &'a RawPluginSummary, is_default_registry: bool) -> Self {
        match summary.self_link().filter(|link| !link.is_empty()) {
            Some(link) if link.starts_with('/') => {
                if is_default_registry {
                    DocumentLocation::AbsolutePathOnDefault { id: &summary.id }
                } else {
                    DocumentLocation::AbsolutePathCrossHost { path: link }
                }
            }
            Some(link) => DocumentLocation::RelativeToBase { path: link },
            None => DocumentLocation::NoSelfLink { id: &summary.id },
        }
    }

    /// Compute the absolute document location within `registry`.
    pub fn resolve(&self, registry: &PluginRegistry) -> Result<String, PlughubError> {
        match *self {
            DocumentLocation::AbsolutePathOnDefault { id } => {
                Ok(format!("{}/plugins/{id}/", registry.uri))
            }
            DocumentLocation::AbsolutePathCrossHost { path } => {
                Ok(format!("{}{path}", origin(&registry.uri)?))
            }
            DocumentLocation::RelativeToBase { path } => {
                Ok(format!("{}{path}", base_directory(&registry.uri)))
            }
            DocumentLocation::NoSelfLink { id } => {
                Ok(format!("{}{id}/{META_YAML}", base_directory(&registry.uri)))
            }
        }
    }
}

/// Directory that relative registry links resolve against.
///
/// A location ending in `.json` names an index file, so its parent directory
/// is used. Otherwise the location itself is the directory. The result always
/// ends with exactly one `/`.
pub fn base_directory(uri: &str) -> String {
    if uri.ends_with(".json")
        && let Some(slash) = uri.rfind('/')
    {
        return uri[..=slash].to_string();
    }
    format!("{}/", uri.trim_end_matches('/'))
}

/// `{scheme}://{authority}` of a registry location.
fn origin(uri: &str) -> Result<String, PlughubError> {
    let parsed = Url::parse(uri).map_err(|e| {
        PlughubError::Configuration(format!("registry location `{uri}` is not a URL: {e}"))
    })?;
    let host = parsed.host_str().ok_or_else(|| {
        PlughubError::Configuration(format!("registry location `{uri}` has no host"))
    })?;
    Ok(match parsed.port() {
        Some(port) => format!("{}://{host}:{port}", parsed.scheme()),
        None => format!("{}://{host}", parsed.scheme()),
    })
}
