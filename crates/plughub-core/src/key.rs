// SPDX-FileCopyrightText: 2026 Plughub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin key normalization.
//!
//! Plugins are identified by a short key `publisher/name/version` when they
//! come from the default registry, and by a long key prefixed with their
//! registry location otherwise. Devfiles reference plugins either by such a
//! key (`id`) or by the absolute location of their metadata document (`url`).

use url::Url;

use crate::devfile::Component;

/// File name of a plugin metadata document inside a registry.
pub const META_YAML: &str = "meta.yaml";

/// Returns true if `value` is an absolute `http`/`https` URL.
pub fn is_http_url(value: &str) -> bool {
    Url::parse(value)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// The short key `publisher/name/version`.
pub fn short_key(publisher: &str, name: &str, version: &str) -> String {
    format!("{publisher}/{name}/{version}")
}

/// Derive the canonical cache key for a plugin.
///
/// With `long_format`, the portion of `document_uri` preceding the short key
/// becomes a prefix, provided the URI ends with `{short}` or
/// `{short}/meta.yaml`. Otherwise the short key is returned even though a long
/// key was requested.
pub fn canonical_key(
    publisher: &str,
    name: &str,
    version: &str,
    document_uri: &str,
    long_format: bool,
) -> String {
    let short = short_key(publisher, name, version);
    if !long_format {
        return short;
    }

    let with_meta = format!("{short}/{META_YAML}");
    let prefix = document_uri
        .strip_suffix(short.as_str())
        .or_else(|| document_uri.strip_suffix(with_meta.as_str()));

    match prefix {
        Some(prefix) => format!("{prefix}{short}"),
        None => {
            tracing::debug!(
                key = %short,
                uri = %document_uri,
                "document location does not end with plugin key, using short key"
            );
            short
        }
    }
}

/// Canonicalize a devfile reference back to its base plugin location.
///
/// `https://host/path/meta.yaml` becomes `https://host/path`; anything else is
/// returned unchanged.
pub fn normalize_reference_id(id: &str) -> String {
    if is_http_url(id)
        && let Some(base) = id.strip_suffix(&format!("/{META_YAML}"))
    {
        return base.to_string();
    }
    id.to_string()
}

/// Build the devfile component referencing `id`.
///
/// URLs are referenced by `url` pointing at their `meta.yaml`; keys by `id`.
pub fn build_reference_component(id: &str) -> Component {
    if is_http_url(id) {
        Component::plugin_by_url(format!("{id}/{META_YAML}"))
    } else {
        Component::plugin_by_id(id)
    }
}
