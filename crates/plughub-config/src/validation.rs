// SPDX-FileCopyrightText: 2026 Plughub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Semantic checks that serde attributes cannot express.

use std::collections::HashSet;

use url::Url;

use crate::diagnostic::ConfigError;
use crate::model::PlughubConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration, collecting every failure.
pub fn validate_config(config: &PlughubConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    for (field, value) in [
        ("workspace.public_registry_url", &config.workspace.public_registry_url),
        ("workspace.internal_registry_url", &config.workspace.internal_registry_url),
    ] {
        if let Some(url) = value
            && Url::parse(url).is_err()
        {
            errors.push(invalid(format!("{field} `{url}` is not an absolute URL")));
        }
    }

    let mut seen = HashSet::new();
    for (index, registry) in config.registries.iter().enumerate() {
        let name = registry.name.trim();
        if name.is_empty() {
            errors.push(invalid(format!("registries[{index}].name must not be empty")));
        } else if !seen.insert(name) {
            errors.push(invalid(format!("duplicate registry name `{name}`")));
        }

        if !is_http_base(&registry.uri) {
            errors.push(invalid(format!(
                "registries[{index}].uri `{}` must be an absolute http(s) URL",
                registry.uri
            )));
        }
        if let Some(public) = &registry.public_uri
            && !is_http_base(public)
        {
            errors.push(invalid(format!(
                "registries[{index}].public_uri `{public}` must be an absolute http(s) URL"
            )));
        }
    }

    if config.http.timeout_secs == 0 {
        errors.push(invalid("http.timeout_secs must be greater than 0".to_string()));
    }

    if !LOG_LEVELS.contains(&config.log.level.to_ascii_lowercase().as_str()) {
        errors.push(invalid(format!(
            "log.level `{}` must be one of: {}",
            config.log.level,
            LOG_LEVELS.join(", ")
        )));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_http_base(uri: &str) -> bool {
    Url::parse(uri).is_ok_and(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
}

fn invalid(message: String) -> ConfigError {
    ConfigError::Validation { message }
}
