// SPDX-FileCopyrightText: 2026 Plughub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered config loading with Figment.
//!
//! Merge order, later overriding earlier: compiled defaults,
//! `/etc/plughub/plughub.toml`, `~/.config/plughub/plughub.toml`,
//! `./plughub.toml`, then `PLUGHUB_*` environment variables.

#![allow(clippy::result_large_err)] // figment::Error is external

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::PlughubConfig;

const SYSTEM_CONFIG: &str = "/etc/plughub/plughub.toml";
const LOCAL_CONFIG: &str = "plughub.toml";

/// Sections reachable through environment variables. `[[registries]]` is
/// file-only.
const ENV_SECTIONS: &[&str] = &["workspace", "http", "devfile", "log"];

/// Config file locations in merge order.
pub fn config_file_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(SYSTEM_CONFIG)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("plughub").join(LOCAL_CONFIG));
    }
    paths.push(PathBuf::from(LOCAL_CONFIG));
    paths
}

/// Build the full layered Figment without extracting it.
pub fn build_figment() -> Figment {
    config_file_paths()
        .into_iter()
        .fold(
            Figment::new().merge(Serialized::defaults(PlughubConfig::default())),
            |figment, path| figment.merge(Toml::file(path)),
        )
        .merge(env_provider())
}

/// Load configuration from the standard hierarchy with env overrides.
pub fn load_config() -> Result<PlughubConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only. No files, no environment.
pub fn load_config_from_str(toml_content: &str) -> Result<PlughubConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PlughubConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from one explicit file with env overrides.
pub fn load_config_from_path(path: &Path) -> Result<PlughubConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PlughubConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// `PLUGHUB_HTTP_TIMEOUT_SECS` maps to `http.timeout_secs`: only the first
/// underscore after a known section name becomes a dot.
fn env_provider() -> Env {
    Env::prefixed("PLUGHUB_").map(|key| map_env_key(key.as_str()).into())
}

pub(crate) fn map_env_key(key: &str) -> String {
    for section in ENV_SECTIONS {
        if let Some(rest) = key.strip_prefix(section)
            && let Some(field) = rest.strip_prefix('_')
        {
            return format!("{section}.{field}");
        }
    }
    key.to_string()
}
