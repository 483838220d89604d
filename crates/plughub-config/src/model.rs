// SPDX-FileCopyrightText: 2026 Plughub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model.
//!
//! Every section rejects unknown keys so typos surface at startup.

use std::path::PathBuf;

use plughub_core::{PluginRegistry, WorkspaceSettings};
use serde::{Deserialize, Serialize};

/// Top-level plughub configuration. All sections are optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PlughubConfig {
    /// Workspace settings the default registry is resolved from.
    #[serde(default)]
    pub workspace: WorkspaceConfig,

    /// Additional registries, processed in order after the default one.
    #[serde(default)]
    pub registries: Vec<RegistryConfig>,

    #[serde(default)]
    pub http: HttpConfig,

    #[serde(default)]
    pub devfile: DevfileConfig,

    #[serde(default)]
    pub log: LogConfig,
}

impl PlughubConfig {
    /// Configured registries as cache-rebuild input.
    pub fn registries(&self) -> Vec<PluginRegistry> {
        self.registries.iter().map(RegistryConfig::to_registry).collect()
    }

    /// The effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// `[workspace]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct WorkspaceConfig {
    /// Externally reachable base of the default registry.
    #[serde(default)]
    pub public_registry_url: Option<String>,

    /// In-cluster base of the default registry, preferred for fetching.
    #[serde(default)]
    pub internal_registry_url: Option<String>,
}

impl WorkspaceConfig {
    pub fn to_settings(&self) -> WorkspaceSettings {
        WorkspaceSettings {
            public_registry_url: self.public_registry_url.clone(),
            internal_registry_url: self.internal_registry_url.clone(),
        }
    }
}

/// One `[[registries]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    pub name: String,
    pub uri: String,
    /// Defaults to `uri`.
    #[serde(default)]
    pub public_uri: Option<String>,
}

impl RegistryConfig {
    pub fn to_registry(&self) -> PluginRegistry {
        PluginRegistry::new(&self.name, &self.uri, self.public_uri.as_deref())
    }
}

/// `[http]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HttpConfig {
    /// Whole-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("plughub/{}", env!("CARGO_PKG_VERSION"))
}

/// `[devfile]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DevfileConfig {
    #[serde(default = "default_devfile_path")]
    pub path: PathBuf,
}

impl Default for DevfileConfig {
    fn default() -> Self {
        Self {
            path: default_devfile_path(),
        }
    }
}

fn default_devfile_path() -> PathBuf {
    PathBuf::from("devfile.yaml")
}

/// `[log]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// trace, debug, info, warn or error.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
