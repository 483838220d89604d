// SPDX-FileCopyrightText: 2026 Plughub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Workspace settings served from loaded configuration.

use async_trait::async_trait;
use plughub_core::{PlughubError, SettingsProvider, WorkspaceSettings};

use crate::model::WorkspaceConfig;

/// A [`SettingsProvider`] over the `[workspace]` section.
#[derive(Debug, Clone)]
pub struct ConfigSettingsProvider {
    workspace: WorkspaceConfig,
}

impl ConfigSettingsProvider {
    pub fn new(workspace: WorkspaceConfig) -> Self {
        Self { workspace }
    }
}

#[async_trait]
impl SettingsProvider for ConfigSettingsProvider {
    async fn workspace_settings(&self) -> Result<WorkspaceSettings, PlughubError> {
        if self.workspace.public_registry_url.is_none() {
            return Err(PlughubError::Configuration(
                "`workspace.public_registry_url` is not set".to_string(),
            ));
        }
        Ok(self.workspace.to_settings())
    }
}
