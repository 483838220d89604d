// SPDX-FileCopyrightText: 2026 Plughub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Workspace settings provider trait.

use async_trait::async_trait;

use crate::error::PlughubError;
use crate::types::WorkspaceSettings;

/// Source of the workspace-wide registry settings.
#[async_trait]
pub trait SettingsProvider: Send + Sync + 'static {
    /// Returns the current workspace settings.
    async fn workspace_settings(&self) -> Result<WorkspaceSettings, PlughubError>;
}
