// SPDX-FileCopyrightText: 2026 Plughub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed workspace settings.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use plughub_core::{PlughubError, SettingsProvider, WorkspaceSettings};

/// A settings provider returning fixed settings, or failing when unavailable.
///
/// Counts how many times settings were read.
#[derive(Debug, Default)]
pub struct StaticSettings {
    settings: Option<WorkspaceSettings>,
    reads: AtomicUsize,
}

impl StaticSettings {
    /// Settings with the given public and optional internal registry URLs.
    pub fn new(public_registry_url: &str, internal_registry_url: Option<&str>) -> Self {
        Self::from_settings(WorkspaceSettings {
            public_registry_url: Some(public_registry_url.to_string()),
            internal_registry_url: internal_registry_url.map(str::to_string),
        })
    }

    /// Wrap arbitrary settings.
    pub fn from_settings(settings: WorkspaceSettings) -> Self {
        Self {
            settings: Some(settings),
            reads: AtomicUsize::new(0),
        }
    }

    /// A provider whose settings cannot be retrieved.
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Number of times settings were requested.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SettingsProvider for StaticSettings {
    async fn workspace_settings(&self) -> Result<WorkspaceSettings, PlughubError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.settings.clone().ok_or_else(|| {
            PlughubError::Configuration("workspace settings are unavailable".to_string())
        })
    }
}
