// SPDX-FileCopyrightText: 2026 Plughub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Devfile persisted as a YAML file on local disk.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use plughub_core::{Devfile, DocumentStore, PlughubError};
use tracing::debug;

/// A [`DocumentStore`] backed by a single YAML file.
///
/// A missing file reads as an empty devfile. Writes go to a sibling
/// temporary file that is then renamed over the target.
#[derive(Debug, Clone)]
pub struct YamlFileStore {
    path: PathBuf,
}

impl YamlFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "devfile.yaml".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn store_error(&self, action: &str, e: std::io::Error) -> PlughubError {
        PlughubError::Store {
            message: format!("failed to {action} {}: {e}", self.path.display()),
            source: Some(Box::new(e)),
        }
    }
}

#[async_trait]
impl DocumentStore for YamlFileStore {
    async fn get_document(&self) -> Result<Devfile, PlughubError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => Devfile::from_yaml(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "devfile not found, starting empty");
                Ok(Devfile::default())
            }
            Err(e) => Err(self.store_error("read", e)),
        }
    }

    async fn update_document(&self, document: &Devfile) -> Result<(), PlughubError> {
        let content = document.to_yaml()?;
        let staging = self.staging_path();
        tokio::fs::write(&staging, content)
            .await
            .map_err(|e| self.store_error("write", e))?;
        tokio::fs::rename(&staging, &self.path)
            .await
            .map_err(|e| self.store_error("replace", e))?;
        debug!(path = %self.path.display(), "devfile written");
        Ok(())
    }
}
