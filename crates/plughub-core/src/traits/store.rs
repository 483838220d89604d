// SPDX-FileCopyrightText: 2026 Plughub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document store trait for the persisted devfile.

use async_trait::async_trait;

use crate::devfile::Devfile;
use crate::error::PlughubError;

/// Owner of the workspace's devfile.
///
/// Writes replace the whole document. There is no optimistic concurrency
/// control: the last writer wins.
#[async_trait]
pub trait DocumentStore: Send + Sync + 'static {
    /// Reads the full document.
    async fn get_document(&self) -> Result<Devfile, PlughubError>;

    /// Replaces the full document.
    async fn update_document(&self, document: &Devfile) -> Result<(), PlughubError>;
}
