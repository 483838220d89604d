// SPDX-FileCopyrightText: 2026 Plughub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory devfile store.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use plughub_core::{Devfile, DocumentStore, PlughubError};

/// A document store holding one devfile in memory.
///
/// Writes can be made to fail to exercise error propagation.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    document: Mutex<Devfile>,
    fail_writes: AtomicBool,
    writes: AtomicUsize,
}

impl InMemoryDocumentStore {
    /// A store holding `document`.
    pub fn new(document: Devfile) -> Self {
        Self {
            document: Mutex::new(document),
            ..Self::default()
        }
    }

    /// A store holding the devfile parsed from `yaml`.
    ///
    /// # Panics
    ///
    /// Panics if `yaml` is not a valid devfile.
    pub fn from_yaml(yaml: &str) -> Self {
        Self::new(Devfile::from_yaml(yaml).expect("test devfile should parse"))
    }

    /// Make every subsequent write fail.
    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    /// Number of successful writes.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Snapshot of the stored document.
    pub async fn document(&self) -> Devfile {
        self.document.lock().await.clone()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get_document(&self) -> Result<Devfile, PlughubError> {
        Ok(self.document.lock().await.clone())
    }

    async fn update_document(&self, document: &Devfile) -> Result<(), PlughubError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(PlughubError::Store {
                message: "workspace store rejected the update".to_string(),
                source: None,
            });
        }
        *self.document.lock().await = document.clone();
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
