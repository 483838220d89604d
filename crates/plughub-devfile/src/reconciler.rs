// SPDX-FileCopyrightText: 2026 Plughub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-modify-write plugin operations against a document store.
//!
//! Each operation reads the whole devfile, edits its plugin list in memory,
//! and writes the whole devfile back. There is no locking: concurrent calls
//! against the same store are last-writer-wins.

use std::sync::Arc;

use plughub_core::{Devfile, DocumentStore, PlughubError};
use tracing::info;

use crate::reconcile::{list_desired_plugins, reconcile};

/// Edits the plugin list of the devfile held by a [`DocumentStore`].
#[derive(Clone)]
pub struct DevfileReconciler {
    store: Arc<dyn DocumentStore>,
}

impl std::fmt::Debug for DevfileReconciler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DevfileReconciler").finish_non_exhaustive()
    }
}

impl DevfileReconciler {
    /// Create a reconciler over `store`.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Keys of the plugins the devfile currently references.
    pub async fn list_desired_plugins(&self) -> Result<Vec<String>, PlughubError> {
        let mut devfile = self.store.get_document().await?;
        list_desired_plugins(&mut devfile)
    }

    /// Make the devfile reference exactly `keys`.
    pub async fn set_desired_plugins(&self, keys: &[String]) -> Result<(), PlughubError> {
        let named: Vec<&str> = keys.iter().map(String::as_str).collect();
        self.apply(&named, |_| keys.to_vec()).await
    }

    /// Add `key` to the devfile's plugins.
    pub async fn add_plugin(&self, key: &str) -> Result<(), PlughubError> {
        self.apply(&[key], |mut plugins| {
            plugins.push(key.to_string());
            plugins
        })
        .await
    }

    /// Remove every reference to `key` from the devfile's plugins.
    pub async fn remove_plugin(&self, key: &str) -> Result<(), PlughubError> {
        self.apply(&[key], |plugins| {
            plugins.into_iter().filter(|p| p != key).collect()
        })
        .await
    }

    /// Replace `old_key` with `new_key`. Succeeds, adding `new_key`, even if
    /// `old_key` was not referenced.
    pub async fn update_plugin(&self, old_key: &str, new_key: &str) -> Result<(), PlughubError> {
        self.apply(&[old_key, new_key], |plugins| {
            let mut plugins: Vec<String> = plugins.into_iter().filter(|p| p != old_key).collect();
            plugins.push(new_key.to_string());
            plugins
        })
        .await
    }

    async fn apply<F>(&self, keys: &[&str], edit: F) -> Result<(), PlughubError>
    where
        F: FnOnce(Vec<String>) -> Vec<String>,
    {
        self.read_modify_write(edit)
            .await
            .map_err(|e| PlughubError::devfile_update(keys, e))?;
        info!(plugins = ?keys, "devfile plugins updated");
        Ok(())
    }

    async fn read_modify_write<F>(&self, edit: F) -> Result<(), PlughubError>
    where
        F: FnOnce(Vec<String>) -> Vec<String>,
    {
        let mut devfile: Devfile = self.store.get_document().await?;
        let current = list_desired_plugins(&mut devfile)?;
        reconcile(&mut devfile, &edit(current))?;
        self.store.update_document(&devfile).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plughub_core::{Component, PluginReference};
    use plughub_test_utils::InMemoryDocumentStore;

    fn reconciler(yaml: &str) -> (DevfileReconciler, Arc<InMemoryDocumentStore>) {
        let store = Arc::new(InMemoryDocumentStore::from_yaml(yaml));
        (DevfileReconciler::new(store.clone()), store)
    }

    fn references(components: &[Component]) -> Vec<Option<PluginReference>> {
        components.iter().map(Component::plugin_reference).collect()
    }

    #[tokio::test]
    async fn add_to_document_without_components() {
        let (reconciler, store) = reconciler("apiVersion: 1.0.0\n");
        reconciler.add_plugin("pub/pl/1.0").await.unwrap();

        let components = store.document().await.components().unwrap();
        assert_eq!(components, vec![Component::plugin_by_id("pub/pl/1.0")]);
        assert_eq!(store.writes(), 1);
    }

    #[tokio::test]
    async fn add_url_key_references_meta_yaml() {
        let (reconciler, store) = reconciler("components: []\n");
        reconciler.add_plugin("https://reg/plugins/x").await.unwrap();
        let components = store.document().await.components().unwrap();
        assert_eq!(
            references(&components),
            vec![Some(PluginReference::Url("https://reg/plugins/x/meta.yaml".into()))]
        );
        assert_eq!(
            reconciler.list_desired_plugins().await.unwrap(),
            vec!["https://reg/plugins/x"]
        );
    }

    #[tokio::test]
    async fn remove_drops_only_that_plugin() {
        let (reconciler, store) = reconciler(
            "components:\n  - plugin:\n      id: a/a/1\n  - type: dockerimage\n  - plugin:\n      id: b/b/1\n",
        );
        reconciler.remove_plugin("a/a/1").await.unwrap();
        let components = store.document().await.components().unwrap();
        assert_eq!(
            references(&components),
            vec![None, Some(PluginReference::Id("b/b/1".into()))]
        );
    }

    #[tokio::test]
    async fn remove_absent_plugin_is_noop() {
        let (reconciler, store) = reconciler("components:\n  - plugin:\n      id: a/a/1\n");
        let before = store.document().await;
        reconciler.remove_plugin("z/z/1").await.unwrap();
        assert_eq!(store.document().await, before);
    }

    #[tokio::test]
    async fn update_replaces_old_key() {
        let (reconciler, _store) = reconciler("components:\n  - plugin:\n      id: a/a/1\n");
        reconciler.update_plugin("a/a/1", "a/a/2").await.unwrap();
        assert_eq!(reconciler.list_desired_plugins().await.unwrap(), vec!["a/a/2"]);
    }

    #[tokio::test]
    async fn update_with_missing_old_key_adds_new_key() {
        let (reconciler, _store) = reconciler("components:\n  - plugin:\n      id: a/a/1\n");
        reconciler.update_plugin("x/x/1", "b/b/1").await.unwrap();
        assert_eq!(
            reconciler.list_desired_plugins().await.unwrap(),
            vec!["a/a/1", "b/b/1"]
        );
    }

    #[tokio::test]
    async fn add_existing_key_leaves_document_unchanged() {
        let (reconciler, store) = reconciler("components:\n  - plugin:\n      id: a/b/1\n");
        let before = store.document().await;
        reconciler.add_plugin("a/b/1").await.unwrap();
        reconciler.add_plugin("a/b/1").await.unwrap();
        assert_eq!(store.document().await, before);
        assert_eq!(reconciler.list_desired_plugins().await.unwrap(), vec!["a/b/1"]);
    }

    #[tokio::test]
    async fn add_existing_url_key_is_not_duplicated() {
        let (reconciler, store) = reconciler(
            "components:\n  - plugin:\n      url: https://reg/plugins/x/meta.yaml\n",
        );
        reconciler.add_plugin("https://reg/plugins/x").await.unwrap();
        assert_eq!(store.document().await.components().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_onto_existing_key_is_not_duplicated() {
        let (reconciler, store) = reconciler("components:\n  - plugin:\n      id: a/b/1\n");
        reconciler.update_plugin("x/x/1", "a/b/1").await.unwrap();
        assert_eq!(reconciler.list_desired_plugins().await.unwrap(), vec!["a/b/1"]);
        assert_eq!(store.document().await.components().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn set_with_repeated_keys_writes_each_once() {
        let (reconciler, _store) = reconciler("components: []\n");
        reconciler
            .set_desired_plugins(&["c/c/1".to_string(), "c/c/1".to_string()])
            .await
            .unwrap();
        assert_eq!(reconciler.list_desired_plugins().await.unwrap(), vec!["c/c/1"]);
    }

    #[tokio::test]
    async fn set_replaces_the_whole_plugin_list() {
        let (reconciler, _store) = reconciler(
            "components:\n  - plugin:\n      id: a/a/1\n  - plugin:\n      id: b/b/1\n",
        );
        reconciler
            .set_desired_plugins(&["b/b/1".to_string(), "c/c/1".to_string()])
            .await
            .unwrap();
        assert_eq!(
            reconciler.list_desired_plugins().await.unwrap(),
            vec!["b/b/1", "c/c/1"]
        );
    }

    #[tokio::test]
    async fn store_failure_names_keys_and_cause() {
        let (reconciler, store) = reconciler("components: []\n");
        store.fail_writes();

        let err = reconciler.update_plugin("a/a/1", "a/a/2").await.unwrap_err();
        assert!(matches!(err, PlughubError::DevfileUpdate { .. }));
        let rendered = err.to_string();
        assert!(rendered.contains("a/a/1"), "got: {rendered}");
        assert!(rendered.contains("a/a/2"), "got: {rendered}");
        assert!(rendered.contains("rejected the update"), "got: {rendered}");
    }

    #[tokio::test]
    async fn malformed_document_fails_update() {
        let (reconciler, store) = reconciler("components: nope\n");
        let err = reconciler.add_plugin("a/a/1").await.unwrap_err();
        assert!(err.to_string().contains("must be a sequence"), "got: {err}");
        assert_eq!(store.writes(), 0);
    }
}
