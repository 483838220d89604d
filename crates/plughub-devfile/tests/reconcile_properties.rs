// SPDX-FileCopyrightText: 2026 Plughub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property tests for devfile reconciliation.

use std::collections::BTreeSet;
use std::sync::Arc;

use plughub_core::{Component, Devfile};
use plughub_devfile::{list_desired_plugins, reconcile, DevfileReconciler};
use plughub_test_utils::InMemoryDocumentStore;
use proptest::prelude::*;
use serde_yaml::Value;

#[derive(Debug, Clone)]
enum Entry {
    Id(String),
    Url(String),
    Container(String),
}

fn entry() -> impl Strategy<Value = Entry> {
    prop_oneof![
        "[a-c]/[a-c]/[1-2]".prop_map(Entry::Id),
        "https://reg/[a-c]/[1-2]".prop_map(Entry::Url),
        "[a-z]{1,6}".prop_map(Entry::Container),
    ]
}

fn key() -> impl Strategy<Value = String> {
    prop_oneof!["[a-c]/[a-c]/[1-2]", "https://reg/[a-c]/[1-2]"]
}

fn container(alias: &str) -> Component {
    let mut map = serde_yaml::Mapping::new();
    map.insert("type".into(), "dockerimage".into());
    map.insert("alias".into(), alias.into());
    Component::from(Value::Mapping(map))
}

fn devfile(entries: &[Entry]) -> Devfile {
    let mut devfile = Devfile::from_yaml("apiVersion: 1.0.0\n").unwrap();
    let components = entries
        .iter()
        .map(|e| match e {
            Entry::Id(id) => Component::plugin_by_id(id.clone()),
            Entry::Url(url) => Component::plugin_by_url(format!("{url}/meta.yaml")),
            Entry::Container(alias) => container(alias),
        })
        .collect();
    devfile.set_components(components);
    devfile
}

fn non_plugins(devfile: &Devfile) -> Vec<Component> {
    devfile
        .components()
        .unwrap()
        .into_iter()
        .filter(|c| c.plugin_reference().is_none())
        .collect()
}

fn entry_key(entry: &Entry) -> Option<String> {
    match entry {
        Entry::Id(id) => Some(id.clone()),
        Entry::Url(url) => Some(url.clone()),
        Entry::Container(_) => None,
    }
}

fn block_on<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(future)
}

fn component_count(store: &InMemoryDocumentStore) -> usize {
    block_on(store.document()).components().unwrap().len()
}

fn reconciler_over(entries: &[Entry]) -> (DevfileReconciler, Arc<InMemoryDocumentStore>) {
    let store = Arc::new(InMemoryDocumentStore::new(devfile(entries)));
    (DevfileReconciler::new(store.clone()), store)
}

proptest! {
    #[test]
    fn adding_a_present_key_keeps_component_count(
        entries in prop::collection::vec(entry(), 1..8),
        pick in any::<prop::sample::Index>(),
    ) {
        let keys: Vec<String> = entries.iter().filter_map(entry_key).collect();
        prop_assume!(!keys.is_empty());
        let key = pick.get(&keys).clone();
        let (reconciler, store) = reconciler_over(&entries);
        let before = component_count(&store);
        block_on(reconciler.add_plugin(&key)).unwrap();
        prop_assert_eq!(component_count(&store), before);
    }

    #[test]
    fn updating_onto_a_present_key_never_grows(
        entries in prop::collection::vec(entry(), 1..8),
        pick in any::<prop::sample::Index>(),
        old in key(),
    ) {
        let keys: Vec<String> = entries.iter().filter_map(entry_key).collect();
        prop_assume!(!keys.is_empty());
        let key = pick.get(&keys).clone();
        let (reconciler, store) = reconciler_over(&entries);
        let before = component_count(&store);
        block_on(reconciler.update_plugin(&old, &key)).unwrap();
        let after = component_count(&store);
        prop_assert!(after <= before, "grew from {} to {}", before, after);
    }

    #[test]
    fn reconciling_current_list_is_identity(entries in prop::collection::vec(entry(), 0..8)) {
        let mut doc = devfile(&entries);
        let before = doc.clone();
        let current = list_desired_plugins(&mut doc).unwrap();
        reconcile(&mut doc, &current).unwrap();
        prop_assert_eq!(doc, before);
    }

    #[test]
    fn reconciled_set_matches_desired_set(
        entries in prop::collection::vec(entry(), 0..8),
        desired in prop::collection::vec(key(), 0..6),
    ) {
        let mut doc = devfile(&entries);
        reconcile(&mut doc, &desired).unwrap();
        let listed: BTreeSet<String> = list_desired_plugins(&mut doc).unwrap().into_iter().collect();
        let wanted: BTreeSet<String> = desired.into_iter().collect();
        prop_assert_eq!(listed, wanted);
    }

    #[test]
    fn non_plugin_components_keep_relative_order(
        entries in prop::collection::vec(entry(), 0..8),
        desired in prop::collection::vec(key(), 0..6),
    ) {
        let mut doc = devfile(&entries);
        let before = non_plugins(&doc);
        reconcile(&mut doc, &desired).unwrap();
        prop_assert_eq!(non_plugins(&doc), before);
    }

    #[test]
    fn reconcile_is_idempotent(
        entries in prop::collection::vec(entry(), 0..8),
        desired in prop::collection::vec(key(), 0..6),
    ) {
        let mut doc = devfile(&entries);
        reconcile(&mut doc, &desired).unwrap();
        let once = doc.clone();
        reconcile(&mut doc, &desired).unwrap();
        prop_assert_eq!(doc, once);
    }
}
