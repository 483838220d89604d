// SPDX-FileCopyrightText: 2026 Plughub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Devfile plugin-list reconciliation.
//!
//! Reads the set of plugins a devfile references and rewrites its component
//! list to match a desired set, leaving every other component untouched and
//! in place. [`DevfileReconciler`] wraps the pure algorithm in
//! read-modify-write cycles against a [`plughub_core::DocumentStore`].

pub mod reconcile;
pub mod reconciler;
pub mod store;

pub use reconcile::{list_desired_plugins, reconcile};
pub use reconciler::DevfileReconciler;
pub use store::YamlFileStore;
