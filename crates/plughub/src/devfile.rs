// SPDX-FileCopyrightText: 2026 Plughub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `plughub devfile` command implementation.

use std::path::Path;
use std::sync::Arc;

use clap::Subcommand;
use plughub_core::PlughubError;
use plughub_devfile::{DevfileReconciler, YamlFileStore};

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum DevfileAction {
    /// Print the keys of the plugins the devfile references.
    List,
    /// Replace the devfile's plugins with exactly these keys.
    Set { keys: Vec<String> },
    /// Add a plugin reference.
    Add { key: String },
    /// Remove every reference to a plugin.
    Remove { key: String },
    /// Replace one plugin reference with another.
    Update { old_key: String, new_key: String },
}

/// Run a devfile action against the YAML file at `path`.
pub async fn run_devfile(path: &Path, action: &DevfileAction) -> Result<(), PlughubError> {
    let reconciler = DevfileReconciler::new(Arc::new(YamlFileStore::new(path)));
    for line in apply(&reconciler, action).await? {
        println!("{line}");
    }
    Ok(())
}

/// Apply `action`, returning the lines to print.
pub async fn apply(
    reconciler: &DevfileReconciler,
    action: &DevfileAction,
) -> Result<Vec<String>, PlughubError> {
    match action {
        DevfileAction::List => reconciler.list_desired_plugins().await,
        DevfileAction::Set { keys } => {
            reconciler.set_desired_plugins(keys).await?;
            Ok(vec![format!("devfile now references {} plugin(s)", keys.len())])
        }
        DevfileAction::Add { key } => {
            reconciler.add_plugin(key).await?;
            Ok(vec![format!("added {key}")])
        }
        DevfileAction::Remove { key } => {
            reconciler.remove_plugin(key).await?;
            Ok(vec![format!("removed {key}")])
        }
        DevfileAction::Update { old_key, new_key } => {
            reconciler.update_plugin(old_key, new_key).await?;
            Ok(vec![format!("replaced {old_key} with {new_key}")])
        }
    }
}
