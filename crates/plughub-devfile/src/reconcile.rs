// SPDX-FileCopyrightText: 2026 Plughub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin-list reconciliation over an in-memory devfile.

use std::collections::HashSet;

use plughub_core::key::{build_reference_component, normalize_reference_id};
use plughub_core::{Component, Devfile, PlughubError, PluginReference};
use tracing::debug;

/// Normalized key of a plugin-reference component, `None` for anything else.
fn reference_key(component: &Component) -> Option<String> {
    component.plugin_reference().map(|reference| match reference {
        PluginReference::Url(url) => normalize_reference_id(&url),
        PluginReference::Id(id) => id,
    })
}

/// Keys of the plugins the devfile references, in document order.
///
/// Materializes an empty `components` sequence if the document has none.
pub fn list_desired_plugins(devfile: &mut Devfile) -> Result<Vec<String>, PlughubError> {
    devfile.ensure_components()?;
    Ok(devfile
        .components()?
        .iter()
        .filter_map(reference_key)
        .collect())
}

/// Rewrite the devfile's components so that it references exactly `desired`.
///
/// Non-plugin components keep their positions. A plugin component is kept if
/// its key is still wanted, consuming one occurrence of that key, and dropped
/// otherwise. Keys left unsatisfied are appended in `desired` order, once
/// each, and only if no kept component already references them.
pub fn reconcile(devfile: &mut Devfile, desired: &[String]) -> Result<(), PlughubError> {
    let mut unsatisfied: Vec<&str> = desired.iter().map(String::as_str).collect();
    let existing = devfile.components()?;
    let mut components = Vec::with_capacity(existing.len() + unsatisfied.len());
    let mut present: HashSet<String> = HashSet::new();

    for component in existing {
        let Some(key) = reference_key(&component) else {
            components.push(component);
            continue;
        };
        match unsatisfied.iter().position(|wanted| *wanted == key) {
            Some(index) => {
                unsatisfied.remove(index);
                components.push(component);
                present.insert(key);
            }
            None => debug!(plugin = %key, "removing plugin component"),
        }
    }

    for key in unsatisfied {
        if !present.insert(key.to_string()) {
            continue;
        }
        debug!(plugin = %key, "adding plugin component");
        components.push(build_reference_component(key));
    }

    devfile.set_components(components);
    Ok(())
}
