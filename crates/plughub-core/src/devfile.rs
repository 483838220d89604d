// SPDX-FileCopyrightText: 2026 Plughub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Devfile (workspace configuration document) model.
//!
//! A devfile is kept as the raw YAML mapping it was read from so that fields
//! and component types plughub does not understand round-trip unchanged and
//! in their original order. Only the `components` sequence is interpreted,
//! and within it only components carrying a `plugin` reference.

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use crate::error::PlughubError;

const COMPONENTS: &str = "components";
const PLUGIN: &str = "plugin";

/// How a plugin-reference component names its plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PluginReference {
    /// Absolute location of the plugin's metadata document.
    Url(String),
    /// Short or registry-specific plugin key.
    Id(String),
}

/// A single devfile component, preserved verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Component(Value);

impl Component {
    /// A plugin component referencing its metadata document by `url`.
    pub fn plugin_by_url(url: impl Into<String>) -> Self {
        Self::plugin_with("url", url.into())
    }

    /// A plugin component referencing its plugin by `id`.
    pub fn plugin_by_id(id: impl Into<String>) -> Self {
        Self::plugin_with("id", id.into())
    }

    fn plugin_with(field: &str, value: String) -> Self {
        let mut reference = Mapping::new();
        reference.insert(Value::from(field), Value::from(value));
        let mut component = Mapping::new();
        component.insert(Value::from(PLUGIN), Value::Mapping(reference));
        Component(Value::Mapping(component))
    }

    /// Returns the plugin reference, if this is a plugin-reference component.
    ///
    /// `url` wins over `id`. A `plugin` entry with neither is not a reference.
    pub fn plugin_reference(&self) -> Option<PluginReference> {
        let plugin = self.0.get(PLUGIN)?;
        if let Some(url) = plugin.get("url").and_then(Value::as_str) {
            return Some(PluginReference::Url(url.to_string()));
        }
        plugin
            .get("id")
            .and_then(Value::as_str)
            .map(|id| PluginReference::Id(id.to_string()))
    }

    /// Raw YAML value of this component.
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for Component {
    fn from(value: Value) -> Self {
        Component(value)
    }
}

/// A workspace configuration document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Devfile(Mapping);

impl Devfile {
    /// Parse a devfile from YAML. The top level must be a mapping.
    pub fn from_yaml(content: &str) -> Result<Self, PlughubError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
            .map_err(|e| PlughubError::MalformedDocument(format!("invalid YAML: {e}")))
    }

    /// Serialize the devfile back to YAML.
    pub fn to_yaml(&self) -> Result<String, PlughubError> {
        serde_yaml::to_string(&self.0)
            .map_err(|e| PlughubError::Internal(format!("failed to serialize devfile: {e}")))
    }

    /// Make sure the `components` sequence exists, defaulting it to empty.
    pub fn ensure_components(&mut self) -> Result<(), PlughubError> {
        match self.0.get(COMPONENTS) {
            Some(Value::Sequence(_)) => Ok(()),
            None | Some(Value::Null) => {
                self.0
                    .insert(Value::from(COMPONENTS), Value::Sequence(Vec::new()));
                Ok(())
            }
            Some(_) => Err(PlughubError::MalformedDocument(
                "`components` must be a sequence".to_string(),
            )),
        }
    }

    /// The component sequence in document order. Absent means empty.
    pub fn components(&self) -> Result<Vec<Component>, PlughubError> {
        match self.0.get(COMPONENTS) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Sequence(items)) => Ok(items.iter().cloned().map(Component).collect()),
            Some(_) => Err(PlughubError::MalformedDocument(
                "`components` must be a sequence".to_string(),
            )),
        }
    }

    /// Replace the component sequence, keeping its position among the
    /// document's other fields.
    pub fn set_components(&mut self, components: Vec<Component>) {
        let items = components.into_iter().map(|c| c.0).collect();
        self.0.insert(Value::from(COMPONENTS), Value::Sequence(items));
    }

    /// Look up an arbitrary top-level field.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }
}
