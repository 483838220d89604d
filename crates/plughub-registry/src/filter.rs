// SPDX-FileCopyrightText: 2026 Plughub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Default keyword filter for plugin queries.
//!
//! Expressions are whitespace-separated terms; double quotes group words into
//! one term. `type:<t>`, `category:<c>` and `publisher:<p>` restrict on that
//! field (case-insensitive equality). Every other term must appear,
//! case-insensitively, in the plugin's name, display name, title,
//! description, or publisher.

use plughub_core::{PluginFilter, PluginMetadata};

/// Keyword and field filter over plugin metadata.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordFilter;

enum Term {
    Type(String),
    Category(String),
    Publisher(String),
    Text(String),
}

impl Term {
    fn parse(raw: &str) -> Self {
        let lower = raw.to_lowercase();
        if let Some(value) = lower.strip_prefix("type:") {
            Term::Type(value.to_string())
        } else if let Some(value) = lower.strip_prefix("category:") {
            Term::Category(value.to_string())
        } else if let Some(value) = lower.strip_prefix("publisher:") {
            Term::Publisher(value.to_string())
        } else {
            Term::Text(lower)
        }
    }

    fn matches(&self, plugin: &PluginMetadata) -> bool {
        match self {
            Term::Type(t) => plugin.plugin_type.to_lowercase() == *t,
            Term::Category(c) => plugin
                .category
                .as_deref()
                .is_some_and(|category| category.to_lowercase() == *c),
            Term::Publisher(p) => plugin.publisher.to_lowercase() == *p,
            Term::Text(text) => [
                Some(plugin.name.as_str()),
                plugin.display_name.as_deref(),
                plugin.title.as_deref(),
                plugin.description.as_deref(),
                Some(plugin.publisher.as_str()),
            ]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(text.as_str())),
        }
    }
}

/// Split on whitespace outside double quotes, dropping the quotes.
fn tokenize(expression: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    for c in expression.chars() {
        match c {
            '"' => quoted = !quoted,
            c if c.is_whitespace() && !quoted => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

impl PluginFilter for KeywordFilter {
    fn filter(&self, plugins: Vec<PluginMetadata>, expression: &str) -> Vec<PluginMetadata> {
        let terms: Vec<Term> = tokenize(expression).iter().map(|t| Term::parse(t)).collect();
        if terms.is_empty() {
            return plugins;
        }
        plugins
            .into_iter()
            .filter(|plugin| terms.iter().all(|term| term.matches(plugin)))
            .collect()
    }
}
