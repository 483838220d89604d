// SPDX-FileCopyrightText: 2026 Plughub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `plughub plugins` command implementation.
//!
//! Rebuilds the plugin cache from the default registry followed by every
//! configured registry, then prints the (optionally filtered) plugin list.

use std::io::IsTerminal;
use std::sync::Arc;
use std::time::Duration;

use plughub_config::{ConfigSettingsProvider, PlughubConfig};
use plughub_core::{CacheObserver, PluginMetadata, PluginRegistry, PlughubError};
use plughub_registry::{HttpTransport, PluginService};

use crate::progress::ProgressObserver;

const DESCRIPTION_WIDTH: usize = 60;

/// Run the `plughub plugins` command.
pub async fn run_plugins(
    config: &PlughubConfig,
    filter: Option<&str>,
    json: bool,
    plain: bool,
) -> Result<(), PlughubError> {
    let transport = HttpTransport::new(
        Duration::from_secs(config.http.timeout_secs),
        &config.http.user_agent,
    )?;
    let service = PluginService::new(
        Arc::new(transport),
        Arc::new(ConfigSettingsProvider::new(config.workspace.clone())),
    );

    let interactive = !json && !plain && std::io::stderr().is_terminal();
    let observer = if interactive {
        ProgressObserver::stderr()
    } else {
        ProgressObserver::hidden()
    };

    let plugins = collect_plugins(&service, &config.registries(), filter, Arc::new(observer)).await?;

    if json {
        let rendered = serde_json::to_string_pretty(&plugins)
            .map_err(|e| PlughubError::Internal(format!("failed to serialize plugins: {e}")))?;
        println!("{rendered}");
    } else {
        let use_color = !plain && std::io::stdout().is_terminal();
        print!("{}", render_table(&plugins, use_color));
    }
    Ok(())
}

/// Rebuild the cache from the default registry plus `extra`, then query it.
pub async fn collect_plugins(
    service: &PluginService,
    extra: &[PluginRegistry],
    filter: Option<&str>,
    observer: Arc<dyn CacheObserver>,
) -> Result<Vec<PluginMetadata>, PlughubError> {
    let default = service.default_registry().await?;
    let mut registries = Vec::with_capacity(extra.len() + 1);
    let is_default = |r: &PluginRegistry| r.uri == default.uri || r.uri == default.public_uri;
    registries.extend(extra.iter().filter(|r| !is_default(r)).cloned());
    registries.insert(0, default);

    service.set_observer(observer);
    let rebuilt = service.rebuild_cache(&registries).await;
    service.clear_observer();
    rebuilt?;

    Ok(service.query_plugins(filter))
}

/// Render plugins as an aligned table with a header row.
pub fn render_table(plugins: &[PluginMetadata], use_color: bool) -> String {
    if plugins.is_empty() {
        return "no plugins found\n".to_string();
    }

    let key_width = plugins
        .iter()
        .map(|p| p.key.len())
        .max()
        .unwrap_or(0)
        .max("KEY".len());
    let type_width = plugins
        .iter()
        .map(|p| p.plugin_type.len())
        .max()
        .unwrap_or(0)
        .max("TYPE".len());

    let mut out = String::new();
    let header = format!("{:<key_width$}  {:<type_width$}  DESCRIPTION", "KEY", "TYPE");
    if use_color {
        use colored::Colorize;
        out.push_str(&header.bold().to_string());
    } else {
        out.push_str(&header);
    }
    out.push('\n');

    for plugin in plugins {
        let description = plugin
            .description
            .as_deref()
            .or(plugin.display_name.as_deref())
            .unwrap_or("");
        let line = format!(
            "{:<key_width$}  {:<type_width$}  {}",
            plugin.key,
            plugin.plugin_type,
            truncate(description, DESCRIPTION_WIDTH)
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn truncate(text: &str, width: usize) -> String {
    let first_line = text.lines().next().unwrap_or("");
    if first_line.chars().count() <= width {
        return first_line.to_string();
    }
    let kept: String = first_line.chars().take(width.saturating_sub(3)).collect();
    format!("{kept}...")
}
