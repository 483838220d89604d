// SPDX-FileCopyrightText: 2026 Plughub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `plughub config` command implementation.

use clap::Subcommand;
use plughub_config::PlughubConfig;
use plughub_core::PlughubError;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Validate configuration. Errors are rendered before this runs.
    Check,
    /// Print the effective configuration as TOML.
    Show,
}

pub fn run_config(config: &PlughubConfig, action: &ConfigAction) -> Result<(), PlughubError> {
    match action {
        ConfigAction::Check => {
            println!(
                "configuration is valid ({} additional registr{})",
                config.registries.len(),
                if config.registries.len() == 1 { "y" } else { "ies" }
            );
        }
        ConfigAction::Show => {
            let rendered = config.to_toml().map_err(|e| {
                PlughubError::Internal(format!("failed to render configuration: {e}"))
            })?;
            print!("{rendered}");
        }
    }
    Ok(())
}
