// SPDX-FileCopyrightText: 2026 Plughub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! plughub - browse plugin registries and edit a devfile's plugin list.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;
use plughub_config::PlughubConfig;

mod config;
mod devfile;
mod plugins;
mod progress;

/// Browse plugin registries and edit a devfile's plugin list.
#[derive(Parser, Debug)]
#[command(name = "plughub", version, about, long_about = None)]
struct Cli {
    /// Load configuration from this file instead of the standard locations.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rebuild the plugin cache from all registries and list the plugins.
    Plugins {
        /// Filter expression, e.g. `type:"VS Code extension"` or `java`.
        #[arg(long)]
        filter: Option<String>,
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
        /// Disable colors and the progress bar.
        #[arg(long)]
        plain: bool,
    },
    /// Read or edit the devfile's plugin list.
    Devfile {
        /// Devfile to operate on. Defaults to `devfile.path` from config.
        #[arg(long, value_name = "FILE")]
        path: Option<PathBuf>,
        #[command(subcommand)]
        action: devfile::DevfileAction,
    },
    /// Inspect configuration.
    Config {
        #[command(subcommand)]
        action: config::ConfigAction,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => plughub_config::load_and_validate_path(path),
        None => plughub_config::load_and_validate(),
    };
    let config: PlughubConfig = match loaded {
        Ok(config) => config,
        Err(errors) => {
            plughub_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.log.level);

    let result = match cli.command {
        Commands::Plugins {
            filter,
            json,
            plain,
        } => plugins::run_plugins(&config, filter.as_deref(), json, plain).await,
        Commands::Devfile { path, action } => {
            let path = path.unwrap_or_else(|| config.devfile.path.clone());
            devfile::run_devfile(&path, &action).await
        }
        Commands::Config { action } => config::run_config(&config, &action),
    };

    if let Err(e) = result {
        eprintln!("{}: {e}", "error".red());
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays clean for table and JSON output.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("plughub={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
