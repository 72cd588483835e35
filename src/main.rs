// Copyright 2025 The Drasi Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Allow println! in main.rs for CLI user-facing output (validate command)
#![allow(clippy::print_stdout)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use company_api::{load_config_file, save_config_file, CompanyServer, ServerConfig, StoreConfig};

#[derive(Parser)]
#[command(name = "company-api")]
#[command(about = "REST API for a paginated collection of companies")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the configuration file
    #[arg(short, long, default_value = "config/server.yaml", global = true)]
    config: PathBuf,

    /// Override the server port
    #[arg(short, long, global = true)]
    port: Option<u16>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the server (default if no subcommand specified)
    Run,

    /// Validate a configuration file without starting the server
    Validate {
        /// Show resolved configuration with environment variables expanded
        #[arg(long)]
        show_resolved: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Validate { show_resolved }) => {
            load_env_file(&cli.config);
            validate_config(&cli.config, show_resolved)
        }
        Some(Commands::Run) | None => run_server(cli.config, cli.port).await,
    }
}

/// Load a `.env` file next to the config file, if there is one.
///
/// Returns whether a file was loaded.
fn load_env_file(config_path: &Path) -> bool {
    let Some(config_dir) = config_path.parent() else {
        return false;
    };
    let env_file = config_dir.join(".env");
    if !env_file.exists() {
        return false;
    }
    match dotenvy::from_path(&env_file) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("Warning: Failed to load .env file: {e}");
            false
        }
    }
}

fn init_logging(default_level: &str) {
    // RUST_LOG, when set, takes precedence over the configured level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

/// Run the company API server
async fn run_server(config_path: PathBuf, port_override: Option<u16>) -> Result<()> {
    let env_file_loaded = load_env_file(&config_path);

    let (mut config, created) = if config_path.exists() {
        (load_config_file(&config_path)?, false)
    } else {
        let mut default_config = ServerConfig::default();
        if let Some(port) = port_override {
            default_config.port = port;
        }
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        save_config_file(&default_config, &config_path)?;
        (default_config, true)
    };

    init_logging(&config.log_level);

    if created {
        warn!(
            "Config file '{}' not found. Created default configuration.",
            config_path.display()
        );
    }
    if env_file_loaded {
        info!("Loaded environment variables from .env file");
    }
    info!("Config file: {}", config_path.display());

    if let Some(port) = port_override {
        config.port = port;
    }
    info!("Port: {}", config.port);
    debug!("Server configuration: {config:?}");

    let server = CompanyServer::new(&config).await?;
    server.run().await
}

/// Validate a configuration file
fn validate_config(config_path: &Path, show_resolved: bool) -> Result<()> {
    println!("Validating configuration: {}", config_path.display());
    println!();

    if !config_path.exists() {
        println!(
            "[ERROR] Configuration file not found: {}",
            config_path.display()
        );
        std::process::exit(1);
    }

    match load_config_file(config_path) {
        Ok(config) => {
            println!("[OK] Configuration file is valid");
            println!();

            println!("Summary:");
            println!("  Store: {}", config.store.kind());
            println!("  Base URL: {}", config.resolved_base_url());

            if show_resolved {
                println!();
                println!("Resolved server settings:");
                println!("  Host: {}", config.host);
                println!("  Port: {}", config.port);
                println!("  Log Level: {}", config.log_level);
                if let StoreConfig::File { path, database } = &config.store {
                    println!("  Store File: {}", path.join(format!("{database}.json")).display());
                }
                println!(
                    "  Seed: default {}, max {}",
                    config.seed.default_amount, config.seed.max_amount
                );
            }

            Ok(())
        }
        Err(e) => {
            println!("[ERROR] Configuration is invalid:");
            println!("  {e}");
            std::process::exit(1);
        }
    }
}
