// Copyright 2025 The SIAKAD Project Authors.
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
use log::{debug, info};
use std::path::PathBuf;

use siakad_server::config::{load_config_file, SiakadConfig};
use siakad_server::SiakadServer;

#[derive(Parser)]
#[command(name = "siakad-server")]
#[command(about = "REST gateway over the SIAKAD academic database")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_version = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nrustc: ",
    env!("SIAKAD_RUSTC_VERSION"),
))]
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
    Run {
        /// Path to the configuration file
        #[arg(short, long, default_value = "config/server.yaml")]
        config: PathBuf,

        /// Override the server port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Validate a configuration file without starting the server
    Validate {
        /// Path to the configuration file to validate
        #[arg(short, long, default_value = "config/server.yaml")]
        config: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run { config, port }) => run_server(config, port).await,
        Some(Commands::Validate { config }) => validate_config(config),
        None => run_server(cli.config, cli.port).await,
    }
}

/// Run the SIAKAD Server
async fn run_server(config_path: PathBuf, port_override: Option<u16>) -> Result<()> {
    // Load .env from the config file's directory before interpolation runs
    let env_file_loaded = if let Some(config_dir) = config_path.parent() {
        let env_file = config_dir.join(".env");
        if env_file.exists() {
            match dotenvy::from_path(&env_file) {
                Ok(_) => true,
                Err(e) => {
                    eprintln!("Warning: Failed to load .env file: {e}");
                    false
                }
            }
        } else {
            false
        }
    } else {
        false
    };

    let server = SiakadServer::new(config_path.clone(), port_override)?;

    // RUST_LOG set by the user wins over the configured log level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&server.config().server.log_level),
    )
    .init();

    info!("Starting SIAKAD Server");
    debug!("Debug logging is enabled");

    if env_file_loaded {
        info!("Loaded environment variables from .env file");
    }
    info!("Config file: {}", config_path.display());
    info!("Port: {}", server.config().server.port);

    server.run().await
}

/// Validate a configuration file
fn validate_config(config_path: PathBuf) -> Result<()> {
    println!("Validating configuration: {}", config_path.display());
    println!();

    if !config_path.exists() {
        println!(
            "[ERROR] Configuration file not found: {}",
            config_path.display()
        );
        std::process::exit(1);
    }

    let config: SiakadConfig = match load_config_file(&config_path) {
        Ok(config) => config,
        Err(e) => {
            println!("[ERROR] Configuration is invalid:");
            println!("  {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        println!("[ERROR] Configuration is invalid:");
        println!("  {e}");
        std::process::exit(1);
    }

    println!("[OK] Configuration file is valid");
    println!();
    println!("Summary:");
    println!("  Host: {}", config.server.host);
    println!("  Port: {}", config.server.port);
    println!("  Log level: {}", config.server.log_level);
    println!("  Database: {}", config.database.redact_url());
    println!("  Max connections: {}", config.database.max_connections);

    Ok(())
}
