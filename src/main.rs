//! hbsc - a build-time precompiler for Handlebars templates.

mod build;
mod cli;
mod compiler;
mod config;
mod init;
mod logger;
mod utils;

use anyhow::{Result, bail};
use build::precompile_all;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use init::init_config;
use std::path::Path;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));
    let config: &'static Config = Box::leak(Box::new(load_config(cli)?));

    match &cli.command {
        Commands::Init { .. } => init_config(config),
        Commands::Build { .. } => precompile_all(config),
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &'static Cli) -> Result<Config> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        Config::from_path(&config_path)?
    } else {
        Config::default()
    };
    config.update_with_cli(cli);

    // Validate config state based on command
    let config_exists = config.config_path.exists();
    match (cli.is_init(), config_exists) {
        (true, true) => {
            bail!("Config file already exists. Remove it manually or init in a different path.")
        }
        (false, false) => bail!("Config file not found."),
        _ => {}
    }

    if !cli.is_init() {
        config.validate()?;
    }

    Ok(config)
}
