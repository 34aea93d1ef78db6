//! Canopy CLI Binary
//!
//! Command-line interface for the canopy tree engine.

use anyhow::Context;
use canopy::config::{CanopyConfig, ConfigLoader};
use canopy::logging::init_logging;
use canopy::tooling::cli::{Cli, CliContext, Commands};
use clap::Parser;
use std::io::IsTerminal;
use std::process;

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {:#}", e);
            process::exit(1);
        }
    };

    if let Err(e) = init_logging(Some(&config.logging)) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    if let Err(e) = run(&cli, &config) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

/// Load layered configuration and fold command-line overrides into it
fn load_config(cli: &Cli) -> anyhow::Result<CanopyConfig> {
    let mut config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => ConfigLoader::load().context("failed to load configuration")?,
    };

    if let Some(store) = &cli.store {
        config.storage.store_path = Some(store.clone());
    }
    if cli.ephemeral {
        config.storage.ephemeral = true;
    }
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(format) = &cli.log_format {
        config.logging.format = format.clone();
    }
    if let Some(output) = &cli.log_output {
        config.logging.output = output.clone();
    }
    if let Some(file) = &cli.log_file {
        config.logging.file = Some(file.clone());
    }
    if cli.no_color {
        config.logging.color = false;
    }
    Ok(config)
}

fn run(cli: &Cli, config: &CanopyConfig) -> anyhow::Result<()> {
    let color = !cli.no_color && std::io::stdout().is_terminal();
    let mut context = CliContext::new(config, color).context("failed to open tree session")?;

    if let Commands::Shell = cli.command {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        context.run_shell(stdin.lock(), stdout.lock())?;
        return Ok(());
    }

    let output = context.execute(&cli.command)?;
    println!("{}", output.trim_end());
    Ok(())
}
