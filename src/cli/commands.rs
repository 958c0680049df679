//! Command dispatch
//!
//! Commands resolve their collaborators through the global locator;
//! bootstrap in `main.rs` must have installed the container before
//! `execute_command` runs.

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use toml::Value;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::config::DrushConfig;
use crate::error::ConfigError;
use crate::locator;
use crate::version::VersionInfo;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Version) => version(),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => config_show(),
            ConfigCommands::Get { key } => config_get(key),
        },
        Some(Commands::CacheDir) => cache_dir(),
        Some(Commands::Status) => status(),
        Some(Commands::Completion { shell }) => completion(*shell),
        None => Ok(()),
    }
}

#[instrument]
fn version() -> CliResult<()> {
    let info = locator::service::<VersionInfo>("version")?;
    println!("Drush version : {}", info.version()?);
    debug!("major: {}, minor: {}", info.major()?, info.minor()?);
    Ok(())
}

#[instrument]
fn config_show() -> CliResult<()> {
    let config = locator::service::<DrushConfig>("config")?;
    for (key, value) in config.export() {
        println!("{key} = {}", render(&value));
    }
    Ok(())
}

#[instrument]
fn config_get(key: &str) -> CliResult<()> {
    let config = locator::service::<DrushConfig>("config")?;
    let value = config
        .get(key)
        .ok_or_else(|| ConfigError::MissingKey(key.to_string()))?;
    println!("{}", render(value));
    Ok(())
}

#[instrument]
fn cache_dir() -> CliResult<()> {
    let config = locator::service::<DrushConfig>("config")?;
    match config.cache_dir() {
        Some(path) => {
            println!("{}", path.display());
            Ok(())
        }
        None => Err(CliError::CacheUnavailable),
    }
}

#[instrument]
fn status() -> CliResult<()> {
    println!("Container initialized : {}", locator::has_container());
    let container = locator::get_container()?;
    for id in container.ids() {
        println!("  service: {id}");
    }
    if let Ok(logger) = locator::logger() {
        logger.debug("status requested");
    }
    Ok(())
}

fn completion(shell: clap_complete::Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    eprintln!("Generating completion file for {shell:?}...");
    generate(shell, &mut cmd, "drush", &mut io::stdout());
    Ok(())
}

/// Strings print raw; everything else uses the TOML rendering.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
