use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use colored::Colorize;
use toml::Value;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use drush::cli::{execute_command, Cli, CliError, CliResult};
use drush::config::{config_file_layer, default_config_path, environment_layer, ConfigOverlay};
use drush::infrastructure::{FileSystem, RealFileSystem};
use drush::version::default_info_path;
use drush::{locator, DrushConfig, Logger, ServiceContainer, TracingLogger, VersionInfo};

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    if let Err(e) = bootstrap(&cli).and_then(|_| execute_command(&cli)) {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(e.exit_code());
    }
}

/// Build the configuration overlay and the service container, then
/// install the container in the global locator. Runs once, before any
/// command executes; everything after this resolves services through
/// `locator`.
fn bootstrap(cli: &Cli) -> CliResult<()> {
    let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);

    // Layers lowest priority first: default, environment, config-file,
    // process (-D overrides).
    let mut overlay = ConfigOverlay::new();
    overlay.add_layer("default", default_layer());
    overlay.add_layer("environment", environment_layer());
    if let Some(path) = default_config_path() {
        if let Some(layer) = config_file_layer(&path, fs.as_ref())? {
            overlay.add_layer("config-file", layer);
        }
    }
    for define in &cli.defines {
        let (key, value) = define
            .split_once('=')
            .ok_or_else(|| CliError::InvalidArgs(format!("expected KEY=VALUE, got '{define}'")))?;
        overlay.set("process", key.trim(), Value::String(value.trim().to_string()));
    }

    let container = Arc::new(ServiceContainer::new());
    container.register("config", DrushConfig::new(overlay, fs.clone()));
    container.register_arc::<dyn Logger>("logger", Arc::new(TracingLogger));
    let info_path = default_info_path().unwrap_or_else(|| PathBuf::from("drush.info"));
    container.register("version", VersionInfo::new(info_path, fs));

    locator::set_container(container);
    Ok(())
}

/// Compiled defaults, the lowest-priority layer.
fn default_layer() -> BTreeMap<String, Value> {
    let mut values = BTreeMap::new();
    values.insert("editor".to_string(), Value::String("vim".to_string()));
    values
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}
