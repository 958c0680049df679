//! CLI argument definitions using clap

use clap::{ArgAction, Parser, Subcommand};

/// Service-locator and layered-configuration core for a Drush-style CLI
#[derive(Parser, Debug)]
#[command(name = "drush")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d, -dd, -ddd)
    #[arg(short = 'd', long = "debug", action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Set a config value in the process layer (highest priority)
    #[arg(short = 'D', long = "define", value_name = "KEY=VALUE", global = true)]
    pub defines: Vec<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the tool version from the drush.info file
    Version,

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Print the resolved writable cache directory
    CacheDir,

    /// Show container state and registered services
    Status,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective flattened configuration
    Show,

    /// Resolve a single dotted key through the overlay
    Get {
        /// Dotted config key, e.g. env.home
        key: String,
    },
}
