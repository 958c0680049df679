//! CLI-level errors (wraps core errors)

use thiserror::Error;

use crate::error::{ConfigError, LocatorError, VersionError};

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Locator(#[from] LocatorError),

    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Version(#[from] VersionError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("no usable cache directory")]
    CacheUnavailable,
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::CacheUnavailable => crate::exitcode::UNAVAILABLE,
            CliError::Locator(_) => crate::exitcode::SOFTWARE,
            CliError::Config(e) => match e {
                ConfigError::Io { .. } => crate::exitcode::IOERR,
                _ => crate::exitcode::CONFIG,
            },
            CliError::Version(e) => match e {
                VersionError::Io { .. } => crate::exitcode::NOINPUT,
                _ => crate::exitcode::DATAERR,
            },
        }
    }
}
