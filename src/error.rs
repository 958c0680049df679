//! Error types for the locator, config, and version layers
//!
//! Each layer gets its own enum so callers can pattern-match on the
//! failure kind instead of inspecting strings.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from the global service locator and the container it guards.
///
/// `Uninitialized` signals a bootstrap ordering bug (something asked for
/// a service before `locator::set_container` ran) and should not be
/// caught routinely. `ServiceNotFound` is expected absence and is fine
/// to handle.
#[derive(Error, Debug)]
pub enum LocatorError {
    #[error("service container is not initialized; locator::set_container must be called during bootstrap")]
    Uninitialized,

    #[error("service not found: {0}")]
    ServiceNotFound(String),

    #[error("service '{id}' is registered with a different type")]
    ServiceType { id: String },
}

/// Errors from the configuration overlay and its derived accessors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing config key: {0}")]
    MissingKey(String),

    #[error("config value for '{key}' is not a {expected}")]
    ValueType { key: String, expected: &'static str },

    #[error("cannot read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config file {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Errors from reading the version info file.
#[derive(Error, Debug)]
pub enum VersionError {
    #[error("cannot read info file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("info file {path} has no drush_version key")]
    MissingKey { path: PathBuf },

    #[error("malformed version string: {0}")]
    Malformed(String),
}

/// Result type for locator operations.
pub type LocatorResult<T> = Result<T, LocatorError>;

/// Result type for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
