//! Configuration: layered overlay plus environment-aware accessors
//!
//! `ConfigOverlay` is the generic layered store; `DrushConfig` wraps it
//! with the handful of derived accessors the rest of the tool uses,
//! most notably writable cache-directory resolution.

pub mod environment;
pub mod loader;
pub mod overlay;

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use toml::Value;
use tracing::debug;

use crate::error::ConfigResult;
use crate::infrastructure::FileSystem;

pub use environment::environment_layer;
pub use loader::{config_file_layer, default_config_path};
pub use overlay::ConfigOverlay;

/// Accessors for common config keys over a layered overlay.
pub struct DrushConfig {
    overlay: ConfigOverlay,
    fs: Arc<dyn FileSystem>,
}

impl DrushConfig {
    pub fn new(overlay: ConfigOverlay, fs: Arc<dyn FileSystem>) -> Self {
        Self { overlay, fs }
    }

    /// The underlying overlay, for generic key lookups.
    pub fn overlay(&self) -> &ConfigOverlay {
        &self.overlay
    }

    /// Generic lookup forwarded to the overlay.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.overlay.get(key)
    }

    /// Effective flattened configuration, for `config show`.
    pub fn export(&self) -> BTreeMap<String, Value> {
        self.overlay.export()
    }

    pub fn cwd(&self) -> ConfigResult<&str> {
        self.overlay.get_str("env.cwd")
    }

    pub fn home(&self) -> ConfigResult<&str> {
        self.overlay.get_str("env.home")
    }

    pub fn user(&self) -> ConfigResult<&str> {
        self.overlay.get_str("env.user")
    }

    pub fn is_windows(&self) -> ConfigResult<bool> {
        self.overlay.get_bool("env.is-windows")
    }

    pub fn tmp(&self) -> ConfigResult<&str> {
        self.overlay.get_str("env.tmp")
    }

    /// Resolve a writable cache directory, creating it if needed.
    ///
    /// Candidates are probed in priority order: `<home>/.drush/cache`
    /// first (stable across sessions), then `<tmp>/drush-<user>/cache`
    /// as the fallback for restricted-home environments. The first
    /// candidate whose directory can be created (or already exists)
    /// wins. Caching is best-effort: when no candidate is usable, or
    /// the inputs for every candidate are missing from the overlay,
    /// the result is `None`, never an error.
    pub fn cache_dir(&self) -> Option<PathBuf> {
        let mut candidates: Vec<PathBuf> = Vec::new();
        if let Ok(home) = self.home() {
            candidates.push(PathBuf::from(home).join(".drush").join("cache"));
        }
        if let (Ok(tmp), Ok(user)) = (self.tmp(), self.user()) {
            candidates.push(PathBuf::from(tmp).join(format!("drush-{user}")).join("cache"));
        }

        for candidate in candidates {
            match self.fs.create_dir_all(&candidate) {
                Ok(()) => return Some(candidate),
                Err(e) => {
                    debug!("cache candidate {} unusable: {}", candidate.display(), e);
                }
            }
        }
        None
    }
}
