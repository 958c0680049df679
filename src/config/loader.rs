//! Optional config-file layer
//!
//! Loads `$XDG_CONFIG_HOME/drush/drush.toml` (when present) into a
//! single overlay layer, flattening nested tables to dotted keys so
//! `[env] tmp = "..."` resolves as `env.tmp`. String values get tilde
//! and `$VAR` expansion.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use toml::Value;

use crate::error::{ConfigError, ConfigResult};
use crate::infrastructure::FileSystem;

/// Path to the user-level config file, if a config directory can be
/// determined on this platform.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "drush").map(|dirs| dirs.config_dir().join("drush.toml"))
}

/// Load `path` into a flattened layer map.
///
/// Returns `Ok(None)` when the file does not exist; a present but
/// unreadable or unparsable file is an error.
pub fn config_file_layer(
    path: &Path,
    fs: &dyn FileSystem,
) -> ConfigResult<Option<BTreeMap<String, Value>>> {
    if !fs.exists(path) {
        return Ok(None);
    }

    let content = fs.read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table: toml::Table = toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut flat = BTreeMap::new();
    flatten_table("", &table, &mut flat);
    Ok(Some(flat))
}

fn flatten_table(prefix: &str, table: &toml::Table, out: &mut BTreeMap<String, Value>) {
    for (key, value) in table {
        let dotted = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Value::Table(nested) => flatten_table(&dotted, nested, out),
            Value::String(s) => {
                let expanded = shellexpand::tilde(s).into_owned();
                out.insert(dotted, Value::String(expanded));
            }
            other => {
                out.insert(dotted, other.clone());
            }
        }
    }
}
