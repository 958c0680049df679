//! Environment-derived configuration layer
//!
//! Resolves cwd, home, user, tmp and OS family from the process
//! environment into `env.*` keys. Values that cannot be determined are
//! simply omitted; lookups then surface `MissingKey` instead of a
//! fabricated value.

use std::collections::BTreeMap;
use std::env;

use toml::Value;

/// Build the `environment` layer from the OS.
pub fn environment_layer() -> BTreeMap<String, Value> {
    let mut values = BTreeMap::new();

    if let Ok(cwd) = env::current_dir() {
        values.insert(
            "env.cwd".to_string(),
            Value::String(cwd.to_string_lossy().into_owned()),
        );
    }

    if let Some(dirs) = directories::BaseDirs::new() {
        values.insert(
            "env.home".to_string(),
            Value::String(dirs.home_dir().to_string_lossy().into_owned()),
        );
    }

    // $USER on Unix, $USERNAME on Windows
    if let Ok(user) = env::var("USER").or_else(|_| env::var("USERNAME")) {
        values.insert("env.user".to_string(), Value::String(user));
    }

    values.insert(
        "env.tmp".to_string(),
        Value::String(env::temp_dir().to_string_lossy().into_owned()),
    );

    values.insert(
        "env.is-windows".to_string(),
        Value::Boolean(cfg!(windows)),
    );

    values
}
