//! Layered key-value store with a fixed, explicit priority order
//!
//! Layers are named and ordered; a key is resolved by scanning from the
//! highest-priority layer down and returning the first hit. Priority is
//! part of the contract: `add_layer` always appends ABOVE every
//! existing layer, so bootstrap adds layers lowest-priority first
//! (default, environment, config-file, process).

use std::collections::BTreeMap;

use toml::Value;

use crate::error::{ConfigError, ConfigResult};

struct Layer {
    name: String,
    values: BTreeMap<String, Value>,
}

/// Configuration overlay resolving dotted keys through ordered layers.
#[derive(Default)]
pub struct ConfigOverlay {
    // Lowest priority first; lookups scan in reverse.
    layers: Vec<Layer>,
}

impl ConfigOverlay {
    /// Create an overlay with no layers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named layer at HIGHER priority than all existing layers.
    pub fn add_layer(&mut self, name: &str, values: BTreeMap<String, Value>) {
        self.layers.push(Layer {
            name: name.to_string(),
            values,
        });
    }

    /// Set a single value in the named layer, creating the layer at the
    /// top of the stack if it does not exist yet.
    pub fn set(&mut self, layer_name: &str, key: &str, value: Value) {
        if let Some(layer) = self.layers.iter_mut().find(|l| l.name == layer_name) {
            layer.values.insert(key.to_string(), value);
        } else {
            let mut values = BTreeMap::new();
            values.insert(key.to_string(), value);
            self.add_layer(layer_name, values);
        }
    }

    /// Layer names, lowest priority first.
    pub fn layer_names(&self) -> Vec<&str> {
        self.layers.iter().map(|l| l.name.as_str()).collect()
    }

    /// Resolve `key` through the layers, highest priority first.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.layers.iter().rev().find_map(|l| l.values.get(key))
    }

    /// Whether any layer defines `key`.
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Resolve `key` as a string.
    pub fn get_str(&self, key: &str) -> ConfigResult<&str> {
        let value = self
            .get(key)
            .ok_or_else(|| ConfigError::MissingKey(key.to_string()))?;
        value.as_str().ok_or_else(|| ConfigError::ValueType {
            key: key.to_string(),
            expected: "string",
        })
    }

    /// Resolve `key` as a bool.
    pub fn get_bool(&self, key: &str) -> ConfigResult<bool> {
        let value = self
            .get(key)
            .ok_or_else(|| ConfigError::MissingKey(key.to_string()))?;
        value.as_bool().ok_or_else(|| ConfigError::ValueType {
            key: key.to_string(),
            expected: "boolean",
        })
    }

    /// Effective flattened view: every defined key with the value the
    /// overlay would resolve it to.
    pub fn export(&self) -> BTreeMap<String, Value> {
        let mut merged = BTreeMap::new();
        for layer in &self.layers {
            for (key, value) in &layer.values {
                merged.insert(key.clone(), value.clone());
            }
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(pairs: &[(&str, &str)]) -> BTreeMap<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
            .collect()
    }

    #[test]
    fn given_two_layers_when_get_then_later_added_layer_wins() {
        let mut overlay = ConfigOverlay::new();
        overlay.add_layer("default", layer(&[("env.tmp", "/tmp-default")]));
        overlay.add_layer("environment", layer(&[("env.tmp", "/tmp-real")]));

        assert_eq!(overlay.get_str("env.tmp").unwrap(), "/tmp-real");
    }

    #[test]
    fn given_key_only_in_lowest_layer_when_get_then_falls_through() {
        let mut overlay = ConfigOverlay::new();
        overlay.add_layer("default", layer(&[("env.editor", "vim")]));
        overlay.add_layer("environment", layer(&[("env.tmp", "/tmp")]));

        assert_eq!(overlay.get_str("env.editor").unwrap(), "vim");
    }

    #[test]
    fn given_undefined_key_when_get_str_then_missing_key() {
        let overlay = ConfigOverlay::new();

        let err = overlay.get_str("env.home").unwrap_err();

        assert!(matches!(err, ConfigError::MissingKey(k) if k == "env.home"));
    }

    #[test]
    fn given_bool_key_when_get_str_then_value_type_error() {
        let mut overlay = ConfigOverlay::new();
        let mut values = BTreeMap::new();
        values.insert("env.is-windows".to_string(), Value::Boolean(false));
        overlay.add_layer("environment", values);

        let err = overlay.get_str("env.is-windows").unwrap_err();

        assert!(matches!(err, ConfigError::ValueType { key, .. } if key == "env.is-windows"));
    }

    #[test]
    fn given_set_on_missing_layer_when_set_then_layer_created_on_top() {
        let mut overlay = ConfigOverlay::new();
        overlay.add_layer("environment", layer(&[("env.user", "env-user")]));
        overlay.set("process", "env.user", Value::String("cli-user".into()));

        assert_eq!(overlay.layer_names(), vec!["environment", "process"]);
        assert_eq!(overlay.get_str("env.user").unwrap(), "cli-user");
    }

    #[test]
    fn given_layers_when_export_then_highest_priority_values_survive() {
        let mut overlay = ConfigOverlay::new();
        overlay.add_layer("default", layer(&[("a", "low"), ("b", "only")]));
        overlay.add_layer("process", layer(&[("a", "high")]));

        let merged = overlay.export();

        assert_eq!(merged["a"].as_str(), Some("high"));
        assert_eq!(merged["b"].as_str(), Some("only"));
    }
}
