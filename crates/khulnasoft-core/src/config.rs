//! Configuration management.
//!
//! Configuration values are resolved in this priority order:
//! 1. Environment variables (`KHULNASOFT_DEFAULTS_*`)
//! 2. Values loaded from a YAML file
//! 3. Default values
//!
//! ## Example
//!
//! ```
//! use std::collections::HashMap;
//! use khulnasoft_core::config::load_defaults_config;
//!
//! let mut env = HashMap::new();
//! env.insert("KHULNASOFT_DEFAULTS_INTERPRETER".to_string(), "python2".to_string());
//!
//! let config = load_defaults_config(None, &env).unwrap();
//! assert_eq!(config.renderer.interpreter, "python2");
//! assert_eq!(config.home_var, "KHULNASOFT_ANSIBLE_HOME");
//! ```

use crate::util::data::{deep_merge, load_yaml_file, set_path};
use khulnasoft_types::config::{DefaultsConfig, LogFormat};
use khulnasoft_types::{KhulnasoftError, LogLevel, Result};
use serde::Deserialize;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

/// Variable naming an optional configuration file.
pub const CONFIG_FILE_VAR: &str = "KHULNASOFT_DEFAULTS_CONFIG";

/// Environment overrides: variable name and the dotted key it sets.
pub const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("KHULNASOFT_DEFAULTS_ENV_PREFIX", "env_prefix"),
    ("KHULNASOFT_DEFAULTS_HOME_VAR", "home_var"),
    ("KHULNASOFT_DEFAULTS_INTERPRETER", "renderer.interpreter"),
    ("KHULNASOFT_DEFAULTS_ENTRY_POINT", "renderer.entry_point"),
    ("KHULNASOFT_DEFAULTS_LOG_LEVEL", "log.level"),
    ("KHULNASOFT_DEFAULTS_LOG_FORMAT", "log.format"),
];

/// Configuration layer priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfigLayer {
    /// Default values
    Default = 0,
    /// Values loaded from file
    Loaded = 1,
    /// Values from environment variables
    Environment = 2,
}

/// Layered configuration store.
///
/// Each layer is a JSON value; the merged view deep-merges them from lowest
/// to highest priority.
#[derive(Clone, Debug, Default)]
pub struct Config {
    layers: BTreeMap<ConfigLayer, Value>,
}

impl Config {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration from a file path.
    ///
    /// A missing file yields an empty configuration; a file that exists but
    /// does not parse is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = Self::new();

        if path.exists() {
            let value = load_yaml_file(path).map_err(|e| {
                KhulnasoftError::Config(format!("Failed to load {}: {}", path.display(), e))
            })?;
            if !value.is_object() {
                return Err(KhulnasoftError::Config(format!(
                    "{} must contain a mapping at the top level",
                    path.display()
                )));
            }
            config.layers.insert(ConfigLayer::Loaded, value);
        }

        Ok(config)
    }

    /// Replace the default layer.
    pub fn with_defaults(mut self, defaults: Value) -> Self {
        self.layers.insert(ConfigLayer::Default, defaults);
        self
    }

    /// Set a value in the environment layer.
    pub fn set_env(&mut self, key: &str, value: Value) -> Result<()> {
        let layer = self
            .layers
            .entry(ConfigLayer::Environment)
            .or_insert_with(|| Value::Object(Default::default()));
        set_path(layer, key, value)
    }

    /// Get merged data from all layers.
    pub fn merged_data(&self) -> Value {
        self.layers
            .values()
            .cloned()
            .fold(Value::Object(Default::default()), deep_merge)
    }

    /// Deserialize the merged view into a typed configuration.
    pub fn deserialize<T: for<'de> Deserialize<'de>>(&self) -> Result<T> {
        serde_json::from_value(self.merged_data())
            .map_err(|e| KhulnasoftError::Config(format!("Invalid configuration: {}", e)))
    }
}

/// Load the provisioner configuration.
///
/// `path` takes precedence over a file named by `KHULNASOFT_DEFAULTS_CONFIG`
/// in `env`. Overrides from [`ENV_OVERRIDES`] are applied on top.
pub fn load_defaults_config(path: Option<&Path>, env: &HashMap<String, String>) -> Result<DefaultsConfig> {
    let file = path
        .map(Path::to_path_buf)
        .or_else(|| env.get(CONFIG_FILE_VAR).filter(|v| !v.is_empty()).map(PathBuf::from));

    let mut config = match file {
        Some(file) => Config::load(file)?,
        None => Config::new(),
    };
    config = config.with_defaults(serde_json::to_value(DefaultsConfig::default())?);

    for (var, key) in ENV_OVERRIDES {
        if let Some(raw) = env.get(*var).filter(|v| !v.is_empty()) {
            config.set_env(key, override_value(key, raw)?)?;
        }
    }

    config.deserialize()
}

// Enumerated keys are parsed up front so a bad override names its variable.
fn override_value(key: &str, raw: &str) -> Result<Value> {
    let value = match key {
        "log.level" => serde_json::to_value(raw.parse::<LogLevel>()?)?,
        "log.format" => serde_json::to_value(raw.parse::<LogFormat>()?)?,
        _ => Value::String(raw.to_string()),
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_layers() {
        let mut config = Config::new().with_defaults(serde_json::json!({"key": "default_value"}));
        config.layers.insert(ConfigLayer::Loaded, serde_json::json!({"key": "loaded_value"}));

        assert_eq!(config.merged_data()["key"], "loaded_value");

        config.set_env("key", serde_json::json!("env_value")).unwrap();
        assert_eq!(config.merged_data()["key"], "env_value");
    }

    #[test]
    fn test_defaults_without_file_or_env() {
        let config = load_defaults_config(None, &HashMap::new()).unwrap();
        assert_eq!(config, DefaultsConfig::default());
    }

    #[test]
    fn test_file_then_env_priority() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "env_prefix: SPLUNK_\nrenderer:\n  interpreter: python2\nlog:\n  level: DEBUG").unwrap();

        let mut env = HashMap::new();
        env.insert("KHULNASOFT_DEFAULTS_INTERPRETER".to_string(), "sh".to_string());
        env.insert("KHULNASOFT_DEFAULTS_LOG_FORMAT".to_string(), "JSON".to_string());

        let config = load_defaults_config(Some(file.path()), &env).unwrap();
        assert_eq!(config.env_prefix, "SPLUNK_");
        assert_eq!(config.renderer.interpreter, "sh");
        assert_eq!(config.renderer.stdout_flag, "--write-to-stdout");
        assert_eq!(config.log.level, LogLevel::Debug);
        assert_eq!(config.log.format, LogFormat::Json);
    }

    #[test]
    fn test_config_file_from_env_var() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "home_var: OPT_ANSIBLE").unwrap();

        let mut env = HashMap::new();
        env.insert(CONFIG_FILE_VAR.to_string(), file.path().display().to_string());

        let config = load_defaults_config(None, &env).unwrap();
        assert_eq!(config.home_var, "OPT_ANSIBLE");
    }

    #[test]
    fn test_missing_file_is_ignored() {
        let config = load_defaults_config(Some(Path::new("/nonexistent/defaults.yml")), &HashMap::new()).unwrap();
        assert_eq!(config.env_prefix, "KHULNASOFT_");
    }

    #[test]
    fn test_malformed_file_is_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "renderer: [unterminated").unwrap();

        let err = load_defaults_config(Some(file.path()), &HashMap::new()).unwrap_err();
        assert!(matches!(err, KhulnasoftError::Config(_)));
    }

    #[test]
    fn test_bad_log_level_override() {
        let mut env = HashMap::new();
        env.insert("KHULNASOFT_DEFAULTS_LOG_LEVEL".to_string(), "chatty".to_string());

        assert!(load_defaults_config(None, &env).is_err());
    }
}
