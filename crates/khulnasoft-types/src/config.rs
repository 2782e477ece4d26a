//! Configuration types and structures.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default prefix for recognized secret variables.
pub const DEFAULT_ENV_PREFIX: &str = "KHULNASOFT_";

/// Default variable naming the provisioning installation root.
pub const DEFAULT_HOME_VAR: &str = "KHULNASOFT_ANSIBLE_HOME";

/// Top-level configuration for the defaults provisioner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Prefix prepended to every recognized secret variable
    pub env_prefix: String,
    /// Variable holding the provisioning installation root
    pub home_var: String,
    /// How to invoke the external renderer
    pub renderer: RendererConfig,
    /// Logging settings
    pub log: LogConfig,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
            home_var: DEFAULT_HOME_VAR.to_string(),
            renderer: RendererConfig::default(),
            log: LogConfig::default(),
        }
    }
}

/// External renderer invocation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Program used to run the entry point
    pub interpreter: String,
    /// Entry point, relative to the installation root
    pub entry_point: PathBuf,
    /// Flag asking the renderer to write its document to stdout
    pub stdout_flag: String,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            interpreter: "python3".to_string(),
            entry_point: PathBuf::from("inventory").join("environ.py"),
            stdout_flag: "--write-to-stdout".to_string(),
        }
    }
}

/// Log configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log level
    pub level: crate::LogLevel,
    /// Log format (pretty, json, compact)
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: crate::LogLevel::Info,
            format: LogFormat::Pretty,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format with colors
    Pretty,
    /// JSON format for machine parsing
    Json,
    /// Compact single-line format
    Compact,
}

impl std::str::FromStr for LogFormat {
    type Err = crate::KhulnasoftError;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            "compact" => Ok(LogFormat::Compact),
            _ => Err(crate::KhulnasoftError::Validation(format!("Invalid log format: {}", s))),
        }
    }
}
