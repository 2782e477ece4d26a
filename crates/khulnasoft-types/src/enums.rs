//! Common enumerations used throughout the defaults tooling.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::errors::{KhulnasoftError, Result};

/// Log level enumeration for the logging system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    /// No logging
    None,
    /// Error messages only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Detailed trace messages
    Trace,
}

impl LogLevel {
    /// Directive understood by `tracing_subscriber::EnvFilter`.
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::None => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl FromStr for LogLevel {
    type Err = KhulnasoftError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "NONE" | "OFF" => Ok(LogLevel::None),
            "ERROR" => Ok(LogLevel::Error),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "INFO" => Ok(LogLevel::Info),
            "DEBUG" => Ok(LogLevel::Debug),
            "TRACE" => Ok(LogLevel::Trace),
            _ => Err(KhulnasoftError::Validation(format!("Invalid log level: {}", s))),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::None => write!(f, "NONE"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Trace => write!(f, "TRACE"),
        }
    }
}

/// Secret-bearing variables the provisioner recognizes.
///
/// The environment variable name is the configured prefix followed by
/// [`SecretKind::suffix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecretKind {
    /// HTTP event collector bearer token
    HecToken,
    /// Administrator password
    Password,
    /// Indexer cluster secret
    IdxcSecret,
    /// Indexer cluster pass4SymmKey
    IdxcPass4SymmKey,
    /// Search head cluster secret
    ShcSecret,
    /// Search head cluster pass4SymmKey
    ShcPass4SymmKey,
}

impl SecretKind {
    /// Every recognized kind, in resolution order.
    pub const ALL: [SecretKind; 6] = [
        SecretKind::HecToken,
        SecretKind::Password,
        SecretKind::IdxcSecret,
        SecretKind::IdxcPass4SymmKey,
        SecretKind::ShcSecret,
        SecretKind::ShcPass4SymmKey,
    ];

    /// Variable name without the prefix.
    pub fn suffix(&self) -> &'static str {
        match self {
            SecretKind::HecToken => "HEC_TOKEN",
            SecretKind::Password => "PASSWORD",
            SecretKind::IdxcSecret => "IDXC_SECRET",
            SecretKind::IdxcPass4SymmKey => "IDXC_PASS4SYMMKEY",
            SecretKind::ShcSecret => "SHC_SECRET",
            SecretKind::ShcPass4SymmKey => "SHC_PASS4SYMMKEY",
        }
    }

    /// Full environment variable name under `prefix`.
    pub fn env_var(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self.suffix())
    }

    /// The other half of a cluster pair, if this kind belongs to one.
    pub fn partner(&self) -> Option<SecretKind> {
        match self {
            SecretKind::IdxcSecret => Some(SecretKind::IdxcPass4SymmKey),
            SecretKind::IdxcPass4SymmKey => Some(SecretKind::IdxcSecret),
            SecretKind::ShcSecret => Some(SecretKind::ShcPass4SymmKey),
            SecretKind::ShcPass4SymmKey => Some(SecretKind::ShcSecret),
            SecretKind::HecToken | SecretKind::Password => None,
        }
    }
}

impl fmt::Display for SecretKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecretKind::HecToken => write!(f, "hec-token"),
            SecretKind::Password => write!(f, "password"),
            SecretKind::IdxcSecret => write!(f, "idxc-secret"),
            SecretKind::IdxcPass4SymmKey => write!(f, "idxc-pass4symmkey"),
            SecretKind::ShcSecret => write!(f, "shc-secret"),
            SecretKind::ShcPass4SymmKey => write!(f, "shc-pass4symmkey"),
        }
    }
}

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    /// Supplied by the operator under this exact variable
    Operator,
    /// Copied from the operator-supplied partner of a cluster pair
    Paired,
    /// Freshly generated from the secure random source
    Generated,
}

impl fmt::Display for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueSource::Operator => write!(f, "operator"),
            ValueSource::Paired => write!(f, "paired"),
            ValueSource::Generated => write!(f, "generated"),
        }
    }
}

/// Output formats for printing resolved values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `NAME=value` lines
    #[default]
    Env,
    /// `export NAME='value'` lines suitable for `eval` in a shell
    Export,
    /// JSON object
    Json,
    /// YAML mapping
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = KhulnasoftError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "env" => Ok(OutputFormat::Env),
            "export" | "shell" => Ok(OutputFormat::Export),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => Err(KhulnasoftError::Validation(format!("Invalid output format: {}", s))),
        }
    }
}
