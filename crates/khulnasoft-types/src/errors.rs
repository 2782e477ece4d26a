//! Error types for the container defaults tooling.

use thiserror::Error;

/// The main error type for defaults provisioning.
///
/// Only `Bootstrap` and `RendererExit` are expected in practice: operator
/// supplied values are accepted as-is and generation does not fail short of
/// the operating system refusing to hand out entropy.
#[derive(Error, Debug)]
pub enum KhulnasoftError {
    /// The installation root is missing or the renderer entry point is unreachable
    #[error("Bootstrap error: {0}")]
    Bootstrap(String),

    /// Configuration-related error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The renderer could not be started or its output could not be read
    #[error("Renderer error: {0}")]
    Renderer(String),

    /// The renderer ran but exited unsuccessfully
    #[error("Renderer exited with status {code}")]
    RendererExit {
        /// Exit code reported by the child (-1 when killed by a signal)
        code: i32,
        /// The child's stderr, already redacted
        diagnostics: String,
    },

    /// The secure random source failed
    #[error("Entropy error: {0}")]
    Entropy(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal bug - should never happen in production
    #[error("Bug detected: {0}\n\nThis is an internal error. Please report this issue at:\nhttps://github.com/khulnasoft/docker-khulnasoft/issues")]
    Bug(String),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl KhulnasoftError {
    /// Process exit code to report for this error.
    ///
    /// A failing renderer's own status is passed through so callers of the
    /// container entrypoint see what the renderer reported.
    pub fn exit_code(&self) -> i32 {
        match self {
            KhulnasoftError::RendererExit { code, .. } if *code > 0 => *code,
            _ => 1,
        }
    }
}

/// A specialized Result type for defaults provisioning.
pub type Result<T> = std::result::Result<T, KhulnasoftError>;

/// Helper macro to create and return a KhulnasoftError::Bug
///
/// This should be used for conditions that should never occur
/// in normal operation.
///
/// # Example
///
/// ```ignore
/// if pair_mismatch {
///     bug!("pair diverged after reconciliation: {}", kind);
/// }
/// ```
#[macro_export]
macro_rules! bug {
    ($msg:expr) => {
        return Err($crate::KhulnasoftError::Bug($msg.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::KhulnasoftError::Bug(format!($fmt, $($arg)*)))
    };
}

/// Helper macro to bail out with a KhulnasoftError
///
/// This is used for expected error conditions.
///
/// # Example
///
/// ```ignore
/// if home.is_empty() {
///     bail!(Bootstrap, "{} is not set", var);
/// }
/// ```
#[macro_export]
macro_rules! bail {
    ($variant:ident, $msg:expr) => {
        return Err($crate::KhulnasoftError::$variant($msg.to_string()))
    };
    ($variant:ident, $fmt:expr, $($arg:tt)*) => {
        return Err($crate::KhulnasoftError::$variant(format!($fmt, $($arg)*)))
    };
    ($msg:expr) => {
        return Err($crate::KhulnasoftError::Other($msg.to_string()))
    };
}
