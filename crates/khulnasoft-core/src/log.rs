//! Logging setup.
//!
//! Everything is written to stderr: stdout is reserved for the configuration
//! document (or resolved values) that callers capture.

use khulnasoft_types::config::{LogConfig, LogFormat};
use khulnasoft_types::{KhulnasoftError, LogLevel, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the logging system from configuration.
///
/// `RUST_LOG`, when set, takes precedence over the configured level.
pub fn init(config: &LogConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_filter()));

    let builder = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    let installed = match config.format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    installed.map_err(|e| KhulnasoftError::Config(format!("Failed to initialize logging: {}", e)))
}

/// Apply command-line verbosity flags on top of the configured level.
pub fn effective_level(configured: LogLevel, verbose: bool, quiet: bool) -> LogLevel {
    if quiet {
        LogLevel::Error
    } else if verbose {
        configured.max(LogLevel::Debug)
    } else {
        configured
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_level() {
        assert_eq!(effective_level(LogLevel::Info, false, false), LogLevel::Info);
        assert_eq!(effective_level(LogLevel::Info, true, false), LogLevel::Debug);
        assert_eq!(effective_level(LogLevel::Trace, true, false), LogLevel::Trace);
        assert_eq!(effective_level(LogLevel::Debug, true, true), LogLevel::Error);
    }
}
