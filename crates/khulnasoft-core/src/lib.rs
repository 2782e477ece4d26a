//! # Khulnasoft Core
//!
//! Core utilities shared by the container defaults tooling.
//!
//! This crate provides:
//!
//! - **Configuration**: layered configuration (defaults, file, environment)
//! - **Logging**: `tracing` subscriber setup that keeps stdout clean
//! - **Process Execution**: child processes with environment overlays and
//!   output redaction
//! - **Data**: YAML loading and deep merging
//!
//! ## Example
//!
//! ```no_run
//! use khulnasoft_core::config::load_defaults_config;
//!
//! let env = khulnasoft_core::util::process_env();
//! let config = load_defaults_config(None, &env)?;
//! khulnasoft_core::log::init(&config.log)?;
//! # Ok::<(), khulnasoft_core::KhulnasoftError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod log;
pub mod util;

// Re-export commonly used items
pub use config::{Config, ConfigLayer};
pub use khulnasoft_types::{KhulnasoftError, Result};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "createdefaults";
