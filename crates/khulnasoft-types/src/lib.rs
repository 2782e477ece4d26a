//! # Khulnasoft Types
//!
//! Core types, traits, and enums shared across the Khulnasoft container
//! defaults crates.
//!
//! - The secret kinds recognized in a container's environment
//! - Log level, log format, and output format enums
//! - The entropy and renderer seams used by the provisioner
//! - Error types and result aliases
//!
//! ## Example
//!
//! ```
//! use khulnasoft_types::SecretKind;
//!
//! assert_eq!(SecretKind::Password.env_var("KHULNASOFT_"), "KHULNASOFT_PASSWORD");
//! assert_eq!(SecretKind::ALL.len(), 6);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod enums;
pub mod traits;
pub mod config;

// Re-export common types for convenience
pub use errors::{KhulnasoftError, Result};
pub use enums::{LogLevel, OutputFormat, SecretKind, ValueSource};
pub use traits::{ConfigRenderer, EntropySource, RenderedDocument};
