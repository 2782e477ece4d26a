//! Common utility functions.

pub mod data;
pub mod process;

// Re-export commonly used items
pub use data::{deep_merge, load_yaml, load_yaml_file};
pub use process::{process_env, redact_secrets, run_async_with_env};
