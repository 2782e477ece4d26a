//! CLI command implementations.

pub mod create_defaults;
pub mod resolve;
pub mod check;
pub mod version;
