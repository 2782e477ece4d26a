//! Print resolved defaults without running the renderer.

use anyhow::Result;
use khulnasoft_defaults::output::render;
use khulnasoft_defaults::{resolve, DefaultsInput, SystemEntropy};
use khulnasoft_types::config::DefaultsConfig;
use khulnasoft_types::OutputFormat;
use std::collections::HashMap;

pub fn execute(
    config: &DefaultsConfig,
    env: &HashMap<String, String>,
    format: OutputFormat,
    redact: bool,
) -> Result<()> {
    let input = DefaultsInput::from_env_map(&config.env_prefix, env);
    let resolved = resolve(input, &mut SystemEntropy)?;

    tracing::debug!(?format, redact, "Printing resolved defaults");
    print!("{}", render(&resolved, &config.env_prefix, format, redact)?);

    Ok(())
}
