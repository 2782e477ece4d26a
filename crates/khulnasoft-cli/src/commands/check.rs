//! Report weak or inconsistent values.

use anyhow::{bail, Result};
use colored::Colorize;
use khulnasoft_defaults::{resolve, validate, DefaultsInput, SystemEntropy};
use khulnasoft_types::config::DefaultsConfig;
use std::collections::HashMap;

pub fn execute(config: &DefaultsConfig, env: &HashMap<String, String>) -> Result<()> {
    let input = DefaultsInput::from_env_map(&config.env_prefix, env);
    let resolved = resolve(input, &mut SystemEntropy)?;
    let summary = validate(&resolved);

    println!("{} defaults under prefix {}", "Checking".cyan().bold(), config.env_prefix.cyan());
    println!("\nSecret Status:");
    for (kind, value) in resolved.entries() {
        println!("  {:<30} {}", kind.env_var(&config.env_prefix), value.source);
    }
    println!("  Valid: {}", summary.ok.len().to_string().green());
    println!("  Warnings: {}", summary.warnings.len().to_string().yellow());
    println!("  Errors: {}", summary.errors.len().to_string().red());

    if !summary.warnings.is_empty() {
        println!("\nWarnings:");
        for (kind, warnings) in &summary.warnings {
            for warning in warnings {
                println!("  {} {}: {}", "!".yellow(), kind, warning);
            }
        }
    }

    if !summary.errors.is_empty() {
        println!("\nErrors:");
        for (kind, errors) in &summary.errors {
            for error in errors {
                println!("  {} {}: {}", "✗".red(), kind, error);
            }
        }
    }

    if summary.is_all_valid() {
        println!("\n{} All defaults are usable", "✓".green().bold());
    } else {
        bail!("Some defaults are empty or inconsistent");
    }

    Ok(())
}
