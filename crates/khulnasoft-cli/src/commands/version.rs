//! Show version information.

use anyhow::Result;
use colored::Colorize;
use khulnasoft_types::config::DefaultsConfig;

pub fn execute(config: &DefaultsConfig, verbose: bool) -> Result<()> {
    println!("{} {}", khulnasoft_core::APP_NAME.cyan().bold(), khulnasoft_core::VERSION);

    if verbose {
        println!("\nDefaults:");
        println!("  Variable prefix: {}", config.env_prefix);
        println!("  Installation root: ${}", config.home_var);
        println!(
            "  Renderer: {} {} {}",
            config.renderer.interpreter,
            config.renderer.entry_point.display(),
            config.renderer.stdout_flag
        );
        println!("  Target: {}-{}", std::env::consts::ARCH, std::env::consts::OS);
    }

    Ok(())
}
