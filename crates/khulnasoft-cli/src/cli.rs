//! CLI structure and command definitions.

use anyhow::Result;
use clap::{Parser, Subcommand};
use khulnasoft_core::config::load_defaults_config;
use khulnasoft_core::log;
use khulnasoft_core::util::process_env;
use khulnasoft_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "createdefaults")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Fill in default secrets for a Khulnasoft container and render its configuration", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file (defaults to $KHULNASOFT_DEFAULTS_CONFIG)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve defaults and emit the rendered configuration on stdout
    #[command(name = "create-defaults")]
    CreateDefaults {
        /// Extra arguments forwarded to the renderer (after `--`)
        #[arg(last = true)]
        renderer_args: Vec<String>,
    },

    /// Resolve defaults and print them without running the renderer
    Resolve {
        /// Output format (env, export, json, yaml)
        #[arg(short, long, default_value = "env")]
        format: OutputFormat,

        /// Replace every value with a placeholder
        #[arg(short, long)]
        redact: bool,
    },

    /// Report weak or inconsistent values
    Check,

    /// Show version information
    Version,
}

impl Cli {
    pub async fn execute(&self) -> Result<()> {
        use crate::commands::*;

        let env = process_env();
        let mut config = load_defaults_config(self.config.as_deref(), &env)?;
        config.log.level = log::effective_level(config.log.level, self.verbose, self.quiet);
        log::init(&config.log)?;

        match &self.command {
            None => {
                create_defaults::execute(&config, &env, &[]).await
            }
            Some(Commands::CreateDefaults { renderer_args }) => {
                create_defaults::execute(&config, &env, renderer_args).await
            }
            Some(Commands::Resolve { format, redact }) => {
                resolve::execute(&config, &env, *format, *redact)
            }
            Some(Commands::Check) => {
                check::execute(&config, &env)
            }
            Some(Commands::Version) => {
                version::execute(&config, self.verbose)
            }
        }
    }
}
