//! `createdefaults` entry point.

use clap::Parser;
use colored::Colorize;
use khulnasoft_types::KhulnasoftError;

mod cli;
mod commands;

use cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.execute().await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        let code = e
            .downcast_ref::<KhulnasoftError>()
            .map(KhulnasoftError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}
