//! Smart Router manifest builder
//!
//! Writes the VS Code extension manifest (`package.json`) for Smart Router.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to initialize logging: {}", "warning".yellow(), e);
    }
    tracing::debug!("Verbose mode enabled");

    execute_command(cli.command.unwrap_or_default())
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Generate { output } => commands::run_generate(&output),
        Commands::Check { output } => commands::run_check(&output),
        Commands::Diff { output, json } => commands::run_diff(&output, json),
        Commands::Print => commands::run_print(),
        Commands::Validate { json } => commands::run_validate(json),
    }
}
