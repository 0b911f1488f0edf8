//! Augment CLI
//!
//! Adds recommended entries to pre-commit and dependabot configs, either from
//! a JSON request or straight from a file on disk.

mod catalog;
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
    logging::init(cli.verbose)?;

    match cli.command {
        Commands::Precommit(args) => commands::run_precommit(&args),
        Commands::Dependabot(args) => commands::run_dependabot(&args),
    }
}
