//! CLI argument parsing using clap derive

use std::path::PathBuf;

use augment_core::Ecosystem;
use clap::{Args, Parser, Subcommand};

/// Interval used when `--ecosystem` omits one
pub const DEFAULT_INTERVAL: &str = "daily";

/// Augment - add recommended entries to pre-commit and dependabot configs
#[derive(Parser, Debug)]
#[command(name = "augment")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Add missing hooks to a pre-commit config
    ///
    /// Examples:
    ///   augment precommit --file .pre-commit-config.yaml -l python -l go
    ///   augment precommit --request request.json
    ///   cat request.json | augment precommit --request -
    Precommit(PrecommitArgs),

    /// Add missing update entries to a dependabot config
    ///
    /// Examples:
    ///   augment dependabot --file .github/dependabot.yml -e npm:/app -e github-actions:/:weekly
    ///   augment dependabot --request request.json
    Dependabot(DependabotArgs),
}

/// Where the document comes from and where the result goes
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct InputArgs {
    /// JSON request file, or `-` for stdin; the JSON response goes to stdout
    #[arg(
        long,
        value_name = "FILE|-",
        required_unless_present = "file",
        conflicts_with = "file"
    )]
    pub request: Option<PathBuf>,

    /// Config file to augment; a missing file counts as empty
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Write the result back to --file instead of printing it
    #[arg(long, requires = "file", conflicts_with = "request")]
    pub write: bool,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct PrecommitArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Detected language (repeatable, in detection order)
    #[arg(short, long = "language", value_name = "LANGUAGE", conflicts_with = "request")]
    pub languages: Vec<String>,

    /// Hook catalog
    #[arg(
        long,
        env = "PRECOMMIT_CONFIG",
        default_value = "./precommit-config.yml",
        value_name = "PATH"
    )]
    pub catalog: PathBuf,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct DependabotArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Detected ecosystem as `ecosystem:directory[:interval]` (repeatable)
    #[arg(
        short,
        long = "ecosystem",
        value_name = "ECO:DIR[:INTERVAL]",
        value_parser = parse_ecosystem,
        conflicts_with = "request"
    )]
    pub ecosystems: Vec<Ecosystem>,
}

/// Parse `ecosystem:directory[:interval]`
fn parse_ecosystem(value: &str) -> Result<Ecosystem, String> {
    let mut parts = value.splitn(3, ':');
    let ecosystem = parts.next().unwrap_or_default();
    let directory = parts.next().unwrap_or_default();
    let interval = parts.next().unwrap_or(DEFAULT_INTERVAL);
    if ecosystem.is_empty() || directory.is_empty() || interval.is_empty() {
        return Err(format!(
            "expected ecosystem:directory[:interval], got '{value}'"
        ));
    }
    Ok(Ecosystem::new(ecosystem, directory, interval))
}
