//! Command-line definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// claimgate - semantic validation for evidentiary claim lists.
#[derive(Debug, Parser)]
#[command(name = "claimgate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging on stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a claim payload (Gate 1 schema, then Gate 2 semantics)
    Check(CheckArgs),

    /// Print the embedded Gate 1 JSON schema
    Schema,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// Payload file (.json, .yaml, .yml); "-" reads JSON from stdin
    pub input: PathBuf,

    /// Verdict mode: "fail" fails on errors, anything else only reports
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Validator configuration file (YAML or JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per issue plus a summary
    Text,
    /// Machine-readable report
    Json,
}
