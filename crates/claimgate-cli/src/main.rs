//! claimgate CLI - validate evidentiary claim payloads.
//!
//! Exit status: 0 when the verdict is ok, 1 when it is not, 2 when the
//! payload cannot be read or is rejected by the Gate 1 schema.

mod cli;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use claimgate_core::{
    check_payload, validate_with_config, ClaimSet, GateError, Mode, ValidationResult,
    ValidatorConfig, CLAIMS_SCHEMA_JSON,
};
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cli::{CheckArgs, Cli, Command};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Command::Check(args) => check(args),
        Command::Schema => {
            println!("{}", CLAIMS_SCHEMA_JSON.trim_end());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn check(args: CheckArgs) -> Result<ExitCode> {
    let mut config = match &args.config {
        Some(path) => ValidatorConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ValidatorConfig::default(),
    };
    if let Some(mode) = args.mode.as_deref() {
        config.mode = Mode::from(mode);
    }
    debug!(mode = %config.mode, "configuration resolved");

    let outcome = load_and_validate(&args.input, &config, std::io::stdin().lock());
    let status = exit_status(&outcome);

    match outcome {
        Ok(result) => {
            info!(
                ok = result.ok,
                errors = result.error_count(),
                warnings = result.warn_count(),
                "validation complete"
            );
            println!("{}", report::render(&result, config.mode, args.format)?);
        }
        Err(GateError::Schema(errors)) => eprintln!("{}", report::render_rejection(&errors)),
        Err(e) => {
            return Err(e).with_context(|| format!("reading {}", args.input.display()));
        }
    }

    Ok(ExitCode::from(status))
}

/// Exit status for a check: 0 ok, 1 not ok, 2 when no verdict was reached.
fn exit_status(outcome: &Result<ValidationResult, GateError>) -> u8 {
    match outcome {
        Ok(result) if result.ok => 0,
        Ok(_) => 1,
        Err(_) => 2,
    }
}

/// Load `input` and run both gates. `-` reads a JSON payload from `stdin`.
fn load_and_validate(
    input: &Path,
    config: &ValidatorConfig,
    mut stdin: impl Read,
) -> Result<ValidationResult, GateError> {
    if input == Path::new("-") {
        let mut buffer = String::new();
        stdin.read_to_string(&mut buffer)?;
        let payload: serde_json::Value = serde_json::from_str(&buffer)?;
        return check_payload(payload, config);
    }

    let set = ClaimSet::from_file(input)?;
    Ok(validate_with_config(&set.claims, config))
}
