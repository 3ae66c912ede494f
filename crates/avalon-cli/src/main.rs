//! # avalon CLI entry point
//!
//! Parses command-line arguments, configures tracing from the verbosity
//! count, and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use avalon_cli::schemas::{run_schemas, SchemasArgs};
use avalon_cli::validate::{run_validate, ValidateArgs};

/// Avalon schema toolchain.
///
/// Checks pipeline documents against their versioned schemas and lists
/// the schema versions this build understands.
#[derive(Parser, Debug)]
#[command(name = "avalon", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate JSON documents against their schemas.
    Validate(ValidateArgs),

    /// List registered schema identifiers.
    Schemas(SchemasArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Per-file verdicts are emitted at info level, so validation output
    // is visible by default.
    let filter = match cli.verbose {
        0 => EnvFilter::new("info"),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args),
        Commands::Schemas(args) => run_schemas(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
