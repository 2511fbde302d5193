//! # aira CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros for argument parsing.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use aira_cli::assess::{run_assess, AssessArgs};
use aira_cli::report::{run_report, ReportArgs};
use aira_cli::validate::{run_validate, ValidateArgs};

/// AIRA — AI-Act Readiness Assessment
///
/// Validates AI-system inventories, runs the readiness scoring engine,
/// and exports assessment documents and reports.
#[derive(Parser, Debug)]
#[command(name = "aira", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate an inventory document without assessing it.
    Validate(ValidateArgs),

    /// Assess an inventory and emit the assessment JSON.
    Assess(AssessArgs),

    /// Assess an inventory and render the Markdown readiness report.
    Report(ReportArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args),
        Commands::Assess(args) => run_assess(&args),
        Commands::Report(args) => run_report(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
