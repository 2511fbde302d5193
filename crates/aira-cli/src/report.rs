//! # Report Subcommand
//!
//! Assesses an inventory and renders the Markdown readiness report. The
//! report date defaults to today (UTC) and can be pinned for reproducible
//! output.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;

use aira_engine::assess_org;
use aira_report::render_markdown;
use aira_rules::validate_inventory;

use crate::inventory::load_inventory;

/// Arguments for the `aira report` subcommand.
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Path to the inventory document (YAML or JSON).
    #[arg(value_name = "INVENTORY")]
    pub path: PathBuf,

    /// Write the report to this file instead of stdout.
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Report date (YYYY-MM-DD). Defaults to today (UTC).
    #[arg(long, value_name = "DATE")]
    pub date: Option<NaiveDate>,
}

/// Execute the report subcommand.
///
/// Returns exit code 0 on success, 1 when the inventory fails validation.
pub fn run_report(args: &ReportArgs) -> Result<u8> {
    let inventory = load_inventory(&args.path)?;

    let validation = validate_inventory(&inventory);
    for warning in &validation.warnings {
        tracing::warn!("{warning}");
    }
    if !validation.is_valid() {
        for error in &validation.errors {
            println!("FAIL: {error}");
        }
        return Ok(1);
    }

    let assessment = assess_org(&inventory.org, &inventory.systems);
    let as_of = args.date.unwrap_or_else(|| chrono::Utc::now().date_naive());
    let report = render_markdown(&assessment, as_of);

    match args.output {
        Some(ref path) => {
            std::fs::write(path, &report)
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            println!("Wrote report to {}", path.display());
        }
        None => print!("{report}"),
    }

    Ok(0)
}
