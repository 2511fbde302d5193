//! # Assess Subcommand
//!
//! Runs the scoring engine over a validated inventory and emits the
//! assessment JSON — pretty-printed by default, to stdout or a file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use aira_engine::assess_org;
use aira_report::to_json_pretty;
use aira_rules::validate_inventory;

use crate::inventory::load_inventory;

/// Arguments for the `aira assess` subcommand.
#[derive(Args, Debug)]
pub struct AssessArgs {
    /// Path to the inventory document (YAML or JSON).
    #[arg(value_name = "INVENTORY")]
    pub path: PathBuf,

    /// Write the assessment to this file instead of stdout.
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed.
    #[arg(long)]
    pub compact: bool,
}

/// Execute the assess subcommand.
///
/// Returns exit code 0 on success, 1 when the inventory fails validation.
pub fn run_assess(args: &AssessArgs) -> Result<u8> {
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
    tracing::info!(
        systems = assessment.systems.len(),
        readiness_score = assessment.readiness_score,
        band = %assessment.score_band,
        "assessment complete"
    );

    let json = if args.compact {
        serde_json::to_string(&assessment).context("failed to serialize assessment")?
    } else {
        to_json_pretty(&assessment).context("failed to serialize assessment")?
    };

    match args.output {
        Some(ref path) => {
            std::fs::write(path, format!("{json}\n"))
                .with_context(|| format!("failed to write assessment to {}", path.display()))?;
            println!("Wrote assessment to {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(0)
}
