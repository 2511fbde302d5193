//! # aira-cli — CLI Tool for the AIRA Stack
//!
//! Provides the `aira` command-line interface over the assessment engine.
//!
//! ## Subcommands
//!
//! - `aira validate` — Inventory consistency validation.
//! - `aira assess` — Run the scoring engine and emit the assessment JSON.
//! - `aira report` — Render the Markdown readiness report.
//!
//! Handlers return a process exit code (0 success, 1 validation failure)
//! and reserve `Err` for operational failures — unreadable files,
//! unparseable documents — which the binary reports via `anyhow` context
//! chains.

pub mod assess;
pub mod inventory;
pub mod report;
pub mod validate;
