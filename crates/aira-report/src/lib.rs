//! # aira-report — Assessment Export
//!
//! Serializes an [`OrgAssessment`](aira_engine::OrgAssessment) into the
//! two formats the product ships to customers: the raw JSON document and
//! a human-readable Markdown report. PDF rendering stays in the product's
//! presentation layer.
//!
//! Exports are pure functions of the assessment (plus the report date for
//! Markdown), so re-exporting the same assessment always produces the
//! same bytes.

pub mod json;
pub mod markdown;

pub use json::{to_json_pretty, write_json};
pub use markdown::render_markdown;
