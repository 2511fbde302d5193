//! # System Score Calculator
//!
//! Computes the 0–100 readiness score for a single system: category
//! baseline plus weighted governance contributions.
//!
//! The v1.0 formula reads exactly two of the seven governance controls —
//! `rms` and `data_gov`. The remaining control points and the
//! exposure/criticality factors in `aira-rules::weights` are published
//! but unconsumed; `formula_reads_only_rms_and_data_gov` below pins this
//! so widening the formula is an explicit engine change.

use aira_core::{AiSystem, RiskCategory};
use aira_rules::weights::{baseline_score, CONTROL_POINTS};

use crate::categorize::categorize_system;

/// Calculate the readiness score for a system.
///
/// A prohibited system scores 0, terminally. Otherwise the category
/// baseline gains `8 × factor(rms)` and `8 × factor(dataGov)` points,
/// rounded to the nearest integer and clamped to 0–100.
pub fn calc_system_score(system: &AiSystem) -> u8 {
    let category = categorize_system(system);
    if category == RiskCategory::Prohibited {
        return 0;
    }

    let governance = &system.governance;
    let mut score = f64::from(baseline_score(category));
    score += f64::from(CONTROL_POINTS.rms) * governance.rms.factor();
    score += f64::from(CONTROL_POINTS.data_gov) * governance.data_gov.factor();

    score.round().clamp(0.0, 100.0) as u8
}
