//! # Scoring Weight Tables
//!
//! The published weight tables of scoring engine v1.0: per-category score
//! baselines, per-control point weights, and the exposure/criticality
//! factor tables.
//!
//! The v1.0 score formula consumes only the `rms` and `data_gov` control
//! points. The other five control points and both factor tables are part
//! of the published weight set and are exported here with their declared
//! values, but `calc_system_score` does not read them — tests in
//! `aira-engine` pin the formula to the two-term shape so that wiring in
//! further weights is an explicit engine-version change.

use aira_core::{ExposureLevel, RiskCategory};

/// Baseline score for a category, before governance contributions.
pub fn baseline_score(category: RiskCategory) -> u8 {
    match category {
        RiskCategory::Prohibited => 0,
        RiskCategory::HighRisk => 50,
        RiskCategory::GpaiSystemicRisk => 50,
        RiskCategory::Gpai => 55,
        RiskCategory::LimitedRisk => 65,
        RiskCategory::Minimal => 75,
    }
}

/// Maximum points each governance control can contribute at full maturity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlPoints {
    /// Risk management system.
    pub rms: u8,
    /// Data governance and quality.
    pub data_gov: u8,
    /// Technical documentation.
    pub tech_doc: u8,
    /// Record keeping / logging.
    pub logging: u8,
    /// Human oversight.
    pub oversight: u8,
    /// Post-market monitoring plan.
    pub pmp: u8,
    /// Quality management system.
    pub qms: u8,
}

/// The v1.0 control-point weights.
pub const CONTROL_POINTS: ControlPoints = ControlPoints {
    rms: 8,
    data_gov: 8,
    tech_doc: 8,
    logging: 4,
    oversight: 4,
    pmp: 3,
    qms: 6,
};

/// Rollout-reach factor. Declared in v1.0; not read by the score formula.
pub fn exposure_factor(exposure: ExposureLevel) -> f64 {
    match exposure {
        ExposureLevel::PocPilot => 0.5,
        ExposureLevel::InternalLimited => 1.0,
        ExposureLevel::EnterpriseWide => 2.0,
    }
}

/// Category criticality factor. Declared in v1.0; not read by the score
/// formula.
pub fn criticality_factor(category: RiskCategory) -> f64 {
    match category {
        RiskCategory::Prohibited => 4.0,
        RiskCategory::HighRisk | RiskCategory::GpaiSystemicRisk => 3.0,
        RiskCategory::Gpai => 2.0,
        RiskCategory::LimitedRisk => 1.5,
        RiskCategory::Minimal => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_table_matches_published_values() {
        assert_eq!(baseline_score(RiskCategory::Prohibited), 0);
        assert_eq!(baseline_score(RiskCategory::HighRisk), 50);
        assert_eq!(baseline_score(RiskCategory::GpaiSystemicRisk), 50);
        assert_eq!(baseline_score(RiskCategory::Gpai), 55);
        assert_eq!(baseline_score(RiskCategory::LimitedRisk), 65);
        assert_eq!(baseline_score(RiskCategory::Minimal), 75);
    }

    #[test]
    fn baseline_rises_as_severity_falls() {
        let baselines: Vec<u8> = RiskCategory::all()
            .iter()
            .map(|c| baseline_score(*c))
            .collect();
        for pair in baselines.windows(2) {
            assert!(pair[0] <= pair[1], "baselines out of order: {baselines:?}");
        }
    }

    #[test]
    fn control_points_match_published_values() {
        assert_eq!(CONTROL_POINTS.rms, 8);
        assert_eq!(CONTROL_POINTS.data_gov, 8);
        assert_eq!(CONTROL_POINTS.tech_doc, 8);
        assert_eq!(CONTROL_POINTS.logging, 4);
        assert_eq!(CONTROL_POINTS.oversight, 4);
        assert_eq!(CONTROL_POINTS.pmp, 3);
        assert_eq!(CONTROL_POINTS.qms, 6);
    }

    #[test]
    fn exposure_factors_match_published_values() {
        assert_eq!(exposure_factor(ExposureLevel::PocPilot), 0.5);
        assert_eq!(exposure_factor(ExposureLevel::InternalLimited), 1.0);
        assert_eq!(exposure_factor(ExposureLevel::EnterpriseWide), 2.0);
    }

    #[test]
    fn criticality_factors_match_published_values() {
        assert_eq!(criticality_factor(RiskCategory::Prohibited), 4.0);
        assert_eq!(criticality_factor(RiskCategory::HighRisk), 3.0);
        assert_eq!(criticality_factor(RiskCategory::GpaiSystemicRisk), 3.0);
        assert_eq!(criticality_factor(RiskCategory::Gpai), 2.0);
        assert_eq!(criticality_factor(RiskCategory::LimitedRisk), 1.5);
        assert_eq!(criticality_factor(RiskCategory::Minimal), 1.0);
    }
}
