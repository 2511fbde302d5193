//! # Organisation Aggregation
//!
//! Runs the categorizer, obligation builder, and score calculator over
//! every system in an inventory and folds the results into one
//! [`OrgAssessment`]: the mean readiness score, its band, and the
//! per-system records.
//!
//! Assessments are derived values — nothing here is persisted. The
//! surrounding product serializes the result to JSON or renders it into a
//! report; both read the camelCase field names emitted here.

use serde::{Deserialize, Serialize};

use aira_core::{AiSystem, OrgProfile, RiskCategory, SystemId};
use aira_rules::obligations::{build_obligations, Obligation};

use crate::categorize::categorize_system;
use crate::score::calc_system_score;

/// Version tag stamped into every assessment.
pub const SCORING_VERSION: &str = "1.0";

/// The derived assessment for a single system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemAssessment {
    /// The assessed system's identifier.
    pub system_id: SystemId,
    /// The assessed system's display name.
    pub name: String,
    /// Assigned risk category.
    pub category: RiskCategory,
    /// Readiness score, 0–100.
    pub system_score: u8,
    /// Obligations for this system, in catalog order.
    pub obligations: Vec<Obligation>,
    /// Red flags. Reserved: v1.0 emits the field but never populates it.
    pub red_flags: Vec<String>,
}

/// Organisation-level readiness band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreBand {
    /// Score ≥ 90.
    Ready,
    /// Score ≥ 75.
    #[serde(rename = "Weitgehend bereit")]
    LargelyReady,
    /// Score ≥ 60.
    #[serde(rename = "Teilweise bereit")]
    PartiallyReady,
    /// Score ≥ 40.
    #[serde(rename = "Kritisch")]
    Critical,
    /// Score < 40.
    #[serde(rename = "Nicht bereit")]
    NotReady,
}

impl ScoreBand {
    /// Returns all bands from best to worst.
    pub fn all() -> &'static [ScoreBand] {
        &[
            Self::Ready,
            Self::LargelyReady,
            Self::PartiallyReady,
            Self::Critical,
            Self::NotReady,
        ]
    }

    /// Classify a readiness score. Thresholds are inclusive lower bounds.
    pub fn from_score(score: u8) -> Self {
        if score >= 90 {
            Self::Ready
        } else if score >= 75 {
            Self::LargelyReady
        } else if score >= 60 {
            Self::PartiallyReady
        } else if score >= 40 {
            Self::Critical
        } else {
            Self::NotReady
        }
    }

    /// Returns the published label for this band.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ready => "Ready",
            Self::LargelyReady => "Weitgehend bereit",
            Self::PartiallyReady => "Teilweise bereit",
            Self::Critical => "Kritisch",
            Self::NotReady => "Nicht bereit",
        }
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The derived assessment for a whole organisation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgAssessment {
    /// The organisation profile the assessment was run against.
    pub org: OrgProfile,
    /// Per-system assessments, in inventory order.
    pub systems: Vec<SystemAssessment>,
    /// Rounded mean of the per-system scores; 0 for an empty inventory.
    pub readiness_score: u8,
    /// Band classification of the readiness score.
    pub score_band: ScoreBand,
    /// Cross-system action plan. Reserved: v1.0 emits the field but does
    /// not populate it.
    pub prioritized_actions: Vec<Obligation>,
    /// Engine version that produced this assessment.
    pub scoring_version: String,
}

/// Assess a single system: category, obligations, and score.
pub fn assess_system(system: &AiSystem) -> SystemAssessment {
    let category = categorize_system(system);
    SystemAssessment {
        system_id: system.id.clone(),
        name: system.name.clone(),
        category,
        system_score: calc_system_score(system),
        obligations: build_obligations(category, system),
        red_flags: Vec::new(),
    }
}

/// Assess an organisation's full inventory.
///
/// The readiness score is the rounded arithmetic mean of the per-system
/// scores; an empty inventory is defined as 0 (band: Nicht bereit).
pub fn assess_org(org: &OrgProfile, systems: &[AiSystem]) -> OrgAssessment {
    let assessments: Vec<SystemAssessment> = systems.iter().map(assess_system).collect();

    let readiness_score = if assessments.is_empty() {
        0
    } else {
        let sum: u32 = assessments.iter().map(|a| u32::from(a.system_score)).sum();
        (f64::from(sum) / assessments.len() as f64).round() as u8
    };

    OrgAssessment {
        org: org.clone(),
        systems: assessments,
        readiness_score,
        score_band: ScoreBand::from_score(readiness_score),
        prioritized_actions: Vec::new(),
        scoring_version: SCORING_VERSION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aira_core::{
        AnnexIiiDomain, BiometricFunction, ExposureLevel, Governance, Maturity, OrgSize,
        SystemRole,
    };

    fn org() -> OrgProfile {
        OrgProfile {
            name: "Acme Analytics GmbH".to_string(),
            size: OrgSize::Medium,
            sector: Some("Software".to_string()),
            roles: vec![],
        }
    }

    fn system(id: &str) -> AiSystem {
        AiSystem {
            id: SystemId::new(id).unwrap(),
            name: format!("System {id}"),
            description: None,
            role: SystemRole::Deployer,
            use_cases: vec![],
            annex_iii: vec![],
            biometric_functions: vec![],
            interacts_with_humans: false,
            generates_synthetic_content: false,
            is_gpai_model: false,
            relies_on_gpai_from_others: false,
            exposure: ExposureLevel::PocPilot,
            has_systemic_risk: false,
            governance: Governance::default(),
        }
    }

    #[test]
    fn band_thresholds_are_inclusive_lower_bounds() {
        assert_eq!(ScoreBand::from_score(100), ScoreBand::Ready);
        assert_eq!(ScoreBand::from_score(90), ScoreBand::Ready);
        assert_eq!(ScoreBand::from_score(89), ScoreBand::LargelyReady);
        assert_eq!(ScoreBand::from_score(75), ScoreBand::LargelyReady);
        assert_eq!(ScoreBand::from_score(74), ScoreBand::PartiallyReady);
        assert_eq!(ScoreBand::from_score(60), ScoreBand::PartiallyReady);
        assert_eq!(ScoreBand::from_score(59), ScoreBand::Critical);
        assert_eq!(ScoreBand::from_score(40), ScoreBand::Critical);
        assert_eq!(ScoreBand::from_score(39), ScoreBand::NotReady);
        assert_eq!(ScoreBand::from_score(0), ScoreBand::NotReady);
    }

    #[test]
    fn band_serde_uses_published_labels() {
        for band in ScoreBand::all() {
            let json = serde_json::to_string(band).unwrap();
            assert_eq!(json, format!("\"{}\"", band.as_str()));
        }
    }

    #[test]
    fn empty_inventory_scores_zero_not_ready() {
        let assessment = assess_org(&org(), &[]);
        assert_eq!(assessment.readiness_score, 0);
        assert_eq!(assessment.score_band, ScoreBand::NotReady);
        assert!(assessment.systems.is_empty());
        assert_eq!(assessment.scoring_version, "1.0");
    }

    #[test]
    fn single_minimal_system_sets_org_score() {
        let assessment = assess_org(&org(), &[system("a")]);
        assert_eq!(assessment.readiness_score, 75);
        assert_eq!(assessment.score_band, ScoreBand::LargelyReady);
    }

    #[test]
    fn readiness_is_rounded_mean_of_system_scores() {
        // Minimal (75) + high-risk baseline (50) → mean 62.5 → 63.
        let mut high_risk = system("b");
        high_risk.annex_iii = vec![AnnexIiiDomain::Education];
        let assessment = assess_org(&org(), &[system("a"), high_risk]);
        assert_eq!(assessment.systems[0].system_score, 75);
        assert_eq!(assessment.systems[1].system_score, 50);
        assert_eq!(assessment.readiness_score, 63);
        assert_eq!(assessment.score_band, ScoreBand::PartiallyReady);
    }

    #[test]
    fn per_system_records_carry_category_and_obligations() {
        let mut s = system("a");
        s.biometric_functions = vec![BiometricFunction::SensitiveCategorisation];
        let assessment = assess_org(&org(), &[s]);
        let record = &assessment.systems[0];
        assert_eq!(record.category, RiskCategory::Prohibited);
        assert_eq!(record.system_score, 0);
        assert_eq!(record.obligations.len(), 1);
        assert!(record.red_flags.is_empty());
    }

    #[test]
    fn prioritized_actions_are_reserved_and_empty() {
        let mut s = system("a");
        s.annex_iii = vec![AnnexIiiDomain::Employment];
        let assessment = assess_org(&org(), &[s]);
        assert!(assessment.prioritized_actions.is_empty());
    }

    #[test]
    fn gpai_example_from_engine_documentation() {
        // GPAI model, no systemic risk, rms=3, dataGov=3 → 55 + 8 + 8 = 71.
        let mut s = system("a");
        s.is_gpai_model = true;
        s.governance.rms = Maturity::Managed;
        s.governance.data_gov = Maturity::Managed;
        let assessment = assess_org(&org(), &[s]);
        assert_eq!(assessment.systems[0].category, RiskCategory::Gpai);
        assert_eq!(assessment.systems[0].system_score, 71);
        assert_eq!(assessment.readiness_score, 71);
        assert_eq!(assessment.score_band, ScoreBand::PartiallyReady);
    }

    #[test]
    fn assessment_serializes_with_camel_case_keys() {
        let assessment = assess_org(&org(), &[system("a")]);
        let json = serde_json::to_string(&assessment).unwrap();
        assert!(json.contains("\"readinessScore\""));
        assert!(json.contains("\"scoreBand\""));
        assert!(json.contains("\"prioritizedActions\""));
        assert!(json.contains("\"scoringVersion\":\"1.0\""));
        assert!(json.contains("\"systemId\""));
        assert!(json.contains("\"systemScore\""));
        assert!(json.contains("\"redFlags\""));
    }

    #[test]
    fn assessment_json_roundtrip_is_deep_equal() {
        let mut gpai = system("a");
        gpai.is_gpai_model = true;
        let mut high_risk = system("b");
        high_risk.annex_iii = vec![AnnexIiiDomain::Biometrics];
        let assessment = assess_org(&org(), &[gpai, high_risk]);

        let json = serde_json::to_string(&assessment).unwrap();
        let parsed: OrgAssessment = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, assessment);
    }
}
