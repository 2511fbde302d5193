//! # Obligation Catalog
//!
//! Maps a risk category (plus the independent GPAI flag) to the list of
//! regulatory obligations a system owner must address. The catalog is
//! static lookup data; the only inputs are the category and the system's
//! GPAI flag.

use serde::{Deserialize, Serialize};

use aira_core::{AiSystem, RiskCategory};

use crate::deadlines::{
    GPAI_DEADLINE, HIGH_RISK_DEADLINE, PROHIBITIONS_DEADLINE, TRANSPARENCY_DEADLINE,
};

/// A single regulatory obligation.
///
/// Optional fields are omitted from JSON when absent, matching the
/// engine's v1.0 export format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Obligation {
    /// What must be done.
    pub label: String,
    /// Legal reference (article or regime name).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_ref: Option<String>,
    /// ISO-8601 date by which the obligation applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    /// Example evidence artifacts. Reserved; the v1.0 catalog does not
    /// populate it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence_examples: Option<Vec<String>>,
}

impl Obligation {
    fn new(label: &str, legal_ref: &str, deadline: &str) -> Self {
        Self {
            label: label.to_string(),
            legal_ref: Some(legal_ref.to_string()),
            deadline: Some(deadline.to_string()),
            evidence_examples: None,
        }
    }
}

/// Build the ordered obligation list for a system in the given category.
///
/// A prohibited system has exactly one obligation — cease use — and the
/// catalog short-circuits: no further obligations are appended, not even
/// the GPAI one. For every other category the GPAI transparency obligation
/// is appended independently of the category switch whenever the system is
/// a GPAI model, so it combines with high-risk or limited-risk duties.
pub fn build_obligations(category: RiskCategory, system: &AiSystem) -> Vec<Obligation> {
    let mut obligations = Vec::new();

    match category {
        RiskCategory::Prohibited => {
            obligations.push(Obligation::new(
                "Nutzung unverzüglich einstellen (Verbotene Praktik)",
                "AI Act – Unacceptable risk",
                PROHIBITIONS_DEADLINE,
            ));
            return obligations;
        }
        RiskCategory::HighRisk => {
            obligations.push(Obligation::new(
                "Risikomanagementsystem implementieren",
                "Art. 9",
                HIGH_RISK_DEADLINE,
            ));
            obligations.push(Obligation::new(
                "Data-Governance/Qualität",
                "Art. 10",
                HIGH_RISK_DEADLINE,
            ));
            obligations.push(Obligation::new(
                "Technische Dokumentation",
                "Art. 11",
                HIGH_RISK_DEADLINE,
            ));
        }
        RiskCategory::LimitedRisk => {
            obligations.push(Obligation::new(
                "Transparenzhinweis bei Interaktion",
                "Art. 50",
                TRANSPARENCY_DEADLINE,
            ));
        }
        // GPAI categories carry no category-specific entry here; their
        // duties come from the flag-driven append below.
        RiskCategory::GpaiSystemicRisk | RiskCategory::Gpai | RiskCategory::Minimal => {}
    }

    if system.is_gpai_model {
        obligations.push(Obligation::new(
            "GPAI-Transparenzdoku/Model Card",
            "Art. 53/55",
            GPAI_DEADLINE,
        ));
    }

    obligations
}
