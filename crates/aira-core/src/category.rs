//! # Risk Category — Single Source of Truth
//!
//! Defines the [`RiskCategory`] enum with the six AI Act risk categories
//! assigned by the categorizer. This is the ONE definition used across the
//! stack; every `match` on `RiskCategory` must be exhaustive, so adding a
//! category forces every consumer — baseline table, obligation builder,
//! criticality factor — to handle it at compile time.
//!
//! Serialized labels are the published German strings of scoring engine
//! v1.0 ("Verboten", "Hochrisiko", ...), preserved for export parity.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;

/// The AI Act risk category assigned to a single AI system.
///
/// Categories are listed in the categorizer's priority order, which is
/// also descending regulatory severity: a prohibited practice outranks a
/// high-risk classification, which outranks the GPAI categories, and so on
/// down to minimal risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskCategory {
    /// Prohibited practice under Art. 5 — use must cease.
    #[serde(rename = "Verboten")]
    Prohibited,
    /// High-risk system via an Annex III use-case domain.
    #[serde(rename = "Hochrisiko")]
    HighRisk,
    /// General-purpose AI model with systemic risk (Art. 55).
    #[serde(rename = "GPAI (systemic risk)")]
    GpaiSystemicRisk,
    /// General-purpose AI model (Art. 53).
    #[serde(rename = "GPAI")]
    Gpai,
    /// Limited risk — transparency obligations only (Art. 50).
    #[serde(rename = "Begrenztes Risiko")]
    LimitedRisk,
    /// Minimal risk — no specific obligations.
    #[serde(rename = "Minimal")]
    Minimal,
}

/// Total number of risk categories. Used for exhaustiveness assertions.
pub const RISK_CATEGORY_COUNT: usize = 6;

impl RiskCategory {
    /// Returns all six categories in priority (descending severity) order.
    pub fn all() -> &'static [RiskCategory] {
        &[
            Self::Prohibited,
            Self::HighRisk,
            Self::GpaiSystemicRisk,
            Self::Gpai,
            Self::LimitedRisk,
            Self::Minimal,
        ]
    }

    /// Returns the published label for this category.
    ///
    /// This must match the serde serialization format; exports produced by
    /// scoring engine v1.0 carry these exact strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prohibited => "Verboten",
            Self::HighRisk => "Hochrisiko",
            Self::GpaiSystemicRisk => "GPAI (systemic risk)",
            Self::Gpai => "GPAI",
            Self::LimitedRisk => "Begrenztes Risiko",
            Self::Minimal => "Minimal",
        }
    }

    /// Whether this category is one of the two GPAI classifications.
    pub fn is_gpai(&self) -> bool {
        matches!(self, Self::Gpai | Self::GpaiSystemicRisk)
    }
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskCategory {
    type Err = ValidationError;

    /// Parse a risk category from its published label.
    ///
    /// Accepts the same labels produced by [`RiskCategory::as_str()`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Verboten" => Ok(Self::Prohibited),
            "Hochrisiko" => Ok(Self::HighRisk),
            "GPAI (systemic risk)" => Ok(Self::GpaiSystemicRisk),
            "GPAI" => Ok(Self::Gpai),
            "Begrenztes Risiko" => Ok(Self::LimitedRisk),
            "Minimal" => Ok(Self::Minimal),
            other => Err(ValidationError::UnknownLabel {
                kind: "risk category",
                label: other.to_string(),
            }),
        }
    }
}
