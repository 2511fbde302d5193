//! # AI System Record
//!
//! The per-system record the engine assesses: declared use-case flags,
//! Annex III domains, biometric functions, GPAI flags, exposure, and the
//! embedded governance self-assessment.
//!
//! ## Wire Format
//!
//! Field names are camelCase and a few carry the upstream acronym casing
//! (`annexIII`, `isGPAIModel`, `reliesOnGPAIFromOthers`) so serialized
//! systems are interchangeable with scoring engine v1.0 documents.
//!
//! ## Defaults
//!
//! All list fields and boolean flags default to empty/`false` when absent
//! from an inventory document. A system declared with nothing but id, name,
//! role, exposure, and governance is a valid minimal-risk record.

use serde::{Deserialize, Serialize};

use crate::annex::{AnnexIiiDomain, BiometricFunction};
use crate::identity::SystemId;
use crate::maturity::Maturity;

/// The role under which a single system is operated.
///
/// Unlike [`crate::OrgRole`], which lists every role the organisation
/// holds, each system is either provided or deployed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SystemRole {
    /// The organisation provides this system.
    Provider,
    /// The organisation deploys this system.
    Deployer,
}

impl SystemRole {
    /// Returns the role label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Provider => "Provider",
            Self::Deployer => "Deployer",
        }
    }
}

impl std::fmt::Display for SystemRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How widely the system is rolled out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExposureLevel {
    /// Proof of concept or pilot.
    #[serde(rename = "PoC/Pilot")]
    PocPilot,
    /// Limited internal use.
    #[serde(rename = "Intern begrenzt")]
    InternalLimited,
    /// Company-wide or customer-facing.
    #[serde(rename = "Unternehmensweit/Kundenseitig")]
    EnterpriseWide,
}

impl ExposureLevel {
    /// Returns all exposure levels in ascending reach order.
    pub fn all() -> &'static [ExposureLevel] {
        &[Self::PocPilot, Self::InternalLimited, Self::EnterpriseWide]
    }

    /// Returns the published label for this level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PocPilot => "PoC/Pilot",
            Self::InternalLimited => "Intern begrenzt",
            Self::EnterpriseWide => "Unternehmensweit/Kundenseitig",
        }
    }
}

impl std::fmt::Display for ExposureLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Completeness of supplier-provided documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SupplierDocs {
    /// Complete documentation on file.
    #[serde(rename = "vollständig")]
    Complete,
    /// Partial documentation.
    #[serde(rename = "teilweise")]
    Partial,
    /// No supplier documentation.
    #[default]
    #[serde(rename = "keine")]
    Missing,
}

impl SupplierDocs {
    /// Returns the published label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Complete => "vollständig",
            Self::Partial => "teilweise",
            Self::Missing => "keine",
        }
    }
}

impl std::fmt::Display for SupplierDocs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Governance maturity self-assessment for one system.
///
/// Seven 0–3 controls plus supplier-documentation completeness. The v1.0
/// score formula reads only `rms` and `data_gov`; the remaining controls
/// are collected and exported but not yet scored (see `aira-rules`
/// control-point table).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Governance {
    /// Risk management system (Art. 9).
    pub rms: Maturity,
    /// Data governance and quality (Art. 10).
    pub data_gov: Maturity,
    /// Technical documentation (Art. 11).
    pub tech_doc: Maturity,
    /// Record keeping / logging (Art. 12).
    pub logging: Maturity,
    /// Human oversight (Art. 14).
    pub oversight: Maturity,
    /// Post-market monitoring plan (Art. 72).
    pub pmp: Maturity,
    /// Quality management system (Art. 17).
    pub qms: Maturity,
    /// Supplier documentation completeness.
    #[serde(default)]
    pub supplier_docs: SupplierDocs,
    /// Age of the newest supporting evidence, in months.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence_fresh_months: Option<u32>,
}

/// A single AI system in the organisation's inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiSystem {
    /// Unique identifier within the inventory.
    pub id: SystemId,
    /// Display name.
    pub name: String,
    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the organisation provides or deploys this system.
    #[serde(rename = "providerOrDeployer")]
    pub role: SystemRole,
    /// Declared use cases, free text.
    #[serde(default)]
    pub use_cases: Vec<String>,
    /// Annex III high-risk domains this system touches. Default: empty.
    #[serde(rename = "annexIII", default)]
    pub annex_iii: Vec<AnnexIiiDomain>,
    /// Biometric functions this system performs. Default: empty.
    #[serde(default)]
    pub biometric_functions: Vec<BiometricFunction>,
    /// Whether the system interacts directly with natural persons.
    #[serde(default)]
    pub interacts_with_humans: bool,
    /// Whether the system generates synthetic content.
    #[serde(default)]
    pub generates_synthetic_content: bool,
    /// Whether the system is itself a general-purpose AI model.
    #[serde(rename = "isGPAIModel", default)]
    pub is_gpai_model: bool,
    /// Whether the system builds on a third-party GPAI model.
    #[serde(rename = "reliesOnGPAIFromOthers", default)]
    pub relies_on_gpai_from_others: bool,
    /// Rollout reach.
    pub exposure: ExposureLevel,
    /// Systemic-risk designation for GPAI models. Default: `false`.
    #[serde(default)]
    pub has_systemic_risk: bool,
    /// Governance maturity self-assessment.
    pub governance: Governance,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_system(id: &str) -> AiSystem {
        AiSystem {
            id: SystemId::new(id).unwrap(),
            name: "Support-Chatbot".to_string(),
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
    fn exposure_labels_roundtrip_serde() {
        for level in ExposureLevel::all() {
            let json = serde_json::to_string(level).unwrap();
            assert_eq!(json, format!("\"{}\"", level.as_str()));
            let parsed: ExposureLevel = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, *level);
        }
    }

    #[test]
    fn supplier_docs_default_is_missing() {
        assert_eq!(SupplierDocs::default(), SupplierDocs::Missing);
    }

    #[test]
    fn governance_default_is_all_absent() {
        let g = Governance::default();
        assert_eq!(g.rms, Maturity::Absent);
        assert_eq!(g.qms, Maturity::Absent);
        assert_eq!(g.supplier_docs, SupplierDocs::Missing);
        assert!(g.evidence_fresh_months.is_none());
    }

    #[test]
    fn system_serializes_with_upstream_field_names() {
        let system = minimal_system("sys-1");
        let json = serde_json::to_string(&system).unwrap();
        assert!(json.contains("\"providerOrDeployer\""));
        assert!(json.contains("\"annexIII\""));
        assert!(json.contains("\"isGPAIModel\""));
        assert!(json.contains("\"reliesOnGPAIFromOthers\""));
        assert!(json.contains("\"interactsWithHumans\""));
        assert!(json.contains("\"useCases\""));
    }

    #[test]
    fn system_roundtrip() {
        let mut system = minimal_system("sys-1");
        system.annex_iii = vec![AnnexIiiDomain::Employment];
        system.is_gpai_model = true;
        system.governance.rms = Maturity::Defined;
        let json = serde_json::to_string(&system).unwrap();
        let parsed: AiSystem = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, system);
    }

    #[test]
    fn absent_flags_default_to_false_and_lists_to_empty() {
        let json = r#"{
            "id": "sys-2",
            "name": "Prognosemodell",
            "providerOrDeployer": "Provider",
            "exposure": "Intern begrenzt",
            "governance": {
                "rms": 0, "dataGov": 0, "techDoc": 0, "logging": 0,
                "oversight": 0, "pmp": 0, "qms": 0
            }
        }"#;
        let parsed: AiSystem = serde_json::from_str(json).unwrap();
        assert!(parsed.annex_iii.is_empty());
        assert!(parsed.biometric_functions.is_empty());
        assert!(parsed.use_cases.is_empty());
        assert!(!parsed.interacts_with_humans);
        assert!(!parsed.is_gpai_model);
        assert!(!parsed.has_systemic_risk);
        assert_eq!(parsed.governance.supplier_docs, SupplierDocs::Missing);
    }

    #[test]
    fn governance_uses_camel_case_keys() {
        let g = Governance {
            data_gov: Maturity::Managed,
            ..Governance::default()
        };
        let json = serde_json::to_string(&g).unwrap();
        assert!(json.contains("\"dataGov\":3"));
        assert!(json.contains("\"techDoc\":0"));
        assert!(json.contains("\"supplierDocs\":\"keine\""));
    }
}
