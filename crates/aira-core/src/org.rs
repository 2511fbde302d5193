//! # Organisation Profile
//!
//! The organisation-level record the wizard collects before any systems
//! are declared: name, size band, sector, and the AI Act value-chain roles
//! the organisation holds.

use serde::{Deserialize, Serialize};

/// Organisation size band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrgSize {
    /// Micro or small enterprise.
    #[serde(rename = "Kleinst/klein")]
    Small,
    /// Medium enterprise.
    #[serde(rename = "mittel")]
    Medium,
    /// Large enterprise.
    #[serde(rename = "groß")]
    Large,
}

impl OrgSize {
    /// Returns the published label for this size band.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "Kleinst/klein",
            Self::Medium => "mittel",
            Self::Large => "groß",
        }
    }
}

impl std::fmt::Display for OrgSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An AI Act value-chain role held by the organisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrgRole {
    /// Develops AI systems or has them developed (Art. 3(3)).
    Provider,
    /// Uses AI systems under its own authority (Art. 3(4)).
    Deployer,
    /// Places third-country systems on the EU market.
    Importer,
    /// Makes systems available on the EU market.
    Distributor,
}

impl OrgRole {
    /// Returns the role label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Provider => "Provider",
            Self::Deployer => "Deployer",
            Self::Importer => "Importer",
            Self::Distributor => "Distributor",
        }
    }
}

impl std::fmt::Display for OrgRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The organisation being assessed.
///
/// `sector` is optional in inventory documents and omitted from exports
/// when absent. Roles may be empty — the engine does not currently branch
/// on them, but exports carry them for the report header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgProfile {
    /// Organisation name.
    pub name: String,
    /// Size band.
    pub size: OrgSize,
    /// Industry sector, free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    /// AI Act value-chain roles held.
    #[serde(default)]
    pub roles: Vec<OrgRole>,
}
