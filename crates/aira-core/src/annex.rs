//! # Annex III Domains & Biometric Functions
//!
//! The two input taxonomies the categorizer reads: the eight Annex III
//! high-risk use-case domains and the three biometric functions that
//! constitute prohibited practices under Art. 5.
//!
//! Labels are the wizard's published German strings; declaring any Annex
//! III domain makes a system high-risk, declaring any biometric function
//! makes it prohibited.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;

// ---------------------------------------------------------------------------
// AnnexIiiDomain
// ---------------------------------------------------------------------------

/// An Annex III high-risk use-case domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnnexIiiDomain {
    /// Biometric identification and categorisation.
    #[serde(rename = "Biometrie")]
    Biometrics,
    /// Management and operation of critical infrastructure.
    #[serde(rename = "Kritische Infrastruktur")]
    CriticalInfrastructure,
    /// Education and vocational training.
    #[serde(rename = "Bildung")]
    Education,
    /// Employment, workers management, access to self-employment.
    #[serde(rename = "Beschäftigung")]
    Employment,
    /// Access to essential private and public services.
    #[serde(rename = "Wesentliche Dienste")]
    EssentialServices,
    /// Law enforcement.
    #[serde(rename = "Strafverfolgung")]
    LawEnforcement,
    /// Migration, asylum and border control management.
    #[serde(rename = "Migration/Grenzen")]
    MigrationBorders,
    /// Administration of justice and democratic processes.
    #[serde(rename = "Justiz/Demokratie")]
    JusticeDemocracy,
}

/// Total number of Annex III domains.
pub const ANNEX_III_DOMAIN_COUNT: usize = 8;

impl AnnexIiiDomain {
    /// Returns all eight domains in Annex III order.
    pub fn all() -> &'static [AnnexIiiDomain] {
        &[
            Self::Biometrics,
            Self::CriticalInfrastructure,
            Self::Education,
            Self::Employment,
            Self::EssentialServices,
            Self::LawEnforcement,
            Self::MigrationBorders,
            Self::JusticeDemocracy,
        ]
    }

    /// Returns the published label for this domain.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Biometrics => "Biometrie",
            Self::CriticalInfrastructure => "Kritische Infrastruktur",
            Self::Education => "Bildung",
            Self::Employment => "Beschäftigung",
            Self::EssentialServices => "Wesentliche Dienste",
            Self::LawEnforcement => "Strafverfolgung",
            Self::MigrationBorders => "Migration/Grenzen",
            Self::JusticeDemocracy => "Justiz/Demokratie",
        }
    }
}

impl std::fmt::Display for AnnexIiiDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnnexIiiDomain {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Biometrie" => Ok(Self::Biometrics),
            "Kritische Infrastruktur" => Ok(Self::CriticalInfrastructure),
            "Bildung" => Ok(Self::Education),
            "Beschäftigung" => Ok(Self::Employment),
            "Wesentliche Dienste" => Ok(Self::EssentialServices),
            "Strafverfolgung" => Ok(Self::LawEnforcement),
            "Migration/Grenzen" => Ok(Self::MigrationBorders),
            "Justiz/Demokratie" => Ok(Self::JusticeDemocracy),
            other => Err(ValidationError::UnknownLabel {
                kind: "Annex III domain",
                label: other.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// BiometricFunction
// ---------------------------------------------------------------------------

/// A biometric function declared for an AI system.
///
/// Every function currently listed is a prohibited practice under Art. 5;
/// [`BiometricFunction::is_prohibited_practice`] makes the categorizer's
/// rule explicit rather than relying on list non-emptiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BiometricFunction {
    /// Real-time remote biometric identification in public spaces.
    #[serde(rename = "Echtzeit-RBI")]
    RealTimeRbi,
    /// Emotion recognition in workplace or education contexts.
    #[serde(rename = "Emotionserkennung")]
    EmotionRecognition,
    /// Biometric categorisation by sensitive attributes.
    #[serde(rename = "Kategorisierung nach sensiblen Merkmalen")]
    SensitiveCategorisation,
}

impl BiometricFunction {
    /// Returns all declared biometric functions.
    pub fn all() -> &'static [BiometricFunction] {
        &[
            Self::RealTimeRbi,
            Self::EmotionRecognition,
            Self::SensitiveCategorisation,
        ]
    }

    /// Returns the published label for this function.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RealTimeRbi => "Echtzeit-RBI",
            Self::EmotionRecognition => "Emotionserkennung",
            Self::SensitiveCategorisation => "Kategorisierung nach sensiblen Merkmalen",
        }
    }

    /// Whether this function is a prohibited practice under Art. 5.
    pub fn is_prohibited_practice(&self) -> bool {
        match self {
            Self::RealTimeRbi => true,
            Self::EmotionRecognition => true,
            Self::SensitiveCategorisation => true,
        }
    }
}

impl std::fmt::Display for BiometricFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BiometricFunction {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Echtzeit-RBI" => Ok(Self::RealTimeRbi),
            "Emotionserkennung" => Ok(Self::EmotionRecognition),
            "Kategorisierung nach sensiblen Merkmalen" => Ok(Self::SensitiveCategorisation),
            other => Err(ValidationError::UnknownLabel {
                kind: "biometric function",
                label: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annex_domain_count() {
        assert_eq!(AnnexIiiDomain::all().len(), ANNEX_III_DOMAIN_COUNT);
    }

    #[test]
    fn annex_domains_unique() {
        let mut seen = std::collections::HashSet::new();
        for d in AnnexIiiDomain::all() {
            assert!(seen.insert(d), "duplicate domain: {d}");
        }
    }

    #[test]
    fn annex_as_str_roundtrip() {
        for domain in AnnexIiiDomain::all() {
            let parsed: AnnexIiiDomain = domain.as_str().parse().unwrap();
            assert_eq!(*domain, parsed);
        }
    }

    #[test]
    fn annex_serde_format_matches_as_str() {
        for domain in AnnexIiiDomain::all() {
            let json = serde_json::to_string(domain).unwrap();
            assert_eq!(json, format!("\"{}\"", domain.as_str()));
        }
    }

    #[test]
    fn annex_from_str_rejects_unknown() {
        assert!("Gesundheit".parse::<AnnexIiiDomain>().is_err());
        assert!("biometrie".parse::<AnnexIiiDomain>().is_err());
    }

    #[test]
    fn biometric_as_str_roundtrip() {
        for f in BiometricFunction::all() {
            let parsed: BiometricFunction = f.as_str().parse().unwrap();
            assert_eq!(*f, parsed);
        }
    }

    #[test]
    fn biometric_serde_format_matches_as_str() {
        for f in BiometricFunction::all() {
            let json = serde_json::to_string(f).unwrap();
            assert_eq!(json, format!("\"{}\"", f.as_str()));
        }
    }

    #[test]
    fn every_declared_biometric_function_is_prohibited() {
        for f in BiometricFunction::all() {
            assert!(f.is_prohibited_practice(), "{f} should be prohibited");
        }
    }
}
