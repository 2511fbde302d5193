//! # Risk Categorizer
//!
//! Assigns each AI system exactly one [`RiskCategory`] from its declared
//! properties. Rules are evaluated in fixed priority order and the first
//! match wins; a system that is both a GPAI model and high-risk is
//! high-risk (its GPAI duties are re-attached by the obligation builder).

use aira_core::{AiSystem, RiskCategory};

/// Categorize a system.
///
/// Priority order:
///
/// 1. Any declared biometric function that is a prohibited practice →
///    [`RiskCategory::Prohibited`].
/// 2. Any Annex III domain → [`RiskCategory::HighRisk`].
/// 3. GPAI model → [`RiskCategory::GpaiSystemicRisk`] when the
///    systemic-risk designation is set, else [`RiskCategory::Gpai`].
/// 4. Interacts with humans or generates synthetic content →
///    [`RiskCategory::LimitedRisk`].
/// 5. Otherwise → [`RiskCategory::Minimal`].
///
/// Total over the input domain; undeclared flags and empty lists simply
/// fall through to the next rule.
pub fn categorize_system(system: &AiSystem) -> RiskCategory {
    if system
        .biometric_functions
        .iter()
        .any(|f| f.is_prohibited_practice())
    {
        return RiskCategory::Prohibited;
    }

    if !system.annex_iii.is_empty() {
        return RiskCategory::HighRisk;
    }

    if system.is_gpai_model {
        return if system.has_systemic_risk {
            RiskCategory::GpaiSystemicRisk
        } else {
            RiskCategory::Gpai
        };
    }

    if system.interacts_with_humans || system.generates_synthetic_content {
        return RiskCategory::LimitedRisk;
    }

    RiskCategory::Minimal
}
