//! # aira-engine — AI Act Readiness Scoring Engine
//!
//! The decision core of the AIRA stack: pure, synchronous functions that
//! map an organisation's declared AI systems to risk categories, legal
//! obligations, and a weighted readiness score.
//!
//! ## Contract
//!
//! - [`categorize_system`] — system record →
//!   [`RiskCategory`](aira_core::RiskCategory), fixed priority order,
//!   first match wins.
//! - [`calc_system_score`] — system record → integer score in 0–100.
//! - [`assess_org`] — profile + systems → [`OrgAssessment`] with the
//!   per-system results, the mean readiness score, and its band.
//!
//! Obligations come from `aira-rules`; the engine only orchestrates.
//!
//! ## Determinism
//!
//! Every function here is total over its input domain and free of I/O,
//! clocks, and shared state. The same inventory always produces the same
//! assessment — exports are reproducible byte for byte.

pub mod assess;
pub mod categorize;
pub mod score;

// Re-export primary types and the engine contract.
pub use assess::{
    assess_org, assess_system, OrgAssessment, ScoreBand, SystemAssessment, SCORING_VERSION,
};
pub use categorize::categorize_system;
pub use score::calc_system_score;
