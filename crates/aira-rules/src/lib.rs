//! # aira-rules — Regulatory Rule Data
//!
//! Static AI Act rule data and inventory consistency checks for the AIRA
//! stack: the published enforcement dates, the obligation catalog keyed by
//! [`RiskCategory`](aira_core::RiskCategory), the scoring weight tables,
//! and the validation pass the CLI runs before assessing an inventory.
//!
//! Rule data is code, not configuration: the catalog changes only with a
//! scoring-engine version bump, and exhaustive matches over the category
//! enum make a silently unhandled category impossible.

pub mod deadlines;
pub mod obligations;
pub mod validation;
pub mod weights;

// Re-export primary types.
pub use deadlines::{
    deadline_passed, GPAI_DEADLINE, HIGH_RISK_DEADLINE, PROHIBITIONS_DEADLINE,
    TRANSPARENCY_DEADLINE,
};
pub use obligations::{build_obligations, Obligation};
pub use validation::{validate_inventory, InventoryValidation};
pub use weights::{baseline_score, criticality_factor, exposure_factor, ControlPoints, CONTROL_POINTS};
