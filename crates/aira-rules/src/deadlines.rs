//! # AI Act Enforcement Dates
//!
//! The published dates on which AI Act obligation tiers become applicable.
//! Obligations carry these as ISO-8601 date strings — the same literal
//! values the product has always exported — and are parsed on demand when
//! a report needs to decide whether a deadline has passed.

use chrono::NaiveDate;

/// Prohibited practices must have ceased (Art. 5).
pub const PROHIBITIONS_DEADLINE: &str = "2025-02-02";

/// GPAI transparency obligations apply (Art. 53/55).
pub const GPAI_DEADLINE: &str = "2025-08-02";

/// Limited-risk transparency obligations apply (Art. 50).
pub const TRANSPARENCY_DEADLINE: &str = "2026-08-01";

/// High-risk system obligations apply (Art. 9–11).
pub const HIGH_RISK_DEADLINE: &str = "2027-08-01";

/// Whether an obligation deadline lies strictly before `as_of`.
///
/// The deadline day itself is not yet overdue. An unparseable deadline is
/// treated as not passed — rule data is authored in this crate, so a parse
/// failure indicates a defect and is logged rather than propagated.
pub fn deadline_passed(deadline: &str, as_of: NaiveDate) -> bool {
    match NaiveDate::parse_from_str(deadline, "%Y-%m-%d") {
        Ok(date) => as_of > date,
        Err(e) => {
            tracing::warn!(deadline, error = %e, "unparseable obligation deadline");
            false
        }
    }
}
