//! # Inventory Consistency Validation
//!
//! The validation pass the CLI runs before assessing an inventory.
//!
//! ## Validation Layers
//!
//! 1. **Structural**: the document parsed into [`Inventory`] (done by the
//!    loader; serde rejects unknown enum labels and out-of-range
//!    maturities).
//! 2. **Record-level**: system ids are non-empty, names are non-empty.
//! 3. **Cross-record**: system ids are unique within the inventory.
//! 4. **Plausibility warnings**: findings that do not block assessment
//!    but usually indicate an authoring mistake.

use std::collections::HashSet;

use aira_core::Inventory;

/// Result of validating an inventory document.
///
/// Errors block assessment; warnings are reported but non-fatal.
#[derive(Debug, Default)]
pub struct InventoryValidation {
    /// Fatal findings.
    pub errors: Vec<String>,
    /// Non-fatal findings.
    pub warnings: Vec<String>,
}

impl InventoryValidation {
    /// Whether the inventory may be assessed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, msg: String) {
        self.errors.push(msg);
    }

    fn warning(&mut self, msg: String) {
        self.warnings.push(msg);
    }
}

/// Validate an inventory document.
///
/// Never fails outright — every finding is collected so an operator sees
/// the full list in one run.
pub fn validate_inventory(inventory: &Inventory) -> InventoryValidation {
    let mut result = InventoryValidation::default();

    if inventory.org.name.trim().is_empty() {
        result.error("organisation name must be non-empty".to_string());
    }

    if inventory.systems.is_empty() {
        result.warning(
            "inventory declares no AI systems; the readiness score of an empty \
             inventory is 0"
                .to_string(),
        );
    }

    let mut seen_ids: HashSet<&str> = HashSet::new();
    for (index, system) in inventory.systems.iter().enumerate() {
        let label = if system.name.trim().is_empty() {
            format!("systems[{index}]")
        } else {
            format!("systems[{index}] ({:?})", system.name)
        };

        if !system.id.is_valid() {
            result.error(format!("{label}: system id must be non-empty"));
        } else if !seen_ids.insert(system.id.as_str()) {
            result.error(format!("{label}: duplicate system id {:?}", system.id.as_str()));
        }

        if system.name.trim().is_empty() {
            result.error(format!("{label}: system name must be non-empty"));
        }

        if system.has_systemic_risk && !system.is_gpai_model {
            result.warning(format!(
                "{label}: hasSystemicRisk is set but the system is not a GPAI model; \
                 the flag has no effect"
            ));
        }

        if let Some(months) = system.governance.evidence_fresh_months {
            if months > 120 {
                result.warning(format!(
                    "{label}: evidenceFreshMonths = {months} is implausibly old"
                ));
            }
        }
    }

    if !result.errors.is_empty() {
        tracing::debug!(
            errors = result.errors.len(),
            warnings = result.warnings.len(),
            "inventory validation failed"
        );
    }

    result
}
