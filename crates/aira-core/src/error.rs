//! # Error Hierarchy
//!
//! Structured error types for the AIRA stack, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Each variant carries the diagnostic context an operator needs: the
//! offending value, the expected format, and where applicable the
//! identifier of the record that failed.

use thiserror::Error;

/// Top-level error type for the AIRA stack.
#[derive(Error, Debug)]
pub enum AiraError {
    /// Domain primitive or inventory record validation failure.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// An inventory document failed consistency checks.
    #[error("inventory error: {0}")]
    Inventory(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Validation errors for domain primitives and inventory records.
///
/// Each constructor-validated type reports the invalid input and the
/// expected format so misconfigured inventories can be diagnosed without
/// guesswork.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A system identifier is empty or whitespace-only.
    #[error("invalid system id: must be non-empty")]
    EmptySystemId,

    /// A maturity value is outside the 0–3 scale.
    #[error("invalid maturity value {value} (expected an integer in 0..=3)")]
    InvalidMaturity {
        /// The out-of-range value.
        value: u8,
    },

    /// A string label does not name any variant of the given taxonomy.
    #[error("unknown {kind} label: {label:?}")]
    UnknownLabel {
        /// Which taxonomy was being parsed (e.g. "risk category").
        kind: &'static str,
        /// The unrecognized label.
        label: String,
    },

    /// Two systems in one inventory share an identifier.
    #[error("duplicate system id: {0:?}")]
    DuplicateSystemId(String),
}
