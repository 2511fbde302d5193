//! # Identity Newtypes
//!
//! Domain-primitive newtype for AI-system identifiers. Wizard-created
//! systems carry UUID-backed identifiers; imported inventories may use any
//! non-empty string (asset-register numbers, internal short codes).
//!
//! Deserialization accepts whatever the document contains — emptiness is
//! reported by inventory validation, not by a serde failure, so a single
//! bad record does not abort parsing of the whole document.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// A unique identifier for an AI system within an organisation's inventory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SystemId(String);

impl SystemId {
    /// Create a system identifier from a string, rejecting empty or
    /// whitespace-only input.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptySystemId`] if the trimmed input is
    /// empty.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.trim().is_empty() {
            return Err(ValidationError::EmptySystemId);
        }
        Ok(Self(s))
    }

    /// Create a new random UUIDv4-backed identifier.
    pub fn new_random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Access the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier holds a non-empty value.
    ///
    /// Deserialized inventories bypass [`SystemId::new`], so validation
    /// checks this explicitly.
    pub fn is_valid(&self) -> bool {
        !self.0.trim().is_empty()
    }
}

impl std::fmt::Display for SystemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
