//! # Inventory Document
//!
//! The input document the CLI loads: one organisation profile plus the
//! list of AI systems to assess. Inventories are authored as YAML or JSON;
//! consistency checks live in `aira-rules`.

use serde::{Deserialize, Serialize};

use crate::org::OrgProfile;
use crate::system::AiSystem;

/// An organisation's AI-system inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    /// The organisation being assessed.
    pub org: OrgProfile,
    /// The declared AI systems. May be empty.
    #[serde(default)]
    pub systems: Vec<AiSystem>,
}

impl Inventory {
    /// Number of declared systems.
    pub fn system_count(&self) -> usize {
        self.systems.len()
    }
}
