//! # Inventory Loading
//!
//! Reads an inventory document from disk. Inventories are authored as
//! YAML (the default) or JSON; the format is chosen by file extension so
//! a `.json` export can be fed straight back in.

use std::path::Path;

use anyhow::{Context, Result};

use aira_core::Inventory;

/// Load an inventory document from `path`.
///
/// `.json` files are parsed as JSON, everything else as YAML. Parse
/// failures carry the path in the error context.
pub fn load_inventory(path: &Path) -> Result<Inventory> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read inventory {}", path.display()))?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse JSON inventory {}", path.display()))
    } else {
        serde_yaml::from_str(&contents)
            .with_context(|| format!("failed to parse YAML inventory {}", path.display()))
    }
}
