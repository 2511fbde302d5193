//! # Validate Subcommand
//!
//! Loads an inventory and runs the consistency checks from `aira-rules`
//! without assessing it. Validation is the first line of defense against
//! malformed inventories; `assess` and `report` run the same checks
//! before touching the engine.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use aira_rules::validate_inventory;

use crate::inventory::load_inventory;

/// Arguments for the `aira validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the inventory document (YAML or JSON).
    #[arg(value_name = "INVENTORY")]
    pub path: PathBuf,
}

/// Execute the validate subcommand.
///
/// Returns exit code 0 when the inventory is valid, 1 otherwise.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let inventory = load_inventory(&args.path)?;
    let result = validate_inventory(&inventory);

    for warning in &result.warnings {
        println!("WARN: {warning}");
    }
    for error in &result.errors {
        println!("FAIL: {error}");
    }

    if result.is_valid() {
        println!(
            "OK: {} — {} system(s), {} warning(s)",
            args.path.display(),
            inventory.system_count(),
            result.warnings.len()
        );
        Ok(0)
    } else {
        println!(
            "\n{} error(s) in {}.",
            result.errors.len(),
            args.path.display()
        );
        Ok(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_inventory(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.yaml");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn valid_inventory_returns_zero() {
        let (_dir, path) = write_inventory(
            "org:\n  name: Acme\n  size: mittel\nsystems: []\n",
        );
        let code = run_validate(&ValidateArgs { path }).unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn duplicate_ids_return_one() {
        let (_dir, path) = write_inventory(
            r#"
org:
  name: Acme
  size: mittel
systems:
  - id: a
    name: First
    providerOrDeployer: Deployer
    exposure: PoC/Pilot
    governance: {rms: 0, dataGov: 0, techDoc: 0, logging: 0, oversight: 0, pmp: 0, qms: 0}
  - id: a
    name: Second
    providerOrDeployer: Deployer
    exposure: PoC/Pilot
    governance: {rms: 0, dataGov: 0, techDoc: 0, logging: 0, oversight: 0, pmp: 0, qms: 0}
"#,
        );
        let code = run_validate(&ValidateArgs { path }).unwrap();
        assert_eq!(code, 1);
    }

    #[test]
    fn missing_file_is_an_operational_error() {
        let args = ValidateArgs {
            path: PathBuf::from("/no/such/inventory.yaml"),
        };
        assert!(run_validate(&args).is_err());
    }
}
