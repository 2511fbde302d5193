//! # JSON Export
//!
//! Emits the assessment document customers download: 2-space-indented
//! JSON with the v1.0 camelCase field names.

use std::path::Path;

use aira_core::AiraError;
use aira_engine::OrgAssessment;

/// Serialize an assessment to pretty-printed JSON.
pub fn to_json_pretty(assessment: &OrgAssessment) -> Result<String, AiraError> {
    Ok(serde_json::to_string_pretty(assessment)?)
}

/// Write an assessment as pretty-printed JSON to `path`, with a trailing
/// newline.
pub fn write_json(assessment: &OrgAssessment, path: &Path) -> Result<(), AiraError> {
    let mut contents = to_json_pretty(assessment)?;
    contents.push('\n');
    std::fs::write(path, contents)?;
    Ok(())
}
