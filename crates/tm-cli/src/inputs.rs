//! JSON inputs accepted by the CLI.
//!
//! - Reference maps: `[["sn85054967", ...], ["Il_Patriota", ...]]`
//! - Tokenised documents: `[["token", ...], ...]`

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tm_model::ReferenceMap;

/// Parse a reference map from its nested-list JSON form.
pub fn parse_reference_map(json: &str) -> Result<ReferenceMap> {
    let nested: Vec<Vec<String>> =
        serde_json::from_str(json).context("reference map must be a list of two string lists")?;
    Ok(ReferenceMap::from_nested(nested)?)
}

/// Load a reference map JSON file.
pub fn load_reference_map(path: &Path) -> Result<ReferenceMap> {
    let json =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_reference_map(&json).with_context(|| format!("parse {}", path.display()))
}

/// Parse tokenised documents from JSON.
pub fn parse_documents(json: &str) -> Result<Vec<Vec<String>>> {
    serde_json::from_str(json).context("documents must be a list of token lists")
}

/// Load a tokenised documents JSON file.
pub fn load_documents(path: &Path) -> Result<Vec<Vec<String>>> {
    let json =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_documents(&json).with_context(|| format!("parse {}", path.display()))
}
