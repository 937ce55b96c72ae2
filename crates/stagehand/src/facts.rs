//! Loading fact sets from JSON.

use stagehand_types::{FixtureError, Result, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Parse a JSON object into a fact set. Values are kept exactly as written.
pub fn facts_from_json(json: &str) -> Result<BTreeMap<String, Value>> {
    let value: Value = serde_json::from_str(json)?;
    match value {
        Value::Hash(facts) => Ok(facts),
        other => Err(FixtureError::InvalidFacts(other.type_name().to_string())),
    }
}

/// Read a fact set from a JSON file.
pub fn load_facts(path: impl AsRef<Path>) -> Result<BTreeMap<String, Value>> {
    let json = fs::read_to_string(path)?;
    facts_from_json(&json)
}
