//! Whole-tree import and export
//!
//! Export is pretty-printed JSON of the bare node array. Import accepts any JSON
//! array whose top-level entries carry a string `id`, then requires the full
//! node shape and globally unique ids before anything is replaced.
//!
//! Every folder level nests two JSON levels, so reads go through
//! [`from_json_slice`], which lifts serde_json's recursion limit and grows the
//! stack on demand instead.

use crate::error::ImportError;
use crate::tree::Tree;
use serde::de::{DeserializeOwned, Error as _};
use serde::Deserialize;
use serde_json::Value;

/// Deserialize JSON of any nesting depth
pub fn from_json_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, serde_json::Error> {
    let mut json = serde_json::Deserializer::from_slice(bytes);
    json.disable_recursion_limit();
    let value = T::deserialize(serde_stacker::Deserializer::new(&mut json))?;
    json.end()?;
    Ok(value)
}

/// Parse and validate an imported document
pub fn import_tree(json: &str) -> Result<Tree, ImportError> {
    let value: Value = from_json_slice(json.as_bytes()).map_err(ImportError::Malformed)?;
    import_value(value)
}

/// Validate an already-parsed JSON value
pub fn import_value(value: Value) -> Result<Tree, ImportError> {
    let entries = value.as_array().ok_or(ImportError::NotAnArray)?;
    if let Some(index) = entries
        .iter()
        .position(|entry| !entry.get("id").map(Value::is_string).unwrap_or(false))
    {
        return Err(ImportError::MissingId { index });
    }

    reject_file_children(entries)?;

    let tree = Tree::deserialize(serde_stacker::Deserializer::new(value))
        .map_err(ImportError::InvalidShape)?;
    if let Some(id) = tree.duplicate_id() {
        return Err(ImportError::DuplicateId(id.to_string()));
    }
    Ok(tree)
}

/// Files cannot hold children; refuse rather than silently dropping them
fn reject_file_children(entries: &[Value]) -> Result<(), ImportError> {
    let mut pending: Vec<&Value> = entries.iter().collect();
    while let Some(entry) = pending.pop() {
        match entry.get("type").and_then(Value::as_str) {
            Some("file") if entry.get("children").is_some() => {
                let id = entry.get("id").and_then(Value::as_str).unwrap_or("<no id>");
                return Err(ImportError::InvalidShape(serde_json::Error::custom(format!(
                    "file {} cannot have children",
                    id
                ))));
            }
            Some("folder") => {
                if let Some(children) = entry.get("children").and_then(Value::as_array) {
                    pending.extend(children);
                }
            }
            _ => {}
        }
    }
    Ok(())
}

pub fn export_tree(tree: &Tree) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(tree)
}
