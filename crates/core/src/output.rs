//! Output transformation for confirmed selections.
//!
//! Turns a final selection snapshot plus the catalog into the agent-shaped
//! output document, then writes it to a uniquely named temporary file. The
//! document build is pure; only the final write can fail with an I/O error.

use std::io::Write;
use std::path::PathBuf;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::agent::AgentMode;
use crate::error::{Error, Result};
use crate::server_definitions::Catalog;

/// The complete name-to-selected state at session end.
pub type SelectionSnapshot = IndexMap<String, bool>;

/// Builds the output document for the selected servers.
///
/// The catalog is filtered to entries whose name maps to `true` in the
/// snapshot; snapshot names with no catalog entry are dropped. The
/// surviving entries become a name-to-configuration mapping in catalog
/// (name-sorted) order, nested under the agent's wrapper key when one is
/// defined.
///
/// # Errors
///
/// Only if a server configuration cannot be represented as a JSON value,
/// which cannot happen for configurations parsed from the definition file.
pub fn build_output_document(
    snapshot: &SelectionSnapshot,
    catalog: &Catalog,
    agent: AgentMode,
) -> Result<Value> {
    let mut selected = Map::new();

    for entry in catalog.iter() {
        if !snapshot.get(&entry.name).copied().unwrap_or(false) {
            continue;
        }

        let config = serde_json::to_value(&entry.config).map_err(|e| {
            Error::json_error(
                "building".to_string(),
                "output".to_string(),
                entry.name.clone(),
                e,
            )
        })?;
        selected.insert(entry.name.clone(), config);
    }

    Ok(match agent.wrapper_key() {
        Some(key) => {
            let mut wrapper = Map::new();
            wrapper.insert(key.to_string(), Value::Object(selected));
            Value::Object(wrapper)
        }
        None => Value::Object(selected),
    })
}

/// Writes the output document to a freshly created, uniquely named file.
///
/// The file is created as `mcp-config-*.json` in the system temp directory
/// and persisted. Its path is the program's sole success output.
///
/// # Errors
///
/// Returns an error if the file cannot be created, written, or persisted,
/// or if the document cannot be serialized.
pub fn write_output_artifact(document: &Value) -> Result<PathBuf> {
    let temp_dir = std::env::temp_dir();

    let data = serde_json::to_string_pretty(document).map_err(|e| {
        Error::json_error(
            "writing".to_string(),
            "output".to_string(),
            temp_dir.display().to_string(),
            e,
        )
    })?;

    let as_io_error = |e: std::io::Error| {
        Error::io_error("output".to_string(), temp_dir.display().to_string(), e)
    };

    let mut temp_file = tempfile::Builder::new()
        .prefix("mcp-config-")
        .suffix(".json")
        .tempfile()
        .map_err(as_io_error)?;

    temp_file.write_all(data.as_bytes()).map_err(as_io_error)?;

    let (_, path) = temp_file.keep().map_err(|e| as_io_error(e.error))?;
    Ok(path)
}
