//! Loading and validation of the server definition file.
//!
//! The server definition file is a JSON object mapping server names to
//! their configurations. Parsing goes through an [`IndexMap`] so the
//! document round-trips cleanly, then the entries are sorted into a
//! [`Catalog`] for the interactive session.

use std::fs::File;

use indexmap::IndexMap;
use log::debug;

use crate::error::{Error, Result};
use crate::server_definitions::{Catalog, ServerConfig};

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    match File::open(path) {
        Ok(reader) => Ok(reader),
        Err(e) => Err(Error::io_error(
            file_description.to_string(),
            path.to_string(),
            e,
        )),
    }
}

fn validate_server_names(configs: &IndexMap<String, ServerConfig>) -> Result<()> {
    if configs.keys().any(|name| name.is_empty()) {
        return Err(Error::EmptyServerName);
    }

    Ok(())
}

/// Loads and validates server definitions from a configuration file.
///
/// Reads the JSON file, parses the name-to-configuration mapping, and
/// returns it as a name-sorted [`Catalog`].
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The JSON is malformed or doesn't match the expected structure
/// - The file defines no servers
/// - A server name is empty
///
/// # Examples
///
/// ```no_run
/// use mcp_picker_core::file_handling::get_server_catalog;
///
/// let catalog = get_server_catalog("~/.config/mcp-picker/servers.json")?;
/// println!("Loaded {} servers", catalog.len());
/// # Ok::<(), mcp_picker_core::error::Error>(())
/// ```
pub fn get_server_catalog(config_path: &str) -> Result<Catalog> {
    let config_reader = get_reader("server definition", config_path)?;

    let parsing_result: serde_json::Result<IndexMap<String, ServerConfig>> =
        serde_json::from_reader(config_reader);

    let configs = parsing_result.map_err(|e| {
        Error::json_error(
            "reading".to_string(),
            "server definition".to_string(),
            config_path.to_string(),
            e,
        )
    })?;

    debug!(
        "Parsed {} server definitions from `{}`",
        configs.len(),
        config_path
    );

    if configs.is_empty() {
        return Err(Error::no_servers_defined(config_path.to_string()));
    }

    validate_server_names(&configs)?;

    Ok(Catalog::new(configs))
}
