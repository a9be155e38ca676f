//! Configuration path utilities for mcp-picker.
//!
//! This module provides functions for resolving the server definition file
//! path and expanding shell variables like `~` in paths.

/// Default path for the server definition file
const DEFAULT_CONFIG_PATH: &str = "~/.config/mcp-picker/servers.json";

/// Resolves the server definition file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// configuration path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use mcp_picker_core::config::get_config_path;
///
/// // Use default path
/// let default_path = get_config_path(&None);
///
/// // Use custom path
/// let custom_path = get_config_path(&Some("/path/to/servers.json".to_string()));
/// ```
pub fn get_config_path(config_path_arg: &Option<String>) -> String {
    let config_path = match config_path_arg {
        Some(config_path) => config_path,
        None => DEFAULT_CONFIG_PATH,
    };

    shellexpand::tilde(config_path).to_string()
}
