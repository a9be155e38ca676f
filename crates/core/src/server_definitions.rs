//! Server definition types for mcp-picker.
//!
//! The input document is a JSON mapping of server name to configuration.
//! Configurations are opaque to the picker beyond being round-trippable:
//! they are deserialized once at load time and written back verbatim for
//! whichever servers end up selected.

use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Configuration for a single MCP server.
///
/// Mirrors the on-disk JSON shape: either a local `command` (with optional
/// `args` and `env`) or a remote `url`. Unset fields are omitted on write.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// One named, selectable server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerEntry {
    pub name: String,
    pub config: ServerConfig,
}

impl Display for ServerEntry {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.name)
    }
}

/// The full, fixed collection of servers for a session.
///
/// Entries are sorted by name ascending at construction and never change
/// afterwards. Names are unique: the source document is a JSON object, so
/// duplicate keys cannot survive parsing.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<ServerEntry>,
}

impl Catalog {
    #[must_use]
    pub fn new(configs: IndexMap<String, ServerConfig>) -> Self {
        let mut entries: Vec<ServerEntry> = configs
            .into_iter()
            .map(|(name, config)| ServerEntry { name, config })
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        Self { entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ServerEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn entry(&self, index: usize) -> Option<&ServerEntry> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ServerConfig> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.config)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stdio_config(command: &str) -> ServerConfig {
        ServerConfig {
            command: Some(command.to_string()),
            ..ServerConfig::default()
        }
    }

    #[test]
    fn test_catalog_sorted_by_name() {
        let mut configs = IndexMap::new();
        configs.insert("zeta".to_string(), stdio_config("z"));
        configs.insert("alpha".to_string(), stdio_config("a"));
        configs.insert("mid".to_string(), stdio_config("m"));

        let catalog = Catalog::new(configs);
        let names: Vec<&str> = catalog.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_catalog_lookup() {
        let mut configs = IndexMap::new();
        configs.insert("github".to_string(), stdio_config("gh-mcp"));

        let catalog = Catalog::new(configs);
        assert!(catalog.contains("github"));
        assert!(!catalog.contains("gitlab"));
        assert_eq!(
            catalog.get("github").and_then(|c| c.command.clone()),
            Some("gh-mcp".to_string())
        );
        assert!(catalog.get("gitlab").is_none());
    }

    #[test]
    fn test_server_entry_display() {
        let entry = ServerEntry {
            name: "filesystem".to_string(),
            config: ServerConfig::default(),
        };
        assert_eq!(format!("{entry}"), "filesystem");
    }

    #[test]
    fn test_server_config_omits_unset_fields() {
        let config = stdio_config("npx");
        let serialized = serde_json::to_string(&config).unwrap();
        assert_eq!(serialized, r#"{"command":"npx"}"#);
    }

    #[test]
    fn test_server_config_round_trip() {
        let json = r#"{"command":"npx","args":["-y","server"],"env":{"TOKEN":"t"}}"#;
        let config: ServerConfig = serde_json::from_str(json).unwrap();
        let back = serde_json::to_value(&config).unwrap();
        assert_eq!(back, serde_json::from_str::<serde_json::Value>(json).unwrap());
    }
}
