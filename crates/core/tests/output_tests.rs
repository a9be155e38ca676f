//! End-to-end tests for the core pipeline: load a server definition file,
//! apply a selection snapshot, shape the document per agent and write the
//! artifact.

use std::io::Write;

use mcp_picker_core::agent::AgentMode;
use mcp_picker_core::file_handling::get_server_catalog;
use mcp_picker_core::output::{build_output_document, write_output_artifact, SelectionSnapshot};
use serde_json::{json, Value};
use tempfile::NamedTempFile;

const SERVERS_JSON: &str = r#"{
    "github": {
        "command": "github-mcp",
        "args": ["--stdio"],
        "env": {"GITHUB_TOKEN": "secret"}
    },
    "docs": {"url": "https://docs.example/mcp"},
    "filesystem": {"command": "fs-mcp"}
}"#;

fn write_definition_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{content}").unwrap();
    temp_file
}

fn snapshot(pairs: &[(&str, bool)]) -> SelectionSnapshot {
    pairs
        .iter()
        .map(|(name, selected)| (name.to_string(), *selected))
        .collect()
}

#[test]
fn test_load_select_and_shape_for_amp() {
    let definition_file = write_definition_file(SERVERS_JSON);
    let catalog = get_server_catalog(definition_file.path().to_str().unwrap()).unwrap();

    let snapshot = snapshot(&[("github", true), ("docs", true), ("filesystem", false)]);
    let document = build_output_document(&snapshot, &catalog, AgentMode::Amp).unwrap();

    assert_eq!(
        document,
        json!({
            "docs": {"url": "https://docs.example/mcp"},
            "github": {
                "command": "github-mcp",
                "args": ["--stdio"],
                "env": {"GITHUB_TOKEN": "secret"}
            }
        })
    );
}

#[test]
fn test_load_select_and_shape_for_claude() {
    let definition_file = write_definition_file(SERVERS_JSON);
    let catalog = get_server_catalog(definition_file.path().to_str().unwrap()).unwrap();

    let snapshot = snapshot(&[("filesystem", true)]);
    let document = build_output_document(&snapshot, &catalog, AgentMode::Claude).unwrap();

    assert_eq!(
        document,
        json!({"mcpServers": {"filesystem": {"command": "fs-mcp"}}})
    );
}

#[test]
fn test_written_artifact_round_trips() {
    let definition_file = write_definition_file(SERVERS_JSON);
    let catalog = get_server_catalog(definition_file.path().to_str().unwrap()).unwrap();

    let snapshot = snapshot(&[("github", true)]);
    let document = build_output_document(&snapshot, &catalog, AgentMode::Claude).unwrap();
    let artifact_path = write_output_artifact(&document).unwrap();

    let written = std::fs::read_to_string(&artifact_path).unwrap();
    let parsed: Value = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed, document);

    std::fs::remove_file(&artifact_path).unwrap();
}

#[test]
fn test_serialization_is_deterministic() {
    let definition_file = write_definition_file(SERVERS_JSON);
    let catalog = get_server_catalog(definition_file.path().to_str().unwrap()).unwrap();

    let snapshot = snapshot(&[("github", true), ("docs", true)]);

    let first = build_output_document(&snapshot, &catalog, AgentMode::Amp).unwrap();
    let second = build_output_document(&snapshot, &catalog, AgentMode::Amp).unwrap();
    assert_eq!(
        serde_json::to_string_pretty(&first).unwrap(),
        serde_json::to_string_pretty(&second).unwrap()
    );

    // Keys come out in catalog (name-sorted) order regardless of snapshot order
    let keys: Vec<&String> = first.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["docs", "github"]);
}
