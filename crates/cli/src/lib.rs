//! MCP Picker CLI Library
//!
//! This crate provides the command-line interface for mcp-picker, an
//! interactive terminal tool for choosing a subset of configured MCP
//! servers and writing an agent-shaped configuration document for them.
//!
//! # Key Features
//!
//! - **Interactive Selection**: Terminal multi-select UI with fuzzy filtering
//! - **Agent Modes**: Output shaped for amp (flat) or claude (`mcpServers` wrapper)
//! - **Machine-Parseable Output**: UI on stderr, artifact path alone on stdout
//!
//! # Architecture
//!
//! The CLI is organized into two key modules:
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`picker`]: The interactive session (pure state machine + terminal frontend)
//!
//! # Examples
//!
//! ```bash
//! # Pick servers for amp; the written config path lands on stdout
//! mcp-picker
//!
//! # Claude-shaped output, custom definition file
//! mcp-picker --agent claude --config-path ./servers.json
//!
//! # Feed the artifact straight into another tool
//! amp --mcp-config "$(mcp-picker)"
//! ```

pub mod cli_args;
pub mod picker;
