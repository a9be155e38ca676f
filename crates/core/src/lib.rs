//! MCP Picker Core Library
//!
//! This crate provides the non-interactive core of mcp-picker, a terminal
//! tool for selecting a subset of configured MCP servers and emitting an
//! agent-specific configuration document for them.
//!
//! # Key Features
//!
//! - **Server Definitions**: Parse and validate the JSON server definition file
//! - **Agent Modes**: Closed set of output shapes (flat for amp, wrapped for claude)
//! - **Output Transformation**: Deterministic document build and unique artifact write
//! - **Configuration Management**: Handle configuration file paths
//! - **Error Handling**: Comprehensive error types for all failure modes
//!
//! # Examples
//!
//! Loading server definitions from a configuration file:
//!
//! ```no_run
//! use mcp_picker_core::file_handling::get_server_catalog;
//!
//! let catalog = get_server_catalog("~/.config/mcp-picker/servers.json")?;
//! for server in catalog.iter() {
//!     println!("Server: {}", server);
//! }
//! # Ok::<(), mcp_picker_core::error::Error>(())
//! ```

pub mod agent;
pub mod config;
pub mod error;
pub mod file_handling;
pub mod output;
pub mod server_definitions;
