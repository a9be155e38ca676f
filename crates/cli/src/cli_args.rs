//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure for the
//! `mcp-picker` binary using the `clap` crate. The agent value is kept as
//! a plain string here and parsed into an
//! [`AgentMode`](mcp_picker_core::agent::AgentMode) before any UI is
//! shown, so an invalid value fails fast with a descriptive error.

use clap::Parser;

/// Command-line arguments for the mcp-picker tool.
#[derive(Parser, Debug)]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Agent to shape the output for: amp (flat mapping) or claude
    /// (wrapped under `mcpServers`).
    #[arg(long, short = 'a', default_value = "amp")]
    pub agent: String,

    /// Path to the server definition JSON file.
    ///
    /// If not provided, defaults to `~/.config/mcp-picker/servers.json`.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_args_default_values() {
        let args = Args::parse_from(["mcp-picker"]);

        assert_eq!(args.agent, "amp");
        assert!(args.config_path.is_none());
    }

    #[test]
    fn test_args_short_flags() {
        let args = Args::parse_from(["mcp-picker", "-a", "claude", "-c", "/custom/servers.json"]);

        assert_eq!(args.agent, "claude");
        assert_eq!(args.config_path, Some("/custom/servers.json".to_string()));
    }

    #[test]
    fn test_args_long_flags() {
        let args = Args::parse_from([
            "mcp-picker",
            "--agent",
            "claude",
            "--config-path",
            "/custom/servers.json",
        ]);

        assert_eq!(args.agent, "claude");
        assert_eq!(args.config_path, Some("/custom/servers.json".to_string()));
    }

    #[test]
    fn test_args_accept_unknown_agent_text() {
        // Validation happens against AgentMode afterwards, not in clap
        let args = Args::parse_from(["mcp-picker", "--agent", "cursor"]);
        assert_eq!(args.agent, "cursor");
        assert!(args.agent.parse::<mcp_picker_core::agent::AgentMode>().is_err());
    }
}
