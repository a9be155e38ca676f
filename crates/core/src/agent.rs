//! Agent output modes.
//!
//! The agent determines the shape of the written configuration document:
//! `amp` consumes the selected servers as a flat mapping, while `claude`
//! expects the same mapping nested under a `mcpServers` key. The mode is
//! chosen once on the command line and validated before any UI is shown.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::Error;

/// Wrapper key for claude-shaped output documents.
const CLAUDE_WRAPPER_KEY: &str = "mcpServers";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentMode {
    Amp,
    Claude,
}

impl AgentMode {
    /// The top-level key the selected servers are nested under, if any.
    /// `None` means the mapping is emitted as the top-level document.
    #[must_use]
    pub fn wrapper_key(self) -> Option<&'static str> {
        match self {
            AgentMode::Amp => None,
            AgentMode::Claude => Some(CLAUDE_WRAPPER_KEY),
        }
    }
}

impl FromStr for AgentMode {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "amp" | "" => Ok(AgentMode::Amp),
            "claude" => Ok(AgentMode::Claude),
            other => Err(Error::UnknownAgent(other.to_string())),
        }
    }
}

impl Display for AgentMode {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AgentMode::Amp => formatter.write_str("amp"),
            AgentMode::Claude => formatter.write_str("claude"),
        }
    }
}
