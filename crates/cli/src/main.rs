use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};
use mcp_picker_core::agent::AgentMode;
use mcp_picker_core::error::{Error, Result};
use mcp_picker_core::{config, file_handling, output};

use crate::picker::{PickerTheme, SessionOutcome};

mod cli_args;
pub mod picker;

fn execute() -> Result<()> {
    let args = cli_args::Args::parse();

    // Fail fast on a bad agent, before any UI is shown
    let agent: AgentMode = args.agent.parse()?;

    let config_path = config::get_config_path(&args.config_path);
    debug!("Config path: `{}`", config_path);

    let catalog = file_handling::get_server_catalog(&config_path)?;
    info!("Loaded {} server definitions for agent `{agent}`", catalog.len());

    let outcome = picker::run_picker(&catalog, &PickerTheme::default())?;

    match outcome {
        SessionOutcome::Confirmed(snapshot) => {
            let document = output::build_output_document(&snapshot, &catalog, agent)?;
            let artifact_path = output::write_output_artifact(&document)?;

            // The path is the sole output on stdout; everything else goes
            // to stderr so callers can substitute it directly.
            println!("{}", artifact_path.display());
            Ok(())
        }
        SessionOutcome::Cancelled => Err(Error::Cancelled),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
