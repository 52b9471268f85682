//! `tsuru-provision config`: show the effective configuration.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Subcommand;

use crate::app::AppContext;
use crate::application::ports::ConfigStore;

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show effective configuration as YAML
    Show,
    /// Print the configuration file path
    Path,
}

/// Run the config command.
///
/// # Errors
///
/// Returns an error if the config cannot be serialized or located.
pub fn run(app: &AppContext, cmd: &ConfigCommand) -> Result<ExitCode> {
    match cmd {
        ConfigCommand::Show => {
            let yaml = serde_yaml::to_string(&app.config).context("cannot serialize config")?;
            print!("{yaml}");
        }
        ConfigCommand::Path => {
            app.output
                .value(&app.config_store.path()?.display().to_string());
        }
    }
    Ok(ExitCode::SUCCESS)
}
