//! `tsuru-provision repo`: repository references and unit sync.

use std::process::ExitCode;

use anyhow::Result;
use clap::Subcommand;

use crate::app::AppContext;
use crate::application::services::{container, repository as sync};
use crate::domain::repository;
use crate::infra::unit::DockerExecUnit;
use crate::output::Mark;

/// Repo subcommands.
#[derive(Subcommand)]
pub enum RepoCommand {
    /// Print the authenticated push URL
    Url { app: String },
    /// Print the anonymous clone URL
    ReadOnlyUrl { app: String },
    /// Print the working-copy path on units
    Path,
    /// Print the bare repository path on the git host
    BarePath { app: String },
    /// Clone or pull the application's source inside its container
    Sync { app: String },
}

/// Run a repo subcommand.
///
/// # Errors
///
/// Returns a configuration error, or the unit error from `sync`.
pub async fn run(app: &AppContext, cmd: RepoCommand) -> Result<ExitCode> {
    let git = &app.config.git;
    match cmd {
        RepoCommand::Url { app: name } => app.output.value(&repository::url(git, &name)?),
        RepoCommand::ReadOnlyUrl { app: name } => {
            app.output.value(&repository::read_only_url(git, &name)?);
        }
        RepoCommand::Path => app.output.value(&repository::path(git)?),
        RepoCommand::BarePath { app: name } => {
            app.output.value(&repository::bare_path(git, &name)?);
        }
        RepoCommand::Sync { app: name } => {
            let c = container::find(&app.store, &name).await?;
            let unit = DockerExecUnit::new(&app.runtime, c)?;
            let output = sync::clone_or_pull(git, &unit).await?;
            app.output.relay(&String::from_utf8_lossy(&output.stdout));
            app.output
                .status(Mark::Done, &format!("Source for {name} synced"));
        }
    }
    Ok(ExitCode::SUCCESS)
}
