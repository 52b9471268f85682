//! CLI argument parsing with clap derive

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, OutputFlags};
use crate::commands;

/// Provision application containers and sync their source
#[derive(Parser)]
#[command(
    name = "tsuru-provision",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Log every runtime command (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a container for an application
    Create(commands::container::CreateArgs),

    /// Start an application's container
    Start(commands::container::AppArg),

    /// Stop an application's container
    Stop(commands::container::AppArg),

    /// Remove an application's container and its record
    Rm(commands::container::AppArg),

    /// Print an application container's IP address
    Ip(commands::container::AppArg),

    /// List recorded containers
    List,

    /// Commit an application's container as an image
    Commit(commands::image::CommitArgs),

    /// Remove an image
    Rmi(commands::image::RmiArgs),

    /// Repository URLs, paths and sync
    #[command(subcommand)]
    Repo(commands::repo::RepoCommand),

    /// Inspect configuration
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or the command fails.
    pub async fn run(self) -> Result<ExitCode> {
        let Cli {
            quiet,
            no_color,
            verbose: _,
            command,
        } = self;
        let app = AppContext::new(&OutputFlags { no_color, quiet })?;
        match command {
            Command::Create(args) => commands::container::create(&app, &args).await,
            Command::Start(args) => commands::container::start(&app, &args).await,
            Command::Stop(args) => commands::container::stop(&app, &args).await,
            Command::Rm(args) => commands::container::rm(&app, &args).await,
            Command::Ip(args) => commands::container::ip(&app, &args).await,
            Command::List => commands::container::list(&app).await,
            Command::Commit(args) => commands::image::commit(&app, &args).await,
            Command::Rmi(args) => commands::image::rmi(&app, &args).await,
            Command::Repo(cmd) => commands::repo::run(&app, cmd).await,
            Command::Config(cmd) => commands::config::run(&app, &cmd),
        }
    }
}
