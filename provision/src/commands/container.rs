//! Container commands: `create`, `start`, `stop`, `rm`, `ip`, `list`.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::ContainerStore;
use crate::application::services::container;
use crate::domain::{App, CreateOutcome};
use crate::output::Mark;

/// Arguments for `tsuru-provision create`.
#[derive(Args)]
pub struct CreateArgs {
    /// Application name
    pub app: String,
    /// Runtime type, e.g. `python`; names the base image
    #[arg(value_name = "TYPE")]
    pub app_type: String,
    /// Requested unit count
    #[arg(long, default_value_t = 1)]
    pub units: u32,
}

/// A single application name argument.
#[derive(Args)]
pub struct AppArg {
    /// Application name
    pub app: String,
}

/// Run `tsuru-provision create`.
///
/// # Errors
///
/// Returns an error on missing configuration or a store failure. A runtime
/// failure is reported and turned into exit code 1.
pub async fn create(app: &AppContext, args: &CreateArgs) -> Result<ExitCode> {
    let request = App::new(&args.app, &args.app_type, args.units);
    match container::create(&app.runtime, &app.store, &app.config, &request).await? {
        CreateOutcome::Created(c) => {
            app.output
                .status(Mark::Done, &format!("Container for {} created", c.name));
            app.output.field("id", &c.id);
            Ok(ExitCode::SUCCESS)
        }
        CreateOutcome::Failed { container, .. } => {
            app.output.status(
                Mark::Failed,
                &format!("Container for {} was not created", container.name),
            );
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Run `tsuru-provision start`.
///
/// # Errors
///
/// Returns an error if no container is recorded for the app.
pub async fn start(app: &AppContext, args: &AppArg) -> Result<ExitCode> {
    let c = container::find(&app.store, &args.app).await?;
    container::start(&c).await?;
    app.output
        .status(Mark::Done, &format!("Container for {} started", c.name));
    Ok(ExitCode::SUCCESS)
}

/// Run `tsuru-provision stop`.
///
/// # Errors
///
/// Returns an error if no container is recorded or the runtime refuses.
pub async fn stop(app: &AppContext, args: &AppArg) -> Result<ExitCode> {
    let c = container::find(&app.store, &args.app).await?;
    container::stop(&app.runtime, &c).await?;
    app.output
        .status(Mark::Done, &format!("Container for {} stopped", c.name));
    Ok(ExitCode::SUCCESS)
}

/// Run `tsuru-provision rm`.
///
/// # Errors
///
/// Returns an error if no container is recorded or the runtime refuses.
pub async fn rm(app: &AppContext, args: &AppArg) -> Result<ExitCode> {
    let c = container::find(&app.store, &args.app).await?;
    container::destroy(&app.runtime, &app.store, &c).await?;
    app.output
        .status(Mark::Done, &format!("Container for {} removed", c.name));
    Ok(ExitCode::SUCCESS)
}

/// Run `tsuru-provision ip`.
///
/// # Errors
///
/// Returns an error if no container is recorded, the runtime refuses, or
/// the inspect output cannot be parsed.
pub async fn ip(app: &AppContext, args: &AppArg) -> Result<ExitCode> {
    let c = container::find(&app.store, &args.app).await?;
    let addr = container::ip(&app.runtime, &c).await?;
    app.output.value(&addr);
    Ok(ExitCode::SUCCESS)
}

/// Run `tsuru-provision list`.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub async fn list(app: &AppContext) -> Result<ExitCode> {
    let records = app.store.list().await?;
    if records.is_empty() {
        app.output.status(Mark::Empty, "No containers recorded.");
        return Ok(ExitCode::SUCCESS);
    }
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| {
            vec![
                r.name.clone(),
                r.app_type.clone(),
                r.id.clone(),
                r.created_at.to_rfc3339(),
            ]
        })
        .collect();
    app.output.table("Containers", &rows);
    Ok(ExitCode::SUCCESS)
}
