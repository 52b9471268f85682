//! Image commands: `commit`, `rmi`.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::{container, image};
use crate::domain::Image;
use crate::output::Mark;

/// Arguments for `tsuru-provision commit`.
#[derive(Args)]
pub struct CommitArgs {
    /// Application whose container is committed
    pub app: String,
    /// Image name, defaults to the application name
    #[arg(long)]
    pub name: Option<String>,
}

/// Arguments for `tsuru-provision rmi`.
#[derive(Args)]
pub struct RmiArgs {
    /// Runtime image id
    pub image_id: String,
}

/// Run `tsuru-provision commit`; prints the new image id.
///
/// # Errors
///
/// Returns an error if no container is recorded or the commit fails.
pub async fn commit(app: &AppContext, args: &CommitArgs) -> Result<ExitCode> {
    let c = container::find(&app.store, &args.app).await?;
    let mut img = Image::new(args.name.as_deref().unwrap_or(&args.app));
    image::commit(&app.runtime, &app.config.docker, &mut img, c.runtime_id()?).await?;
    app.output.value(&img.id);
    Ok(ExitCode::SUCCESS)
}

/// Run `tsuru-provision rmi`.
///
/// # Errors
///
/// Returns the runtime error.
pub async fn rmi(app: &AppContext, args: &RmiArgs) -> Result<ExitCode> {
    let img = Image {
        name: args.image_id.clone(),
        id: args.image_id.clone(),
    };
    image::remove(&app.runtime, &img).await?;
    app.output
        .status(Mark::Done, &format!("Image {} removed", img.id));
    Ok(ExitCode::SUCCESS)
}
