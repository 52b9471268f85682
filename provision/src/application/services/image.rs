//! Image snapshots committed from running containers.

use anyhow::Result;

use crate::application::ports::ImageRuntime;
use crate::domain::{DockerConfig, Image};

/// Commit `container_id` as `<namespace>/<image.name>` and record the new
/// image id on `image`.
///
/// # Errors
///
/// Returns an error if the namespace is not configured, the runtime fails,
/// or the runtime prints no image id. `image` is untouched on error.
pub async fn commit(
    runtime: &impl ImageRuntime,
    docker: &DockerConfig,
    image: &mut Image,
    container_id: &str,
) -> Result<()> {
    let tag = docker.image_reference(&image.name)?;
    let output = runtime.commit(container_id, &tag).await?;
    let id = String::from_utf8_lossy(&output.stdout).trim().to_string();
    anyhow::ensure!(!id.is_empty(), "runtime returned no image id for {tag}");
    tracing::info!(image = %tag, id = %id, "image committed");
    image.id = id;
    Ok(())
}

/// Remove a committed image.
///
/// # Errors
///
/// Returns [`ProvisionError::NotCommitted`](crate::domain::ProvisionError::NotCommitted)
/// for an empty id, otherwise the runtime error unchanged.
pub async fn remove(runtime: &impl ImageRuntime, image: &Image) -> Result<()> {
    runtime.remove_image(image.runtime_id()?).await?;
    Ok(())
}
