//! Container lifecycle: create, start, stop, remove, inspect.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use anyhow::{Context, Result};
use chrono::Utc;

use crate::application::ports::{ContainerRuntime, ContainerStore};
use crate::domain::container::{deploy_command, parse_inspect_ip};
use crate::domain::error::ProvisionError;
use crate::domain::{App, Container, ContainerRecord, CreateOutcome, ProvisionConfig, repository};

/// Create a container for `app` from its runtime-type image.
///
/// The container boots `/var/lib/tsuru/deploy <clone-url>`, which clones the
/// application's read-only remote inside the container. On success the
/// record is written to `store`.
///
/// A runtime failure is logged as `Error creating container <name>` and
/// returned as [`CreateOutcome::Failed`], not as an `Err`.
///
/// # Errors
///
/// Returns an error if the namespace or git host is not configured, or if
/// the record cannot be persisted after the container was created.
pub async fn create(
    runtime: &impl ContainerRuntime,
    store: &impl ContainerStore,
    config: &ProvisionConfig,
    app: &App,
) -> Result<CreateOutcome> {
    let image = config.docker.image_reference(&app.app_type)?;
    let clone_url = repository::read_only_url(&config.git, &app.name)?;
    let command = deploy_command(&clone_url);

    let id = match runtime.run_detached(&image, &command).await {
        Ok(output) => String::from_utf8_lossy(&output.stdout).trim().to_string(),
        Err(e) => return Ok(creation_failed(app, format!("{e:#}"))),
    };
    if id.is_empty() {
        return Ok(creation_failed(
            app,
            "runtime returned no container id".to_string(),
        ));
    }

    let record = ContainerRecord {
        name: app.name.clone(),
        app_type: app.app_type.clone(),
        id: id.clone(),
        created_at: Utc::now(),
    };
    store
        .insert(&record)
        .await
        .with_context(|| format!("recording container {}", app.name))?;

    tracing::info!(app = %app.name, id = %id, image = %image, units = app.units, "container created");
    Ok(CreateOutcome::Created(Container::new(&app.name, id)))
}

fn creation_failed(app: &App, reason: String) -> CreateOutcome {
    tracing::error!("Error creating container {}: {reason}", app.name);
    CreateOutcome::Failed {
        container: Container::new(&app.name, ""),
        reason,
    }
}

/// Start a container. The deploy command already runs on `create`, so
/// there is nothing to issue yet.
///
/// # Errors
///
/// Never fails today; the signature reserves room for a runtime `start`.
#[allow(clippy::unused_async)]
pub async fn start(container: &Container) -> Result<()> {
    tracing::debug!(container = %container.name, "start is a no-op");
    Ok(())
}

/// Stop a running container.
///
/// # Errors
///
/// Returns [`ProvisionError::NotCreated`] for an empty id, otherwise the
/// runtime error unchanged.
pub async fn stop(runtime: &impl ContainerRuntime, container: &Container) -> Result<()> {
    runtime.stop(container.runtime_id()?).await?;
    Ok(())
}

/// Remove a container from the runtime. The store record is left alone.
///
/// # Errors
///
/// Returns [`ProvisionError::NotCreated`] for an empty id, otherwise the
/// runtime error unchanged.
pub async fn remove(runtime: &impl ContainerRuntime, container: &Container) -> Result<()> {
    runtime.remove(container.runtime_id()?).await?;
    Ok(())
}

/// IP address the runtime assigned to the container.
///
/// # Errors
///
/// Returns the runtime error, or [`ProvisionError::InspectParse`] if the
/// inspect output has no `NetworkSettings.IpAddress`.
pub async fn ip(runtime: &impl ContainerRuntime, container: &Container) -> Result<String> {
    let output = runtime.inspect(container.runtime_id()?).await?;
    Ok(parse_inspect_ip(&output.stdout)?)
}

/// Look up the recorded container for an application.
///
/// # Errors
///
/// Returns [`ProvisionError::UnknownApp`] when no record exists.
pub async fn find(store: &impl ContainerStore, app_name: &str) -> Result<Container> {
    store
        .get(app_name)
        .await?
        .map(|r| r.container())
        .ok_or_else(|| ProvisionError::UnknownApp(app_name.to_string()).into())
}

/// Remove the container from the runtime, then drop its record.
///
/// The record survives if the runtime refuses, so a retry can find it.
///
/// # Errors
///
/// Returns the runtime or store error.
pub async fn destroy(
    runtime: &impl ContainerRuntime,
    store: &impl ContainerStore,
    container: &Container,
) -> Result<()> {
    if container.is_created() {
        remove(runtime, container).await?;
    }
    store
        .remove(&container.name)
        .await
        .with_context(|| format!("dropping record for {}", container.name))?;
    tracing::info!(app = %container.name, "container destroyed");
    Ok(())
}
