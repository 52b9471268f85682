//! Source synchronization onto a unit's filesystem.
//!
//! The unit's name is the application name: it selects the read-only remote.

use std::process::Output;

use anyhow::Result;

use crate::application::ports::Unit;
use crate::domain::{GitConfig, repository};

/// Shallow-clone the application's read-only remote into the working copy.
///
/// # Errors
///
/// Returns a configuration error or the unit's execution error.
pub async fn clone(git: &GitConfig, unit: &impl Unit) -> Result<Output> {
    let command = repository::clone_command(git, unit.name())?;
    tracing::debug!(unit = unit.name(), %command, "cloning");
    unit.command(&[&command]).await
}

/// Fast-forward an existing working copy from `origin/master`.
///
/// # Errors
///
/// Returns a configuration error or the unit's execution error.
pub async fn pull(git: &GitConfig, unit: &impl Unit) -> Result<Output> {
    let command = repository::pull_command(git)?;
    tracing::debug!(unit = unit.name(), %command, "pulling");
    unit.command(&[&command]).await
}

/// Clone, or pull if the clone fails.
///
/// Any clone error triggers the pull, not only "destination already
/// exists": a network or auth failure on a fresh unit ends in a pull against
/// a missing directory, and that error is what the caller sees.
///
/// # Errors
///
/// Returns the pull's error when both steps fail.
pub async fn clone_or_pull(git: &GitConfig, unit: &impl Unit) -> Result<Output> {
    match clone(git, unit).await {
        Ok(output) => Ok(output),
        Err(e) => {
            let reason = format!("{e:#}");
            tracing::warn!(unit = unit.name(), error = %reason, "clone failed, pulling instead");
            pull(git, unit).await
        }
    }
}
