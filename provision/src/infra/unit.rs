//! `Unit` adapter over a runtime container.
//!
//! Commands are joined into one shell line and run with
//! `docker exec <id> /bin/sh -c <line>`.

use std::process::Output;

use anyhow::Result;

use crate::application::ports::{ContainerRuntime, Unit};
use crate::domain::Container;

/// A created container addressed as a unit.
pub struct DockerExecUnit<'a, T: ContainerRuntime> {
    runtime: &'a T,
    container: Container,
}

impl<'a, T: ContainerRuntime> DockerExecUnit<'a, T> {
    /// # Errors
    ///
    /// Returns [`ProvisionError::NotCreated`](crate::domain::ProvisionError::NotCreated)
    /// if the container has no runtime id.
    pub fn new(runtime: &'a T, container: Container) -> Result<Self> {
        container.runtime_id()?;
        Ok(Self { runtime, container })
    }
}

impl<T: ContainerRuntime> Unit for DockerExecUnit<'_, T> {
    fn name(&self) -> &str {
        &self.container.name
    }

    async fn command(&self, args: &[&str]) -> Result<Output> {
        self.runtime.exec(&self.container.id, &args.join(" ")).await
    }
}
