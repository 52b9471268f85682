//! Infrastructure implementation of the runtime port traits.
//!
//! `DockerRuntime<R>` owns the exact shape of every docker CLI call and
//! routes it through a `CommandRunner`. Spawn and timeout errors from the
//! runner are returned as-is; a non-zero exit becomes
//! [`ProvisionError::CommandFailed`](crate::domain::ProvisionError::CommandFailed).

use std::process::Output;
use std::time::Duration;

use anyhow::Result;

use crate::application::ports::{CommandRunner, ContainerRuntime, ImageRuntime};
use crate::domain::DockerConfig;
use crate::infra::command_runner::{TokioCommandRunner, check_status, display_command};

/// Infrastructure adapter that routes all docker CLI calls through a `CommandRunner`.
///
/// Generic over `R: CommandRunner` so that tests can inject a mock runner
/// without spawning real processes.
pub struct DockerRuntime<R: CommandRunner> {
    runner: R,
    binary: String,
}

impl<R: CommandRunner> DockerRuntime<R> {
    /// Create a runtime adapter invoking `binary` (normally `docker`).
    pub fn new(runner: R, binary: impl Into<String>) -> Self {
        Self {
            runner,
            binary: binary.into(),
        }
    }

    async fn docker(&self, args: &[&str]) -> Result<Output> {
        tracing::debug!(command = %display_command(&self.binary, args), "running");
        let output = self.runner.run(&self.binary, args).await?;
        check_status(&self.binary, args, output)
    }
}

impl DockerRuntime<TokioCommandRunner> {
    /// Convenience constructor for production use.
    #[must_use]
    pub fn from_config(docker: &DockerConfig) -> Self {
        Self::new(
            TokioCommandRunner::new(Duration::from_secs(docker.timeout_secs)),
            docker.binary.clone(),
        )
    }
}

impl<R: CommandRunner> ContainerRuntime for DockerRuntime<R> {
    async fn run_detached(&self, image: &str, command: &str) -> Result<Output> {
        self.docker(&["run", "-d", image, command]).await
    }

    async fn stop(&self, id: &str) -> Result<Output> {
        self.docker(&["stop", id]).await
    }

    async fn remove(&self, id: &str) -> Result<Output> {
        self.docker(&["rm", id]).await
    }

    async fn inspect(&self, id: &str) -> Result<Output> {
        self.docker(&["inspect", id]).await
    }

    async fn exec(&self, id: &str, script: &str) -> Result<Output> {
        self.docker(&["exec", id, "/bin/sh", "-c", script]).await
    }
}

impl<R: CommandRunner> ImageRuntime for DockerRuntime<R> {
    async fn commit(&self, container_id: &str, tag: &str) -> Result<Output> {
        self.docker(&["commit", container_id, tag]).await
    }

    async fn remove_image(&self, id: &str) -> Result<Output> {
        self.docker(&["rmi", id]).await
    }
}
