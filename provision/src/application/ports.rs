//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::PathBuf;
use std::process::Output;

use anyhow::Result;

use crate::domain::{ContainerRecord, ProvisionConfig};

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its output.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds the
    /// runner's timeout. A non-zero exit is NOT an error at this level.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
}

// ── Runtime Ports ─────────────────────────────────────────────────────────────

/// Container operations against the runtime CLI.
///
/// Every method issues exactly one command and fails on non-zero exit.
#[allow(async_fn_in_trait)]
pub trait ContainerRuntime {
    /// `run -d <image> <command>`; stdout carries the new container id.
    async fn run_detached(&self, image: &str, command: &str) -> Result<Output>;
    /// `stop <id>`.
    async fn stop(&self, id: &str) -> Result<Output>;
    /// `rm <id>`.
    async fn remove(&self, id: &str) -> Result<Output>;
    /// `inspect <id>`; stdout carries the JSON description.
    async fn inspect(&self, id: &str) -> Result<Output>;
    /// `exec <id> /bin/sh -c <script>`.
    async fn exec(&self, id: &str, script: &str) -> Result<Output>;
}

/// Image operations against the runtime CLI.
#[allow(async_fn_in_trait)]
pub trait ImageRuntime {
    /// `commit <container-id> <tag>`; stdout carries the new image id.
    async fn commit(&self, container_id: &str, tag: &str) -> Result<Output>;
    /// `rmi <id>`.
    async fn remove_image(&self, id: &str) -> Result<Output>;
}

// ── Unit Port ─────────────────────────────────────────────────────────────────

/// An addressable execution target that accepts shell commands.
#[allow(async_fn_in_trait)]
pub trait Unit {
    /// Name of the unit; doubles as the application name for repository URLs.
    fn name(&self) -> &str;
    /// Run a command on the unit, capturing stdout and stderr.
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot run or exits non-zero.
    async fn command(&self, args: &[&str]) -> Result<Output>;
}

// ── Store Ports ───────────────────────────────────────────────────────────────

/// Durable container records keyed by application name.
#[allow(async_fn_in_trait)]
pub trait ContainerStore {
    /// Insert or replace the record for `record.name`.
    async fn insert(&self, record: &ContainerRecord) -> Result<()>;
    /// Load the record for `name`, if any.
    async fn get(&self, name: &str) -> Result<Option<ContainerRecord>>;
    /// Drop the record for `name`; returns whether one existed.
    async fn remove(&self, name: &str) -> Result<bool>;
    /// All records, ordered by name.
    async fn list(&self) -> Result<Vec<ContainerRecord>>;
}

/// Abstracts loading of the provisioning configuration.
pub trait ConfigStore {
    /// Load the configuration, falling back to defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    fn load(&self) -> Result<ProvisionConfig>;
    /// Location of the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    fn path(&self) -> Result<PathBuf>;
}
