//! Domain types and accessors for provisioning configuration.
//!
//! Pure functions only: no I/O, no async, no filesystem access.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

/// Working-copy path of the application source on every unit.
pub const DEFAULT_UNIT_REPO: &str = "/home/application/current";

/// Per-command timeout applied by the production command runner.
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.tsuru/provision.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProvisionConfig {
    /// Container runtime settings.
    pub docker: DockerConfig,
    /// Source-control settings.
    pub git: GitConfig,
    /// Durable container store settings.
    pub store: StoreConfig,
}

/// Container runtime settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DockerConfig {
    /// Runtime CLI binary, `docker` unless overridden.
    pub binary: String,
    /// Namespace prefixed to every image reference.
    pub repository_namespace: Option<String>,
    /// Timeout for a single runtime command.
    pub timeout_secs: u64,
}

impl Default for DockerConfig {
    fn default() -> Self {
        Self {
            binary: "docker".to_string(),
            repository_namespace: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl DockerConfig {
    /// Namespace used for `<namespace>/<name>` image references.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] if the namespace is unset or blank.
    pub fn repository_namespace(&self) -> Result<&str, ConfigError> {
        required(
            self.repository_namespace.as_deref(),
            "docker:repository-namespace",
        )
    }

    /// Build the runtime-visible image reference `<namespace>/<name>`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] if the namespace is unset.
    pub fn image_reference(&self, name: &str) -> Result<String, ConfigError> {
        Ok(format!("{}/{name}", self.repository_namespace()?))
    }
}

/// Source-control settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GitConfig {
    /// Host serving both the authenticated and the anonymous remotes.
    pub host: Option<String>,
    /// User for authenticated pushes.
    pub user: String,
    /// Directory holding bare repositories on the git host.
    pub root: Option<String>,
    /// Working-copy path on units.
    pub unit_repo: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            host: None,
            user: "git".to_string(),
            root: None,
            unit_repo: DEFAULT_UNIT_REPO.to_string(),
        }
    }
}

impl GitConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] if the push user is blank.
    pub fn user(&self) -> Result<&str, ConfigError> {
        required(Some(self.user.as_str()), "git:user")
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] if the host is unset or blank.
    pub fn host(&self) -> Result<&str, ConfigError> {
        required(self.host.as_deref(), "git:host")
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] if the root is unset or blank.
    pub fn root(&self) -> Result<&str, ConfigError> {
        required(self.root.as_deref(), "git:root")
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] if the unit repository path is blank.
    pub fn unit_repo(&self) -> Result<&str, ConfigError> {
        required(Some(self.unit_repo.as_str()), "git:unit-repo")
    }
}

/// Durable store settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StoreConfig {
    /// Location of the container store; `~/.tsuru/containers.json` when unset.
    pub path: Option<PathBuf>,
}

fn required<'a>(value: Option<&'a str>, key: &'static str) -> Result<&'a str, ConfigError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ConfigError::Missing { key }),
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
