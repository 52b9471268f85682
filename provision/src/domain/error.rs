//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Provisioning errors ───────────────────────────────────────────────────────

/// Errors raised while driving the container runtime or a unit.
#[derive(Debug, Error)]
pub enum ProvisionError {
    /// The external command ran but exited non-zero.
    #[error("`{command}` exited with {}: {stderr}", code.map_or_else(|| "signal".to_string(), |c| format!("code {c}")))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    /// `docker inspect` output could not be decoded into the expected shape.
    #[error("cannot parse inspect output: {0}")]
    InspectParse(String),

    /// The container has no runtime id, so creation never succeeded.
    #[error("container '{name}' was never created (empty id)")]
    NotCreated { name: String },

    /// The image has no runtime id, so it was never committed.
    #[error("image '{name}' was never committed (empty id)")]
    NotCommitted { name: String },

    /// No record exists in the container store for the application.
    #[error("no container recorded for app '{0}'")]
    UnknownApp(String),
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to missing or invalid settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required setting '{key}'")]
    Missing { key: &'static str },
}
