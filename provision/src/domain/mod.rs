//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod container;
pub mod error;
pub mod repository;

pub use config::{DockerConfig, GitConfig, ProvisionConfig, StoreConfig};
pub use container::{App, Container, ContainerRecord, CreateOutcome, Image};
pub use error::{ConfigError, ProvisionError};
