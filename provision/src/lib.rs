//! Container provisioning and repository sync for application units.
//!
//! Exposes every layer so the binary and the integration tests share one
//! implementation.

#![cfg_attr(test, allow(clippy::expect_used))]

pub mod app;
pub mod application;
pub mod cli;
pub mod commands;
pub mod domain;
pub mod infra;
pub mod output;
