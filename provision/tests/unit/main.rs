//! Unit tests for tsuru-provision
//!
//! These tests use mocked dependencies and run fast without external I/O.

mod helpers;
mod mocks;
