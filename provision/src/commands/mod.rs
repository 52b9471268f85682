//! Command handlers, one module per command family.

pub mod config;
pub mod container;
pub mod image;
pub mod repo;
