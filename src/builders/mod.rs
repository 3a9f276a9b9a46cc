//! Fluent builders.

pub mod config;

pub use config::{auth_config, ClientConfigBuilder};
