//! Configuration management
//!
//! Runtime configuration: where the mempool lives and where the report goes.
//! Defaults come from the environment; CLI arguments override them.

pub mod settings;

pub use settings::{Config, GLOBAL_CONFIG};
