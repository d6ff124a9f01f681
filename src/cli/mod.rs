//! Command-line interface
//!
//! Argument definitions for the blocksmith binary.

pub mod commands;

pub use commands::{Command, Opt};
