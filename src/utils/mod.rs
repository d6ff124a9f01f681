//! Utility functions
//!
//! This module provides the hashing and timestamp helpers shared by the
//! mining pipeline.

pub mod crypto;

pub use crypto::{current_timestamp, sha256_digest, sha256_hex};
