//! Error handling for the block assembler
//!
//! This module provides comprehensive error types for all mining operations.

use std::fmt;

/// Result type alias for mining operations
pub type Result<T> = std::result::Result<T, MinerError>;

/// Comprehensive error types for block assembly operations
#[derive(Debug, Clone)]
pub enum MinerError {
    /// File I/O errors (mempool directory, report file)
    Io(String),
    /// Serialization/deserialization errors
    Serialization(String),
    /// Transaction-level errors
    Transaction(String),
    /// An operation was asked to work on invalid input,
    /// e.g. a Merkle root over zero transactions
    InvalidInput(String),
    /// Mining errors
    Mining(String),
    /// The nonce search exhausted its iteration budget
    DeadlineExceeded { attempts: u64 },
    /// Configuration errors
    Config(String),
}

impl fmt::Display for MinerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinerError::Io(msg) => write!(f, "I/O error: {msg}"),
            MinerError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            MinerError::Transaction(msg) => write!(f, "Transaction error: {msg}"),
            MinerError::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            MinerError::Mining(msg) => write!(f, "Mining error: {msg}"),
            MinerError::DeadlineExceeded { attempts } => {
                write!(
                    f,
                    "Deadline exceeded: no satisfying nonce after {attempts} attempts"
                )
            }
            MinerError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for MinerError {}

impl From<std::io::Error> for MinerError {
    fn from(err: std::io::Error) -> Self {
        MinerError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for MinerError {
    fn from(err: serde_json::Error) -> Self {
        MinerError::Serialization(err.to_string())
    }
}
