//! # Blocksmith - My Candidate Block Assembler
//!
//! This is my single-shot mining pipeline in Rust. When I come back to this
//! code, here's what I need to remember:
//!
//! ## What I Built
//! - **Structural Validation**: mempool records are presence-checked, never
//!   cryptographically verified - a broken record is dropped, not fatal
//! - **Fee Accounting**: one aggregate net fee over the validated set
//! - **Coinbase Synthesis**: fixed subsidy plus fees, paid to my reward script
//! - **Merkle Commitment**: single SHA-256 over canonical JSON, pairwise
//!   reduction over hex-string concatenation
//! - **Proof-of-Work**: nonce search against a lexicographic hex target
//!
//! ## How I Organized My Code
//! - `core/`: the pipeline itself (records, validator, fees, coinbase,
//!   merkle, header, nonce search)
//! - `storage/`: mempool directory loading
//! - `report/`: the textual block report
//! - `config/`: mempool/output locations
//! - `utils/`: hashing and timestamps
//! - `cli/`: command-line interface
//!
//! ## Key Design Decisions I Made
//! - Every stage takes an immutable snapshot and returns a new value; only
//!   the header is mutated, and only by the nonce search that owns it
//! - Digests are hex strings end to end, and the target check compares them
//!   as text - that is the defined behavior, not an oversight
//! - Rejection diagnostics go through an injected sink so the validator
//!   stays pure and testable
//!
//! The whole model is scoped to one assembly run and discarded after the
//! report is written. There is no chain state, no UTXO set and no network.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod report;
pub mod storage;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::cli::{Command, Opt};
pub use crate::config::{Config, GLOBAL_CONFIG};
pub use crate::core::{
    assemble_block, build_coinbase, filter_valid, leaf_hashes, merkle_root, total_fees,
    validate_transaction, BlockHeader, DiagnosticSink, LogSink, PrevOut, ProofOfWork, SearchStep,
    Transaction, TxInput, TxOutput, BLOCK_SUBSIDY, BLOCK_VERSION, DIFFICULTY_BITS,
    DIFFICULTY_TARGET, PREV_BLOCK_HASH, REWARD_ADDRESS, REWARD_SCRIPTPUBKEY,
};
pub use crate::error::{MinerError, Result};
pub use crate::report::{format_report, write_report};
pub use crate::storage::load_mempool;
pub use crate::utils::{current_timestamp, sha256_digest, sha256_hex};
