//! Core block-assembly functionality
//!
//! This module contains the mining pipeline components: transaction records,
//! structural validation, fee accounting, coinbase synthesis, the Merkle
//! commitment and the proof-of-work search.

pub mod block;
pub mod coinbase;
pub mod fees;
pub mod merkle;
pub mod proof_of_work;
pub mod transaction;
pub mod validator;

pub use block::{assemble_block, BlockHeader, BLOCK_VERSION, DIFFICULTY_BITS, PREV_BLOCK_HASH};
pub use coinbase::{build_coinbase, BLOCK_SUBSIDY, REWARD_ADDRESS, REWARD_SCRIPTPUBKEY};
pub use fees::total_fees;
pub use merkle::{leaf_hashes, merkle_root};
pub use proof_of_work::{ProofOfWork, SearchStep, DIFFICULTY_TARGET};
pub use transaction::{PrevOut, Transaction, TxInput, TxOutput};
pub use validator::{filter_valid, validate_transaction, DiagnosticSink, LogSink};
