use crate::core::{merkle_root, ProofOfWork, Transaction};
use crate::error::Result;
use crate::utils::current_timestamp;
use log::info;
use serde::{Deserialize, Serialize};

/// Fixed block version for every assembled candidate.
pub const BLOCK_VERSION: u32 = 1;

/// Placeholder previous-block linkage. This system never consults chain
/// state, so every candidate points at the all-zero genesis hash.
pub const PREV_BLOCK_HASH: &str =
    "0000000000000000000000000000000000000000000000000000000000000000";

/// Packed difficulty representation. Opaque to this system beyond being
/// copied into the header string (in decimal, like every other field).
pub const DIFFICULTY_BITS: u32 = 0x1903a30c;

/// The candidate block header. Created once per run with nonce 0, mutated
/// only by the proof-of-work search, finalized when the search succeeds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockHeader {
    version: u32,
    pre_block_hash: String,
    merkle_root: String,
    timestamp: u64,
    bits: u32,
    nonce: u64,
}

impl BlockHeader {
    /// Header stamped with the current wall-clock time in whole seconds.
    /// The timestamp is fixed here; the search never re-randomizes it.
    pub fn new(merkle_root: String) -> Result<BlockHeader> {
        Ok(Self::with_timestamp(merkle_root, current_timestamp()?))
    }

    /// Header with an explicit timestamp, for deterministic construction.
    pub fn with_timestamp(merkle_root: String, timestamp: u64) -> BlockHeader {
        BlockHeader {
            version: BLOCK_VERSION,
            pre_block_hash: PREV_BLOCK_HASH.to_string(),
            merkle_root,
            timestamp,
            bits: DIFFICULTY_BITS,
            nonce: 0,
        }
    }

    pub fn get_version(&self) -> u32 {
        self.version
    }

    pub fn get_pre_block_hash(&self) -> &str {
        self.pre_block_hash.as_str()
    }

    pub fn get_merkle_root(&self) -> &str {
        self.merkle_root.as_str()
    }

    pub fn get_timestamp(&self) -> u64 {
        self.timestamp
    }

    pub fn get_bits(&self) -> u32 {
        self.bits
    }

    pub fn get_nonce(&self) -> u64 {
        self.nonce
    }

    pub fn increment_nonce(&mut self) {
        self.nonce += 1;
    }

    /// Canonical text the block hash is computed over: version, previous
    /// hash, Merkle root, timestamp, bits and nonce concatenated in that
    /// fixed order, every numeric field in decimal.
    pub fn header_string(&self) -> String {
        format!(
            "{}{}{}{}{}{}",
            self.version,
            self.pre_block_hash,
            self.merkle_root,
            self.timestamp,
            self.bits,
            self.nonce
        )
    }
}

/// Assemble a candidate block: commit to the validated set with the coinbase
/// appended as the final Merkle leaf, then drive the nonce search.
///
/// Returns the solved header together with its accepted digest. With
/// `nonce_budget = None` the search is unbounded, matching the baseline
/// contract; a budget turns a hopeless target into `DeadlineExceeded`
/// instead of an infinite loop.
pub fn assemble_block(
    validated: &[Transaction],
    coinbase: &Transaction,
    nonce_budget: Option<u64>,
) -> Result<(BlockHeader, String)> {
    let mut leaves = validated.to_vec();
    leaves.push(coinbase.clone());
    let root = merkle_root(&leaves)?;

    let header = BlockHeader::new(root)?;
    info!(
        "Starting proof-of-work over {} transactions (merkle root {})",
        leaves.len(),
        header.get_merkle_root()
    );

    let mut pow = ProofOfWork::new();
    if let Some(budget) = nonce_budget {
        pow = pow.with_nonce_limit(budget);
    }
    let (solved, digest) = pow.run(header)?;
    info!(
        "Proof-of-work completed: nonce {} digest {digest}",
        solved.get_nonce()
    );
    Ok((solved, digest))
}
