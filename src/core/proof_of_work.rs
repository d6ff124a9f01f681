use crate::core::BlockHeader;
use crate::error::{MinerError, Result};
use crate::utils::sha256_hex;

/// The difficulty target the block digest must satisfy.
///
/// Digests are compared to this string lexicographically, not as the 256-bit
/// integers they represent. For all-hex strings of equal length the two
/// orderings coincide, but the string comparison is the defined behavior and
/// must not be replaced with numeric magnitude comparison.
pub const DIFFICULTY_TARGET: &str =
    "0000ffff00000000000000000000000000000000000000000000000000000000";

/// Outcome of probing a single nonce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStep {
    /// The digest satisfies the target; the header as probed is the solution.
    Accepted { digest: String },
    /// The digest misses the target; the caller advances the nonce.
    Rejected,
}

/// Single-threaded nonce search over a block header.
///
/// The search itself is a tight blocking loop with two states - searching
/// and solved - and the per-nonce probe is pure, so one iteration can be
/// tested without running the whole search.
pub struct ProofOfWork {
    target: String,
    nonce_limit: Option<u64>,
}

impl Default for ProofOfWork {
    fn default() -> Self {
        Self::new()
    }
}

impl ProofOfWork {
    pub fn new() -> ProofOfWork {
        ProofOfWork {
            target: DIFFICULTY_TARGET.to_string(),
            nonce_limit: None,
        }
    }

    /// Override the target. Intended for tests that need an instantly
    /// satisfiable or unsatisfiable bound.
    pub fn with_target(mut self, target: &str) -> ProofOfWork {
        self.target = target.to_string();
        self
    }

    /// Cap the number of nonce attempts. When the cap is exhausted the
    /// search fails with `DeadlineExceeded` instead of looping forever.
    pub fn with_nonce_limit(mut self, limit: u64) -> ProofOfWork {
        self.nonce_limit = Some(limit);
        self
    }

    /// Probe the header at its current nonce. Pure: hashing cannot fail for
    /// a well-formed header and the header is not modified.
    pub fn try_nonce(&self, header: &BlockHeader) -> SearchStep {
        let digest = sha256_hex(header.header_string().as_bytes());
        if digest.as_str() <= self.target.as_str() {
            SearchStep::Accepted { digest }
        } else {
            SearchStep::Rejected
        }
    }

    /// Drive the search from the header's current nonce until a digest
    /// satisfies the target, returning the solved header and its digest.
    /// The returned header keeps the winning nonce.
    pub fn run(&self, mut header: BlockHeader) -> Result<(BlockHeader, String)> {
        let mut attempts: u64 = 0;
        loop {
            if let Some(limit) = self.nonce_limit {
                if attempts >= limit {
                    return Err(MinerError::DeadlineExceeded { attempts });
                }
            }
            attempts += 1;

            match self.try_nonce(&header) {
                SearchStep::Accepted { digest } => return Ok((header, digest)),
                SearchStep::Rejected => header.increment_nonce(),
            }
        }
    }

    /// Re-check a solved header against the target.
    pub fn validate(&self, header: &BlockHeader) -> bool {
        matches!(self.try_nonce(header), SearchStep::Accepted { .. })
    }
}
