use crate::core::Transaction;
use crate::error::{MinerError, Result};
use crate::utils::sha256_hex;

/// Merkle commitment over an ordered transaction set.
///
/// This tree works on hex-digest *strings*: leaves are single SHA-256 digests
/// of each transaction's canonical JSON, and parent nodes hash the
/// concatenated hex text of their children (not the underlying bytes). Both
/// choices are deliberate - in particular this is single hashing, not the
/// double-SHA-256 convention other chains use.
///
/// The root depends only on transaction content and order.
pub fn merkle_root(transactions: &[Transaction]) -> Result<String> {
    if transactions.is_empty() {
        return Err(MinerError::InvalidInput(
            "Cannot compute Merkle root over an empty transaction set".to_string(),
        ));
    }

    let mut level = leaf_hashes(transactions)?;

    while level.len() > 1 {
        // Odd layer: duplicate the last digest to make it even.
        if level.len() % 2 != 0 {
            let last = level
                .last()
                .cloned()
                .ok_or_else(|| MinerError::Mining("Merkle layer unexpectedly empty".to_string()))?;
            level.push(last);
        }

        let mut next_level = Vec::with_capacity(level.len() / 2);
        for pair in level.chunks(2) {
            next_level.push(hash_pair(&pair[0], &pair[1]));
        }
        level = next_level;
    }

    level
        .into_iter()
        .next()
        .ok_or_else(|| MinerError::Mining("Merkle reduction produced no root".to_string()))
}

/// Leaf layer: one digest per transaction, in input order.
///
/// A single-transaction set yields that leaf unchanged as the root.
pub fn leaf_hashes(transactions: &[Transaction]) -> Result<Vec<String>> {
    transactions
        .iter()
        .map(|tx| Ok(sha256_hex(tx.canonical_json()?.as_bytes())))
        .collect()
}

// Pairwise combination: hash the concatenated hex text.
fn hash_pair(left: &str, right: &str) -> String {
    let mut combined = String::with_capacity(left.len() + right.len());
    combined.push_str(left);
    combined.push_str(right);
    sha256_hex(combined.as_bytes())
}
