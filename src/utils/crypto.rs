use data_encoding::HEXLOWER;
use ring::digest::{Context, SHA256};

use crate::error::{MinerError, Result};
use std::time::{SystemTime, UNIX_EPOCH};

// I use whole seconds here because the block header timestamp is defined in
// seconds since the epoch, not milliseconds.
pub fn current_timestamp() -> Result<u64> {
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| MinerError::Mining(format!("System time error: {e}")))?;

    Ok(duration.as_secs())
}

pub fn sha256_digest(data: &[u8]) -> Vec<u8> {
    let mut context = Context::new(&SHA256);
    context.update(data);
    let digest = context.finish();
    digest.as_ref().to_vec()
}

/// Single SHA-256 of `data`, returned as a lowercase 64-character hex string.
///
/// Every digest in this crate (Merkle leaves, Merkle nodes, block hashes) is
/// one of these strings; they are combined and compared as text.
pub fn sha256_hex(data: &[u8]) -> String {
    HEXLOWER.encode(sha256_digest(data).as_slice())
}
