// Mempool loading is the thin I/O edge of the pipeline: one JSON record per
// file in a directory. A file that does not parse is treated like any other
// malformed record - logged and skipped - so a single bad file never aborts
// the run. An unreadable directory does.

use crate::core::Transaction;
use crate::error::Result;
use std::fs;
use std::path::Path;

/// Load every transaction record from the mempool directory, in whatever
/// order the directory listing provides. The order only decides which Merkle
/// leaf slot a transaction occupies, so it is accepted as-is.
pub fn load_mempool(dir: &Path) -> Result<Vec<Transaction>> {
    let mut transactions = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let contents = fs::read_to_string(&path)?;
        match serde_json::from_str::<Transaction>(&contents) {
            Ok(tx) => transactions.push(tx),
            Err(e) => {
                log::warn!("Skipping unparseable mempool file {}: {e}", path.display());
            }
        }
    }

    Ok(transactions)
}
