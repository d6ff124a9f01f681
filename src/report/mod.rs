//! Report formatting
//!
//! The end of the pipeline: turn the solved header, the coinbase and the
//! validated set into the human-readable text report. This is a collaborator
//! boundary - nothing here feeds back into assembly, and the report is only
//! written once a solution exists.

use crate::core::{BlockHeader, Transaction};
use crate::error::Result;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Render the fixed multi-line report layout.
///
/// Per validated transaction one line is emitted carrying the previous
/// transaction id referenced by its first input, JSON-quoted, in the set's
/// original order.
pub fn format_report(
    header: &BlockHeader,
    coinbase: &Transaction,
    validated: &[Transaction],
) -> Result<String> {
    let mut out = String::new();

    out.push_str("Block Header:\n");
    let _ = writeln!(out, "  Version : {}", header.get_version());
    let _ = writeln!(out, "  Previous BlockHash : {}", header.get_pre_block_hash());
    let _ = writeln!(out, "  MerkleRoot : {}", header.get_merkle_root());
    let _ = writeln!(out, "  TimeStamp : {}", header.get_timestamp());
    let _ = writeln!(out, "  Bits : {}", header.get_bits());
    let _ = writeln!(out, "  Nonce : {}", header.get_nonce());

    let _ = writeln!(
        out,
        "Serialized Coinbase Transaction: {}",
        coinbase.canonical_json()?
    );

    for tx in validated {
        let _ = writeln!(
            out,
            "Transaction ID: {}",
            serde_json::to_string(&tx.lead_input_txid())?
        );
    }

    Ok(out)
}

/// Format and write the report to the output file in one step.
pub fn write_report(
    path: &Path,
    header: &BlockHeader,
    coinbase: &Transaction,
    validated: &[Transaction],
) -> Result<()> {
    let contents = format_report(header, coinbase, validated)?;
    fs::write(path, contents)?;
    Ok(())
}
