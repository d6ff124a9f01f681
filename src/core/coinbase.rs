// Coinbase synthesis. The reward transaction is built fresh every run: no
// inputs, a single output paying the subsidy plus whatever fees the validated
// set collected, locked to the miner's fixed reward script. It is excluded
// from validation by construction.

use crate::core::{Transaction, TxOutput};

/// Fixed block subsidy, in the same units as the record value fields.
pub const BLOCK_SUBSIDY: i64 = 2_500_000;

/// The miner's reward script and its decoded forms. These must match exactly
/// for bit-for-bit compatible reports.
pub const REWARD_SCRIPTPUBKEY: &str = "76a9146085312a9c500ff9cc35b571b0a1e5efb7fb9f1688ac";
pub const REWARD_SCRIPT_ASM: &str =
    "OP_DUP OP_HASH160 OP_PUSHBYTES_20 6085312a9c500ff9cc35b571b0a1e5efb7fb9f16 OP_EQUALVERIFY OP_CHECKSIG";
pub const REWARD_SCRIPT_TYPE: &str = "p2pkh";
pub const REWARD_ADDRESS: &str = "19oMRmCWMYuhnP5W61ABrjjxHc6RphZh11";

const COINBASE_VERSION: i64 = 1;
const COINBASE_LOCKTIME: i64 = 0;

/// Build the block-reward transaction for the given collected fees.
pub fn build_coinbase(total_fees: i64) -> Transaction {
    let reward_output = TxOutput::new(REWARD_SCRIPTPUBKEY, BLOCK_SUBSIDY + total_fees)
        .with_script_metadata(REWARD_SCRIPT_ASM, REWARD_SCRIPT_TYPE, REWARD_ADDRESS);

    Transaction::new(
        COINBASE_VERSION,
        COINBASE_LOCKTIME,
        vec![],
        vec![reward_output],
    )
}
