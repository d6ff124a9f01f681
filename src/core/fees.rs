//! Fee accounting over the validated transaction set.
//!
//! Only the aggregate matters downstream: the coinbase pays out one lump sum,
//! so no per-transaction fee is tracked.

use crate::core::Transaction;

/// Net fees across the whole set: for every transaction, the sum of its
/// inputs' previous-output values minus the sum of its output values,
/// accumulated into one running total.
///
/// The result may be negative if outputs exceed declared input values; it is
/// deliberately not clamped. The caller decides what a negative total means.
pub fn total_fees(transactions: &[Transaction]) -> i64 {
    let mut total: i64 = 0;
    for tx in transactions {
        for input in tx.get_vin().unwrap_or(&[]) {
            total += input.prevout_value();
        }
        for output in tx.get_vout().unwrap_or(&[]) {
            total -= output.get_value().unwrap_or(0);
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Transaction {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn test_empty_set_has_zero_fees() {
        assert_eq!(total_fees(&[]), 0);
    }

    #[test]
    fn test_single_transaction_fee() {
        let tx = parse(
            r#"{"vin":[{"scriptSig":"aa","prevout":{"txid":"x","index":0,"value":10000}}],
                "vout":[{"scriptpubkey":"ab","value":9000}]}"#,
        );
        assert_eq!(total_fees(&[tx]), 1000);
    }

    #[test]
    fn test_fees_accumulate_across_transactions() {
        let a = parse(
            r#"{"vin":[{"scriptSig":"aa","prevout":{"txid":"x","index":0,"value":5000}},
                       {"scriptSig":"bb","prevout":{"txid":"y","index":1,"value":3000}}],
                "vout":[{"scriptpubkey":"ab","value":7000}]}"#,
        );
        let b = parse(
            r#"{"vin":[{"scriptSig":"cc","prevout":{"txid":"z","index":0,"value":2000}}],
                "vout":[{"scriptpubkey":"cd","value":1500}]}"#,
        );
        // (5000 + 3000 - 7000) + (2000 - 1500) = 1000 + 500
        assert_eq!(total_fees(&[a, b]), 1500);
    }

    #[test]
    fn test_negative_total_is_not_clamped() {
        let tx = parse(
            r#"{"vin":[{"scriptSig":"aa","prevout":{"txid":"x","index":0,"value":100}}],
                "vout":[{"scriptpubkey":"ab","value":500}]}"#,
        );
        assert_eq!(total_fees(&[tx]), -400);
    }

    #[test]
    fn test_missing_prevout_value_counts_as_zero() {
        let tx = parse(
            r#"{"vin":[{"scriptSig":"aa","prevout":{"txid":"x","index":0}}],
                "vout":[{"scriptpubkey":"ab","value":300}]}"#,
        );
        assert_eq!(total_fees(&[tx]), -300);
    }
}
