// Structural validation of mempool records. This is presence checking only:
// I verify that the fields a well-formed transaction must carry exist, not
// that signatures verify or that scripts execute. A transaction that fails
// any rule is dropped from the candidate set; the run itself continues.

use crate::core::Transaction;

/// Where rejection reasons go. The validator stays pure apart from reporting
/// through this sink, so tests can capture diagnostics instead of scraping
/// console output.
pub trait DiagnosticSink {
    fn reject(&mut self, txid: &str, reason: &str);
}

/// Production sink: rejection reasons go to the logger.
#[derive(Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn reject(&mut self, txid: &str, reason: &str) {
        log::warn!("Transaction {txid} is invalid: {reason}");
    }
}

/// Check structural well-formedness of a single transaction record.
///
/// All rules must pass:
/// 1. `vin` is present (an empty array still passes - presence only).
/// 2. `vout` is present.
/// 3. Every input carries `scriptSig` and a `prevout` with a `txid` and a
///    non-null `index`.
/// 4. Every output carries `scriptpubkey` and a non-null `value`.
///
/// The synthesized coinbase is never run through this check; it is excluded
/// by construction.
pub fn validate_transaction(tx: &Transaction, sink: &mut dyn DiagnosticSink) -> bool {
    let vin = match tx.get_vin() {
        Some(vin) => vin,
        None => {
            sink.reject(tx.display_txid(), "missing or invalid vin");
            return false;
        }
    };
    let vout = match tx.get_vout() {
        Some(vout) => vout,
        None => {
            sink.reject(tx.display_txid(), "missing or invalid vout");
            return false;
        }
    };

    for (idx, input) in vin.iter().enumerate() {
        let prevout_ok = input
            .get_prevout()
            .map(|prevout| prevout.get_txid().is_some() && prevout.get_index().is_some())
            .unwrap_or(false);
        if input.get_script_sig().is_none() || !prevout_ok {
            sink.reject(
                tx.display_txid(),
                &format!("input {idx} is missing required fields"),
            );
            return false;
        }
    }

    for (idx, output) in vout.iter().enumerate() {
        if output.get_scriptpubkey().is_none() || output.get_value().is_none() {
            sink.reject(
                tx.display_txid(),
                &format!("output {idx} is missing required fields"),
            );
            return false;
        }
    }

    true
}

/// Run the validator over a loaded set, keeping the survivors in their
/// original order. Order matters downstream: it fixes the Merkle leaf slots
/// and the report's transaction listing.
pub fn filter_valid(
    transactions: Vec<Transaction>,
    sink: &mut dyn DiagnosticSink,
) -> Vec<Transaction> {
    transactions
        .into_iter()
        .filter(|tx| validate_transaction(tx, sink))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test sink that records every rejection.
    #[derive(Debug, Default)]
    pub struct CollectingSink {
        pub rejections: Vec<(String, String)>,
    }

    impl DiagnosticSink for CollectingSink {
        fn reject(&mut self, txid: &str, reason: &str) {
            self.rejections.push((txid.to_string(), reason.to_string()));
        }
    }

    fn parse(raw: &str) -> Transaction {
        serde_json::from_str(raw).unwrap()
    }

    fn well_formed() -> Transaction {
        parse(
            r#"{"version":1,"locktime":0,
                "vin":[{"scriptSig":"47aa","prevout":{"txid":"cafe","index":0,"value":9000}}],
                "vout":[{"scriptpubkey":"76a9","value":8000}],
                "txid":"beef"}"#,
        )
    }

    #[test]
    fn test_well_formed_transaction_passes() {
        let mut sink = CollectingSink::default();
        assert!(validate_transaction(&well_formed(), &mut sink));
        assert!(sink.rejections.is_empty());
    }

    #[test]
    fn test_missing_vin_rejected() {
        let mut sink = CollectingSink::default();
        let tx = parse(r#"{"vout":[{"scriptpubkey":"76a9","value":1}],"txid":"t1"}"#);
        assert!(!validate_transaction(&tx, &mut sink));
        assert_eq!(sink.rejections.len(), 1);
        assert_eq!(sink.rejections[0].0, "t1");
        assert!(sink.rejections[0].1.contains("vin"));
    }

    #[test]
    fn test_missing_vout_rejected() {
        let mut sink = CollectingSink::default();
        let tx = parse(r#"{"vin":[],"txid":"t2"}"#);
        assert!(!validate_transaction(&tx, &mut sink));
        assert!(sink.rejections[0].1.contains("vout"));
    }

    #[test]
    fn test_empty_vin_passes_presence_check() {
        // Presence and type only, never non-emptiness. An externally supplied
        // coinbase-like record with vin: [] therefore passes this check.
        let mut sink = CollectingSink::default();
        let tx = parse(r#"{"vin":[],"vout":[{"scriptpubkey":"76a9","value":1}]}"#);
        assert!(validate_transaction(&tx, &mut sink));
    }

    #[test]
    fn test_input_missing_script_sig_rejected() {
        let mut sink = CollectingSink::default();
        let tx = parse(
            r#"{"vin":[{"prevout":{"txid":"cafe","index":0,"value":1}}],
                "vout":[{"scriptpubkey":"76a9","value":1}],"txid":"t3"}"#,
        );
        assert!(!validate_transaction(&tx, &mut sink));
        assert!(sink.rejections[0].1.contains("input 0"));
    }

    #[test]
    fn test_input_missing_prevout_rejected() {
        let mut sink = CollectingSink::default();
        let tx = parse(
            r#"{"vin":[{"scriptSig":"aa"}],"vout":[{"scriptpubkey":"76a9","value":1}]}"#,
        );
        assert!(!validate_transaction(&tx, &mut sink));
    }

    #[test]
    fn test_input_null_index_rejected() {
        let mut sink = CollectingSink::default();
        let tx = parse(
            r#"{"vin":[{"scriptSig":"aa","prevout":{"txid":"cafe","index":null,"value":1}}],
                "vout":[{"scriptpubkey":"76a9","value":1}]}"#,
        );
        assert!(!validate_transaction(&tx, &mut sink));
    }

    #[test]
    fn test_input_missing_prevout_txid_rejected() {
        let mut sink = CollectingSink::default();
        let tx = parse(
            r#"{"vin":[{"scriptSig":"aa","prevout":{"index":0,"value":1}}],
                "vout":[{"scriptpubkey":"76a9","value":1}]}"#,
        );
        assert!(!validate_transaction(&tx, &mut sink));
    }

    #[test]
    fn test_output_missing_value_rejected() {
        let mut sink = CollectingSink::default();
        let tx = parse(
            r#"{"vin":[{"scriptSig":"aa","prevout":{"txid":"cafe","index":0,"value":1}}],
                "vout":[{"scriptpubkey":"76a9"}],"txid":"t4"}"#,
        );
        assert!(!validate_transaction(&tx, &mut sink));
        assert!(sink.rejections[0].1.contains("output 0"));
    }

    #[test]
    fn test_output_missing_scriptpubkey_rejected() {
        let mut sink = CollectingSink::default();
        let tx = parse(
            r#"{"vin":[{"scriptSig":"aa","prevout":{"txid":"cafe","index":0,"value":1}}],
                "vout":[{"value":5}]}"#,
        );
        assert!(!validate_transaction(&tx, &mut sink));
    }

    #[test]
    fn test_zero_value_output_passes() {
        // Zero is a present value; only null/absent is rejected.
        let mut sink = CollectingSink::default();
        let tx = parse(
            r#"{"vin":[{"scriptSig":"aa","prevout":{"txid":"cafe","index":0,"value":1}}],
                "vout":[{"scriptpubkey":"76a9","value":0}]}"#,
        );
        assert!(validate_transaction(&tx, &mut sink));
    }

    #[test]
    fn test_filter_valid_preserves_order_and_drops_rejects() {
        let mut sink = CollectingSink::default();
        let txs = vec![
            well_formed(),
            parse(r#"{"vin":[],"txid":"broken"}"#),
            parse(r#"{"vin":[],"vout":[{"scriptpubkey":"ab","value":2}],"txid":"second"}"#),
        ];
        let valid = filter_valid(txs, &mut sink);
        assert_eq!(valid.len(), 2);
        assert_eq!(valid[0].get_txid(), Some("beef"));
        assert_eq!(valid[1].get_txid(), Some("second"));
        assert_eq!(sink.rejections.len(), 1);
        assert_eq!(sink.rejections[0].0, "broken");
    }
}
