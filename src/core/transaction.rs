// This file defines the transaction records the assembler works on.
// The mempool hands me self-describing JSON, and a record is allowed to be
// structurally broken - that's exactly what the validator has to detect.
// So every checked field is an Option: "absent in the file" maps to None
// instead of failing the whole parse.

use crate::error::Result;
use serde::{Deserialize, Serialize};

// A reference to the output being spent, with its value already resolved by
// whoever filled the mempool. I never look the value up myself; there is no
// UTXO set in this system.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrevOut {
    #[serde(skip_serializing_if = "Option::is_none")]
    txid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    index: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<i64>,
}

impl PrevOut {
    pub fn new(txid: &str, index: u64, value: i64) -> PrevOut {
        PrevOut {
            txid: Some(txid.to_string()),
            index: Some(index),
            value: Some(value),
        }
    }

    pub fn get_txid(&self) -> Option<&str> {
        self.txid.as_deref()
    }

    pub fn get_index(&self) -> Option<u64> {
        self.index
    }

    pub fn get_value(&self) -> Option<i64> {
        self.value
    }
}

// This represents a transaction input - it references a previous transaction
// output and carries an unlocking-script placeholder. I only check that the
// script is present; I never execute or cryptographically verify it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TxInput {
    #[serde(rename = "scriptSig", skip_serializing_if = "Option::is_none")]
    script_sig: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    prevout: Option<PrevOut>,
}

impl TxInput {
    pub fn new(script_sig: &str, prevout: PrevOut) -> TxInput {
        TxInput {
            script_sig: Some(script_sig.to_string()),
            prevout: Some(prevout),
        }
    }

    pub fn get_script_sig(&self) -> Option<&str> {
        self.script_sig.as_deref()
    }

    pub fn get_prevout(&self) -> Option<&PrevOut> {
        self.prevout.as_ref()
    }

    // The value this input brings into the transaction. Missing values count
    // as zero for fee accounting - the validator does not require them.
    pub fn prevout_value(&self) -> i64 {
        self.prevout
            .as_ref()
            .and_then(|prevout| prevout.value)
            .unwrap_or(0)
    }
}

// This represents a transaction output - a locking script plus a value.
// The decoded script forms (asm, type, address) are opaque metadata that I
// carry through serialization untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TxOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    scriptpubkey: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scriptpubkey_asm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scriptpubkey_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scriptpubkey_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<i64>,
}

impl TxOutput {
    pub fn new(scriptpubkey: &str, value: i64) -> TxOutput {
        TxOutput {
            scriptpubkey: Some(scriptpubkey.to_string()),
            scriptpubkey_asm: None,
            scriptpubkey_type: None,
            scriptpubkey_address: None,
            value: Some(value),
        }
    }

    /// Attach the decoded script forms (used when synthesizing the coinbase
    /// output, which carries the full reward script metadata).
    pub fn with_script_metadata(mut self, asm: &str, script_type: &str, address: &str) -> TxOutput {
        self.scriptpubkey_asm = Some(asm.to_string());
        self.scriptpubkey_type = Some(script_type.to_string());
        self.scriptpubkey_address = Some(address.to_string());
        self
    }

    pub fn get_scriptpubkey(&self) -> Option<&str> {
        self.scriptpubkey.as_deref()
    }

    pub fn get_value(&self) -> Option<i64> {
        self.value
    }
}

// This is the main transaction structure. Field declaration order matters:
// canonical serialization emits keys in this order, so keep it stable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    locktime: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vin: Option<Vec<TxInput>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vout: Option<Vec<TxOutput>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    txid: Option<String>,
}

impl Transaction {
    pub fn new(
        version: i64,
        locktime: i64,
        vin: Vec<TxInput>,
        vout: Vec<TxOutput>,
    ) -> Transaction {
        Transaction {
            version: Some(version),
            locktime: Some(locktime),
            vin: Some(vin),
            vout: Some(vout),
            txid: None,
        }
    }

    pub fn get_version(&self) -> Option<i64> {
        self.version
    }

    pub fn get_locktime(&self) -> Option<i64> {
        self.locktime
    }

    pub fn get_vin(&self) -> Option<&[TxInput]> {
        self.vin.as_deref()
    }

    pub fn get_vout(&self) -> Option<&[TxOutput]> {
        self.vout.as_deref()
    }

    pub fn get_txid(&self) -> Option<&str> {
        self.txid.as_deref()
    }

    // Diagnostics need a name even for records that never carried a txid.
    pub fn display_txid(&self) -> &str {
        self.txid.as_deref().unwrap_or("unknown")
    }

    /// The previous-transaction id referenced by the first input, if any.
    /// The report lists exactly this per validated transaction.
    pub fn lead_input_txid(&self) -> Option<&str> {
        self.vin
            .as_deref()
            .and_then(|vin| vin.first())
            .and_then(|input| input.get_prevout())
            .and_then(|prevout| prevout.get_txid())
    }

    /// Canonical deterministic text encoding of the full structure.
    ///
    /// Keys are emitted in field declaration order and absent fields are
    /// skipped, so re-encoding an identical value yields an identical string.
    /// Merkle leaves are computed over exactly this text.
    pub fn canonical_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_parse_as_none() {
        let tx: Transaction = serde_json::from_str(r#"{"vout":[{"value":5}]}"#).unwrap();
        assert!(tx.get_vin().is_none());
        assert!(tx.get_txid().is_none());
        assert_eq!(tx.display_txid(), "unknown");
        let vout = tx.get_vout().unwrap();
        assert_eq!(vout.len(), 1);
        assert!(vout[0].get_scriptpubkey().is_none());
        assert_eq!(vout[0].get_value(), Some(5));
    }

    #[test]
    fn test_null_index_parses_as_none() {
        let tx: Transaction = serde_json::from_str(
            r#"{"vin":[{"scriptSig":"aa","prevout":{"txid":"bb","index":null,"value":10}}],"vout":[]}"#,
        )
        .unwrap();
        let input = &tx.get_vin().unwrap()[0];
        let prevout = input.get_prevout().unwrap();
        assert!(prevout.get_index().is_none());
        assert_eq!(prevout.get_value(), Some(10));
    }

    #[test]
    fn test_canonical_json_round_trips() {
        let raw = r#"{"version":2,"locktime":0,"vin":[{"scriptSig":"47aa","prevout":{"txid":"cafe","index":1,"value":7000}}],"vout":[{"scriptpubkey":"76a9","value":6500}],"txid":"beef"}"#;
        let tx: Transaction = serde_json::from_str(raw).unwrap();
        let encoded = tx.canonical_json().unwrap();
        let reparsed: Transaction = serde_json::from_str(&encoded).unwrap();
        // Re-encoding an identical value must yield an identical string.
        assert_eq!(encoded, reparsed.canonical_json().unwrap());
    }

    #[test]
    fn test_canonical_json_skips_absent_fields() {
        let tx = Transaction::new(1, 0, vec![], vec![TxOutput::new("ab", 3)]);
        let encoded = tx.canonical_json().unwrap();
        assert_eq!(
            encoded,
            r#"{"version":1,"locktime":0,"vin":[],"vout":[{"scriptpubkey":"ab","value":3}]}"#
        );
    }

    #[test]
    fn test_prevout_value_defaults_to_zero() {
        let tx: Transaction =
            serde_json::from_str(r#"{"vin":[{"scriptSig":"aa","prevout":{"txid":"bb","index":0}}],"vout":[]}"#)
                .unwrap();
        assert_eq!(tx.get_vin().unwrap()[0].prevout_value(), 0);
    }

    #[test]
    fn test_lead_input_txid() {
        let tx: Transaction = serde_json::from_str(
            r#"{"vin":[{"scriptSig":"aa","prevout":{"txid":"first","index":0,"value":1}},
                      {"scriptSig":"bb","prevout":{"txid":"second","index":1,"value":2}}],
                "vout":[]}"#,
        )
        .unwrap();
        assert_eq!(tx.lead_input_txid(), Some("first"));

        let empty = Transaction::new(1, 0, vec![], vec![]);
        assert_eq!(empty.lead_input_txid(), None);
    }
}
