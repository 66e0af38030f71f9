//! Acknowledgement record of a submitted transaction.

use serde::{Deserialize, Serialize};

/// History record returned by the transaction sender.
///
/// Only `tx_id` is interpreted by the wallet; the rest is kept verbatim in `detail`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxHistory {
    pub tx_id: String,
    #[serde(default)]
    pub detail: serde_json::Value,
}

impl TxHistory {
    pub fn new(tx_id: impl Into<String>) -> Self {
        Self {
            tx_id: tx_id.into(),
            detail: serde_json::Value::Null,
        }
    }
}
