//! Payment entries of a private transfer.

use serde::{Deserialize, Serialize};

use crate::amount::Amount;

/// A payment as supplied by the caller. Not yet validated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfo {
    pub payment_address: String,
    pub amount: i64,
    #[serde(default)]
    pub message: Option<String>,
}

impl PaymentInfo {
    pub fn new(payment_address: impl Into<String>, amount: i64) -> Self {
        Self {
            payment_address: payment_address.into(),
            amount,
            message: None,
        }
    }
}

/// A validated payment: non-empty destination, positive amount.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub payment_address: String,
    pub amount: Amount,
    pub message: Option<String>,
}
