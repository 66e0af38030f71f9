//! Spendable coins (UTXO-like value records) of an account.

use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::token::TokenId;

/// A single spendable coin.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    /// Coin commitment / serial identifier, opaque to the wallet.
    pub id: String,
    pub token_id: TokenId,
    pub value: Amount,
}

impl Coin {
    pub fn new(id: impl Into<String>, token_id: TokenId, value: Amount) -> Self {
        Self {
            id: id.into(),
            token_id,
            value,
        }
    }
}

/// Total value of a coin inventory. `None` on `u64` overflow.
pub fn coin_total(coins: &[Coin]) -> Option<Amount> {
    coins
        .iter()
        .try_fold(Amount::ZERO, |acc, coin| acc.checked_add(coin.value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_of_empty_inventory_is_zero() {
        assert_eq!(coin_total(&[]), Some(Amount::ZERO));
    }

    #[test]
    fn total_sums_values() {
        let coins = vec![
            Coin::new("a", TokenId::prv(), Amount::new(40)),
            Coin::new("b", TokenId::prv(), Amount::new(2)),
        ];
        assert_eq!(coin_total(&coins), Some(Amount::new(42)));
    }

    #[test]
    fn total_overflow_is_none() {
        let coins = vec![
            Coin::new("a", TokenId::prv(), Amount::new(u64::MAX)),
            Coin::new("b", TokenId::prv(), Amount::new(1)),
        ];
        assert_eq!(coin_total(&coins), None);
    }
}
