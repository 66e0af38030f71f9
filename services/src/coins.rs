//! Coin inventory queries.

use async_trait::async_trait;
use ptoken_types::{AccountKeySet, Coin, TokenId};

use crate::ServiceError;

#[async_trait]
pub trait CoinInventory: Send + Sync {
    /// List the spendable coins of `account`.
    ///
    /// `token_id = None` means the chain's native currency.
    async fn available_coins(
        &self,
        account: &AccountKeySet,
        token_id: Option<&TokenId>,
    ) -> Result<Vec<Coin>, ServiceError>;
}
