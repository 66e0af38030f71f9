//! Price / exchange-rate lookup.

use async_trait::async_trait;
use ptoken_types::TokenId;

use crate::ServiceError;

#[async_trait]
pub trait ExchangeRateOracle: Send + Sync {
    /// Whether the token has a published exchange rate.
    async fn has_exchange_rate(&self, token_id: &TokenId) -> Result<bool, ServiceError>;
}
