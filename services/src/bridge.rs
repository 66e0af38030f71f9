//! Cross-chain bridge: deposit address generation and history.

use async_trait::async_trait;
use ptoken_types::{BridgeHistory, CurrencyType, TokenId};

use crate::ServiceError;

/// Parameters common to every deposit-address generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DepositParams {
    pub payment_address: String,
    /// Same value as `payment_address`; bridges key their wallet records on it.
    pub wallet_address: String,
    pub token_id: TokenId,
    pub currency_type: CurrencyType,
}

/// Bridge backend.
///
/// Generated addresses are temporary: each is valid for a limited window
/// after issuance.
#[async_trait]
pub trait BridgeService: Send + Sync {
    async fn generate_eth_deposit_address(
        &self,
        params: &DepositParams,
    ) -> Result<String, ServiceError>;

    async fn generate_erc20_deposit_address(
        &self,
        params: &DepositParams,
        token_contract_id: &str,
    ) -> Result<String, ServiceError>;

    async fn generate_centralized_deposit_address(
        &self,
        params: &DepositParams,
    ) -> Result<String, ServiceError>;

    async fn bridge_history(
        &self,
        payment_address: &str,
        token_id: &TokenId,
    ) -> Result<Vec<BridgeHistory>, ServiceError>;
}
