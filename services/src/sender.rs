//! Transaction senders: build, sign and broadcast token transactions.
//!
//! Each request carries a [`SendContext`] with everything the sender needs to
//! pay fees in both currencies: the account keys, both coin inventories, the
//! two fees, and the identity of the token being spent.

use async_trait::async_trait;
use ptoken_types::{AccountKeySet, Amount, Coin, Payment, TokenId, TokenIdentity, TxHistory};

use crate::ServiceError;

/// Inputs shared by every token transaction.
#[derive(Debug)]
pub struct SendContext<'a> {
    pub account: &'a AccountKeySet,
    /// Spendable native-currency coins.
    pub native_coins: Vec<Coin>,
    /// Spendable coins of the token being sent.
    pub token_coins: Vec<Coin>,
    /// Fee paid in the native currency.
    pub native_fee: Amount,
    /// Fee paid in the privacy token itself.
    pub privacy_fee: Amount,
    pub token: TokenIdentity,
}

/// Private transfer to one or more payment addresses.
#[derive(Debug)]
pub struct TransferRequest<'a> {
    pub context: SendContext<'a>,
    pub payments: Vec<Payment>,
}

/// Burn tokens for release on an external chain.
#[derive(Debug)]
pub struct BurnRequest<'a> {
    pub context: SendContext<'a>,
    pub outchain_address: String,
    pub burning_amount: Amount,
}

/// Liquidity contribution to an AMM pair.
#[derive(Debug)]
pub struct ContributionRequest<'a> {
    pub context: SendContext<'a>,
    pub pair_id: String,
    pub contributed_amount: Amount,
}

/// Swap order against the AMM.
#[derive(Debug)]
pub struct TradeRequest<'a> {
    pub context: SendContext<'a>,
    pub token_id_buy: TokenId,
    pub sell_amount: Amount,
    pub minimum_acceptable_amount: Amount,
    pub trading_fee: Amount,
}

#[async_trait]
pub trait TransactionSender: Send + Sync {
    async fn send_transfer(&self, request: TransferRequest<'_>) -> Result<TxHistory, ServiceError>;

    async fn send_burning_request(
        &self,
        request: BurnRequest<'_>,
    ) -> Result<TxHistory, ServiceError>;

    async fn send_pde_contribution(
        &self,
        request: ContributionRequest<'_>,
    ) -> Result<TxHistory, ServiceError>;

    async fn send_trade_request(&self, request: TradeRequest<'_>)
        -> Result<TxHistory, ServiceError>;
}
