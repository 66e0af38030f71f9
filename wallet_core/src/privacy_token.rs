//! A privacy token held by one wallet account.
//!
//! [`PrivacyToken`] validates caller input, gathers the coin inventories a
//! transaction needs, and dispatches to the collaborators in [`TokenServices`].
//! It owns no mutable state: identity and bridge configuration are fixed at
//! construction, and every operation's side effects happen in a collaborator.
//!
//! Each operation runs inside a span from [`crate::spans`] carrying its
//! parameters. Failures are logged and handed back to the caller unchanged. Nothing here
//! retries, so retrying a send after an ambiguous failure may submit twice.

use std::fmt;
use std::sync::Arc;

use ptoken_services::{
    BridgeService, BurnRequest, Clock, CoinInventory, ContributionRequest, DepositParams,
    ExchangeRateOracle, SendContext, TradeRequest, TransactionSender, TransferRequest,
};
use ptoken_types::{
    coin_total, AccountKeySet, Amount, BridgeHistory, BridgeInfo, Coin, CurrencyType,
    DepositAddress, DepositKind, PaymentInfo, TokenDescription, TokenId, TokenIdentity,
    TxHistory,
};
use tracing::{debug, error, info, warn, Instrument};

use crate::config::{WalletConfig, DEFAULT_DEPOSIT_ADDRESS_VALIDITY_SECS};
use crate::error::WalletError;
use crate::spans;
use crate::validation;

// ── Branch predicates ───────────────────────────────────────────────────

/// The token is bridged native Ether.
pub fn is_bridge_ethereum(token_id: &TokenId, bridge_info: Option<&BridgeInfo>) -> bool {
    bridge_info.is_some() && token_id.is_ethereum()
}

/// The token is a bridged ERC20 contract token.
pub fn is_bridge_erc20(bridge_info: Option<&BridgeInfo>) -> bool {
    bridge_info.is_some_and(|b| b.currency_type == CurrencyType::Erc20)
}

/// Which deposit-address generator serves this token.
///
/// The Ethereum token id wins over the currency type; ERC20 comes next;
/// everything else goes through the centralized custodian.
pub fn select_deposit_kind(token_id: &TokenId, bridge_info: &BridgeInfo) -> DepositKind {
    if is_bridge_ethereum(token_id, Some(bridge_info)) {
        DepositKind::Ethereum
    } else if is_bridge_erc20(Some(bridge_info)) {
        DepositKind::Erc20
    } else {
        DepositKind::Centralized
    }
}

// ── TokenServices ───────────────────────────────────────────────────────

/// The collaborators a [`PrivacyToken`] dispatches to.
#[derive(Clone)]
pub struct TokenServices {
    pub exchange_rates: Arc<dyn ExchangeRateOracle>,
    pub coins: Arc<dyn CoinInventory>,
    pub sender: Arc<dyn TransactionSender>,
    pub bridge: Arc<dyn BridgeService>,
    pub clock: Arc<dyn Clock>,
}

// ── PrivacyToken ────────────────────────────────────────────────────────

/// A privacy token bound to one account.
pub struct PrivacyToken {
    identity: TokenIdentity,
    total_supply: u64,
    bridge_info: Option<BridgeInfo>,
    account: Arc<AccountKeySet>,
    services: TokenServices,
    deposit_address_validity_secs: u64,
}

impl fmt::Debug for PrivacyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivacyToken")
            .field("identity", &self.identity)
            .field("total_supply", &self.total_supply)
            .field("bridge_info", &self.bridge_info)
            .field("account", &self.account)
            .finish_non_exhaustive()
    }
}

impl PrivacyToken {
    /// Bind a token description to an account.
    ///
    /// Fails with [`WalletError::Validation`] if the token id, name or symbol
    /// is blank, or the account has no payment address. `supply_amount` and
    /// `bridge_info` are taken as given.
    pub fn new(
        account: Arc<AccountKeySet>,
        description: TokenDescription,
        services: TokenServices,
    ) -> Result<Self, WalletError> {
        validation::required_text("accountKeySet.paymentAddress", &account.payment_address)?;
        validation::required_token_id("tokenId", &description.token_id)?;
        validation::required_text("name", &description.name)?;
        validation::required_text("symbol", &description.symbol)?;

        let identity = description.identity();
        Ok(Self {
            identity,
            total_supply: description.supply_amount,
            bridge_info: description.bridge_info,
            account,
            services,
            deposit_address_validity_secs: DEFAULT_DEPOSIT_ADDRESS_VALIDITY_SECS,
        })
    }

    /// Bind a token described in the registry's JSON form.
    pub fn from_description_json(
        account: Arc<AccountKeySet>,
        json: &str,
        services: TokenServices,
    ) -> Result<Self, WalletError> {
        let description = TokenDescription::from_json(json).map_err(|e| {
            debug!(error = %e, "rejecting token description");
            WalletError::validation("privacyTokenDescription", "is missing or malformed")
        })?;
        Self::new(account, description, services)
    }

    /// Apply settings from a [`WalletConfig`].
    pub fn with_config(mut self, config: &WalletConfig) -> Self {
        self.deposit_address_validity_secs = config.deposit_address_validity_secs;
        self
    }

    // ── Identity ────────────────────────────────────────────────────────

    pub fn identity(&self) -> &TokenIdentity {
        &self.identity
    }

    pub fn token_id(&self) -> &TokenId {
        &self.identity.token_id
    }

    pub fn name(&self) -> &str {
        &self.identity.name
    }

    pub fn symbol(&self) -> &str {
        &self.identity.symbol
    }

    pub fn total_supply(&self) -> u64 {
        self.total_supply
    }

    pub fn bridge_info(&self) -> Option<&BridgeInfo> {
        self.bridge_info.as_ref()
    }

    pub fn account(&self) -> &AccountKeySet {
        &self.account
    }

    /// Always `true`; distinguishes this token kind from the native currency.
    pub fn is_privacy_token(&self) -> bool {
        true
    }

    pub fn bridge_erc20_token(&self) -> bool {
        is_bridge_erc20(self.bridge_info.as_ref())
    }

    pub fn bridge_ethereum(&self) -> bool {
        is_bridge_ethereum(&self.identity.token_id, self.bridge_info.as_ref())
    }

    pub fn deposit_address_validity_secs(&self) -> u64 {
        self.deposit_address_validity_secs
    }

    // ── Queries ─────────────────────────────────────────────────────────

    /// Whether the price service publishes a rate for this token. Not cached.
    pub async fn has_exchange_rate(&self) -> Result<bool, WalletError> {
        self.services
            .exchange_rates
            .has_exchange_rate(&self.identity.token_id)
            .await
            .map_err(|e| {
                error!(operation = "has_exchange_rate", token_id = %self.identity.token_id, error = %e, "exchange rate lookup failed");
                WalletError::Collaborator(e)
            })
    }

    /// Spendable native-currency coins of the account.
    pub async fn get_native_available_coins(&self) -> Result<Vec<Coin>, WalletError> {
        self.query_coins("get_native_available_coins", None).await
    }

    /// Spendable coins of this token.
    pub async fn get_available_coins(&self) -> Result<Vec<Coin>, WalletError> {
        self.query_coins("get_available_coins", Some(&self.identity.token_id))
            .await
    }

    /// Sum of this token's spendable coins.
    pub async fn available_balance(&self) -> Result<Amount, WalletError> {
        let coins = self.get_available_coins().await?;
        coin_total(&coins).ok_or(WalletError::Overflow)
    }

    /// Sum of the account's spendable native coins.
    pub async fn native_available_balance(&self) -> Result<Amount, WalletError> {
        let coins = self.get_native_available_coins().await?;
        coin_total(&coins).ok_or(WalletError::Overflow)
    }

    // ── Transactions ────────────────────────────────────────────────────

    /// Privately send this token to `payments`.
    ///
    /// `native_fee` is paid in the native currency, `privacy_fee` in this token.
    pub async fn transfer(
        &self,
        payments: &[PaymentInfo],
        native_fee: i64,
        privacy_fee: i64,
    ) -> Result<TxHistory, WalletError> {
        const OP: &str = "transfer";
        let span = spans::transfer_span(
            &self.identity.token_id,
            payments.len(),
            native_fee,
            privacy_fee,
        );
        span.in_scope(|| info!(operation = OP, "sending privacy token"));

        let result = async {
            let payments = validation::payment_list("paymentInfoList", payments)?;
            let native_fee = validation::required_amount("nativeFee", native_fee)?;
            let privacy_fee = validation::required_amount("privacyFee", privacy_fee)?;

            let context = self.send_context(native_fee, privacy_fee).await?;
            self.services
                .sender
                .send_transfer(TransferRequest { context, payments })
                .await
                .map_err(WalletError::Collaborator)
        }
        .instrument(span.clone())
        .await;

        span.in_scope(|| self.finish(OP, result))
    }

    /// Burn `burning_amount` of this token for release to `outchain_address`.
    pub async fn burning(
        &self,
        outchain_address: &str,
        burning_amount: i64,
        native_fee: i64,
        privacy_fee: i64,
    ) -> Result<TxHistory, WalletError> {
        const OP: &str = "burning";
        let span = spans::burning_span(
            &self.identity.token_id,
            outchain_address,
            burning_amount,
            native_fee,
            privacy_fee,
        );
        span.in_scope(|| info!(operation = OP, "sending burning request"));

        let result = async {
            validation::required_text("outchainAddress", outchain_address)?;
            let burning_amount = validation::required_amount("burningAmount", burning_amount)?;
            let native_fee = validation::required_amount("nativeFee", native_fee)?;
            let privacy_fee = validation::required_amount("privacyFee", privacy_fee)?;

            let context = self.send_context(native_fee, privacy_fee).await?;
            self.services
                .sender
                .send_burning_request(BurnRequest {
                    context,
                    outchain_address: outchain_address.to_string(),
                    burning_amount,
                })
                .await
                .map_err(WalletError::Collaborator)
        }
        .instrument(span.clone())
        .await;

        span.in_scope(|| self.finish(OP, result))
    }

    /// Contribute `contributed_amount` of this token to the AMM pair `pair_id`.
    pub async fn pde_contribution(
        &self,
        pair_id: &str,
        contributed_amount: i64,
        native_fee: i64,
        privacy_fee: i64,
    ) -> Result<TxHistory, WalletError> {
        const OP: &str = "pde_contribution";
        let span = spans::pde_contribution_span(
            &self.identity.token_id,
            pair_id,
            contributed_amount,
            native_fee,
            privacy_fee,
        );
        span.in_scope(|| info!(operation = OP, "sending liquidity contribution"));

        let result = async {
            validation::required_text("pairID", pair_id)?;
            let contributed_amount =
                validation::required_amount("contributedAmount", contributed_amount)?;
            let native_fee = validation::required_amount("nativeFee", native_fee)?;
            let privacy_fee = validation::required_amount("privacyFee", privacy_fee)?;

            let context = self.send_context(native_fee, privacy_fee).await?;
            self.services
                .sender
                .send_pde_contribution(ContributionRequest {
                    context,
                    pair_id: pair_id.to_string(),
                    contributed_amount,
                })
                .await
                .map_err(WalletError::Collaborator)
        }
        .instrument(span.clone())
        .await;

        span.in_scope(|| self.finish(OP, result))
    }

    /// Sell `sell_amount` of this token for `token_id_buy`, accepting no less
    /// than `minimum_acceptable_amount` in return.
    #[allow(clippy::too_many_arguments)]
    pub async fn request_trade(
        &self,
        token_id_buy: &TokenId,
        sell_amount: i64,
        minimum_acceptable_amount: i64,
        native_fee: i64,
        privacy_fee: i64,
        trading_fee: i64,
    ) -> Result<TxHistory, WalletError> {
        const OP: &str = "request_trade";
        let span = spans::request_trade_span(
            &self.identity.token_id,
            token_id_buy,
            sell_amount,
            minimum_acceptable_amount,
            (native_fee, privacy_fee, trading_fee),
        );
        span.in_scope(|| info!(operation = OP, "sending trade request"));

        let result = async {
            validation::required_token_id("tokenIdBuy", token_id_buy)?;
            let sell_amount = validation::required_amount("sellAmount", sell_amount)?;
            let minimum_acceptable_amount = validation::required_amount(
                "minimumAcceptableAmount",
                minimum_acceptable_amount,
            )?;
            let native_fee = validation::required_amount("nativeFee", native_fee)?;
            let privacy_fee = validation::required_amount("privacyFee", privacy_fee)?;
            let trading_fee = validation::required_amount("tradingFee", trading_fee)?;

            let context = self.send_context(native_fee, privacy_fee).await?;
            self.services
                .sender
                .send_trade_request(TradeRequest {
                    context,
                    token_id_buy: token_id_buy.clone(),
                    sell_amount,
                    minimum_acceptable_amount,
                    trading_fee,
                })
                .await
                .map_err(WalletError::Collaborator)
        }
        .instrument(span.clone())
        .await;

        span.in_scope(|| self.finish(OP, result))
    }

    // ── Bridge ──────────────────────────────────────────────────────────

    /// Ask the bridge for a temporary deposit address for this token.
    ///
    /// The address expires `deposit_address_validity_secs` after issuance.
    pub async fn bridge_generate_deposit_address(&self) -> Result<DepositAddress, WalletError> {
        const OP: &str = "bridge_generate_deposit_address";
        let span = spans::bridge_span(OP, &self.identity.token_id, &self.account.payment_address);
        span.in_scope(|| info!(operation = OP, "generating deposit address"));

        let result = self
            .generate_deposit_address()
            .instrument(span.clone())
            .await;

        span.in_scope(|| match result {
            Ok(deposit) => {
                info!(
                    operation = OP,
                    address = %deposit.address,
                    kind = ?deposit.kind,
                    expires_at = %deposit.expires_at,
                    "deposit address issued"
                );
                warn!(
                    operation = OP,
                    address = %deposit.address,
                    validity_minutes = self.deposit_address_validity_secs / 60,
                    "deposit address is temporary; do not reuse it after expiry"
                );
                Ok(deposit)
            }
            Err(e) => {
                error!(operation = OP, token_id = %self.identity.token_id, error = %e, "deposit address generation failed");
                Err(e)
            }
        })
    }

    /// Deposit/withdraw history of this token on the bridge.
    pub async fn bridge_get_history(&self) -> Result<Vec<BridgeHistory>, WalletError> {
        const OP: &str = "bridge_get_history";
        let span = spans::bridge_span(OP, &self.identity.token_id, &self.account.payment_address);

        let result = async {
            self.require_bridge("bridge history")?;
            self.services
                .bridge
                .bridge_history(&self.account.payment_address, &self.identity.token_id)
                .await
                .map_err(WalletError::Collaborator)
        }
        .instrument(span.clone())
        .await;

        span.in_scope(|| match result {
            Ok(history) => {
                info!(operation = OP, records = history.len(), "bridge history loaded");
                Ok(history)
            }
            Err(e) => {
                error!(operation = OP, token_id = %self.identity.token_id, error = %e, "bridge history failed");
                Err(e)
            }
        })
    }

    // ── Internals ───────────────────────────────────────────────────────

    async fn query_coins(
        &self,
        operation: &'static str,
        token_id: Option<&TokenId>,
    ) -> Result<Vec<Coin>, WalletError> {
        self.services
            .coins
            .available_coins(&self.account, token_id)
            .await
            .map_err(|e| {
                error!(operation, token_id = %self.identity.token_id, error = %e, "coin query failed");
                WalletError::Collaborator(e)
            })
    }

    fn require_bridge(&self, capability: &'static str) -> Result<&BridgeInfo, WalletError> {
        self.bridge_info
            .as_ref()
            .ok_or_else(|| WalletError::UnsupportedCapability {
                token_id: self.identity.token_id.clone(),
                capability,
            })
    }

    async fn generate_deposit_address(&self) -> Result<DepositAddress, WalletError> {
        let bridge_info = self.require_bridge("bridge deposit")?;
        let params = DepositParams {
            payment_address: self.account.payment_address.clone(),
            wallet_address: self.account.payment_address.clone(),
            token_id: self.identity.token_id.clone(),
            currency_type: bridge_info.currency_type,
        };

        let kind = select_deposit_kind(&self.identity.token_id, bridge_info);
        let bridge = &self.services.bridge;
        let address = match kind {
            DepositKind::Ethereum => bridge.generate_eth_deposit_address(&params).await,
            DepositKind::Erc20 => {
                let contract_id = bridge_info
                    .contract_id
                    .as_deref()
                    .filter(|c| !c.trim().is_empty())
                    .ok_or_else(|| {
                        WalletError::validation("contractID", "is required for ERC20 bridging")
                    })?;
                bridge
                    .generate_erc20_deposit_address(&params, contract_id)
                    .await
            }
            DepositKind::Centralized => bridge.generate_centralized_deposit_address(&params).await,
        }
        .map_err(WalletError::Collaborator)?;

        let issued_at = self.services.clock.now();
        Ok(DepositAddress {
            address,
            kind,
            issued_at,
            expires_at: issued_at.plus_secs(self.deposit_address_validity_secs),
        })
    }

    /// Gather both coin inventories (concurrently) and assemble the context
    /// every send needs.
    async fn send_context(
        &self,
        native_fee: Amount,
        privacy_fee: Amount,
    ) -> Result<SendContext<'_>, WalletError> {
        let coins = &self.services.coins;
        let (native_coins, token_coins) = tokio::try_join!(
            coins.available_coins(&self.account, None),
            coins.available_coins(&self.account, Some(&self.identity.token_id)),
        )
        .map_err(WalletError::Collaborator)?;

        debug!(
            token_id = %self.identity.token_id,
            native_coins = native_coins.len(),
            token_coins = token_coins.len(),
            "coin inventories gathered"
        );

        Ok(SendContext {
            account: &self.account,
            native_coins,
            token_coins,
            native_fee,
            privacy_fee,
            token: self.identity.clone(),
        })
    }

    fn finish(
        &self,
        operation: &'static str,
        result: Result<TxHistory, WalletError>,
    ) -> Result<TxHistory, WalletError> {
        match &result {
            Ok(history) => {
                info!(operation, token_id = %self.identity.token_id, tx_id = %history.tx_id, "transaction submitted");
            }
            Err(e) => {
                error!(operation, token_id = %self.identity.token_id, error = %e, "transaction failed");
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ptoken_types::ETHEREUM_TOKEN_ID;

    #[test]
    fn no_bridge_means_no_branch() {
        let id = TokenId::new(ETHEREUM_TOKEN_ID);
        assert!(!is_bridge_ethereum(&id, None));
        assert!(!is_bridge_erc20(None));
    }

    #[test]
    fn ethereum_id_takes_precedence_over_erc20() {
        let id = TokenId::new(ETHEREUM_TOKEN_ID);
        let info = BridgeInfo::new(CurrencyType::Erc20).with_contract_id("0xABC");
        assert_eq!(select_deposit_kind(&id, &info), DepositKind::Ethereum);
    }

    #[test]
    fn erc20_currency_selects_erc20() {
        let info = BridgeInfo::new(CurrencyType::Erc20).with_contract_id("0xABC");
        assert_eq!(
            select_deposit_kind(&TokenId::new("T1"), &info),
            DepositKind::Erc20
        );
    }

    #[test]
    fn other_currencies_select_centralized() {
        for ct in [
            CurrencyType::Eth,
            CurrencyType::Btc,
            CurrencyType::Bnb,
            CurrencyType::BnbBep2,
            CurrencyType::Usd,
            CurrencyType::Bep20,
        ] {
            let info = BridgeInfo::new(ct);
            assert_eq!(
                select_deposit_kind(&TokenId::new("T1"), &info),
                DepositKind::Centralized,
                "{ct}"
            );
        }
    }
}
