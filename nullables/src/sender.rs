//! Nullable transaction sender: record requests instead of broadcasting them.

use async_trait::async_trait;
use ptoken_services::{
    BurnRequest, ContributionRequest, SendContext, ServiceError, ServiceFailure, TradeRequest,
    TransactionSender, TransferRequest,
};
use ptoken_types::{Amount, Coin, Payment, TokenId, TokenIdentity, TxHistory};
use std::sync::Mutex;

/// Owned snapshot of a [`SendContext`], minus the key material.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedContext {
    pub payment_address: String,
    pub native_coins: Vec<Coin>,
    pub token_coins: Vec<Coin>,
    pub native_fee: Amount,
    pub privacy_fee: Amount,
    pub token: TokenIdentity,
}

impl From<&SendContext<'_>> for RecordedContext {
    fn from(ctx: &SendContext<'_>) -> Self {
        Self {
            payment_address: ctx.account.payment_address.clone(),
            native_coins: ctx.native_coins.clone(),
            token_coins: ctx.token_coins.clone(),
            native_fee: ctx.native_fee,
            privacy_fee: ctx.privacy_fee,
            token: ctx.token.clone(),
        }
    }
}

/// A request the sender received.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SentRequest {
    Transfer {
        context: RecordedContext,
        payments: Vec<Payment>,
    },
    Burn {
        context: RecordedContext,
        outchain_address: String,
        burning_amount: Amount,
    },
    Contribution {
        context: RecordedContext,
        pair_id: String,
        contributed_amount: Amount,
    },
    Trade {
        context: RecordedContext,
        token_id_buy: TokenId,
        sell_amount: Amount,
        minimum_acceptable_amount: Amount,
        trading_fee: Amount,
    },
}

impl SentRequest {
    pub fn context(&self) -> &RecordedContext {
        match self {
            Self::Transfer { context, .. }
            | Self::Burn { context, .. }
            | Self::Contribution { context, .. }
            | Self::Trade { context, .. } => context,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transfer { .. } => "transfer",
            Self::Burn { .. } => "burn",
            Self::Contribution { .. } => "contribution",
            Self::Trade { .. } => "trade",
        }
    }
}

/// A sender that records every request and answers with sequential tx ids
/// (`tx-1`, `tx-2`, ...).
pub struct NullTransactionSender {
    sent: Mutex<Vec<SentRequest>>,
    next_tx: Mutex<u64>,
    failure: Mutex<Option<ServiceFailure>>,
}

impl NullTransactionSender {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            next_tx: Mutex::new(1),
            failure: Mutex::new(None),
        }
    }

    /// Make every subsequent send fail with `failure` (recorded nonetheless).
    pub fn fail_with(&self, failure: ServiceFailure) {
        *self.failure.lock().unwrap() = Some(failure);
    }

    /// All requests received so far (for assertions).
    pub fn sent(&self) -> Vec<SentRequest> {
        self.sent.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    fn record(&self, request: SentRequest) -> Result<TxHistory, ServiceError> {
        let kind = request.kind();
        self.sent.lock().unwrap().push(request);

        if let Some(failure) = self.failure.lock().unwrap().clone() {
            return Err(Box::new(failure));
        }

        let mut next = self.next_tx.lock().unwrap();
        let tx_id = format!("tx-{}", *next);
        *next += 1;
        Ok(TxHistory {
            tx_id,
            detail: serde_json::json!({ "kind": kind }),
        })
    }
}

impl Default for NullTransactionSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TransactionSender for NullTransactionSender {
    async fn send_transfer(&self, request: TransferRequest<'_>) -> Result<TxHistory, ServiceError> {
        self.record(SentRequest::Transfer {
            context: RecordedContext::from(&request.context),
            payments: request.payments,
        })
    }

    async fn send_burning_request(
        &self,
        request: BurnRequest<'_>,
    ) -> Result<TxHistory, ServiceError> {
        self.record(SentRequest::Burn {
            context: RecordedContext::from(&request.context),
            outchain_address: request.outchain_address,
            burning_amount: request.burning_amount,
        })
    }

    async fn send_pde_contribution(
        &self,
        request: ContributionRequest<'_>,
    ) -> Result<TxHistory, ServiceError> {
        self.record(SentRequest::Contribution {
            context: RecordedContext::from(&request.context),
            pair_id: request.pair_id,
            contributed_amount: request.contributed_amount,
        })
    }

    async fn send_trade_request(
        &self,
        request: TradeRequest<'_>,
    ) -> Result<TxHistory, ServiceError> {
        self.record(SentRequest::Trade {
            context: RecordedContext::from(&request.context),
            token_id_buy: request.token_id_buy,
            sell_amount: request.sell_amount,
            minimum_acceptable_amount: request.minimum_acceptable_amount,
            trading_fee: request.trading_fee,
        })
    }
}
