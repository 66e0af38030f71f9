//! Nullable bridge: canned deposit addresses and history, recorded calls.

use async_trait::async_trait;
use ptoken_services::{BridgeService, DepositParams, ServiceError, ServiceFailure};
use ptoken_types::{BridgeHistory, TokenId};
use std::sync::Mutex;

/// A deposit-address generation the bridge received.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DepositCall {
    Ethereum(DepositParams),
    Erc20 {
        params: DepositParams,
        token_contract_id: String,
    },
    Centralized(DepositParams),
}

/// A bridge that hands out `eth-1`, `erc20-2`, `custody-3`, ... and serves a
/// fixed history list.
pub struct NullBridge {
    deposit_calls: Mutex<Vec<DepositCall>>,
    history_calls: Mutex<Vec<(String, TokenId)>>,
    history: Mutex<Vec<BridgeHistory>>,
    failure: Mutex<Option<ServiceFailure>>,
}

impl NullBridge {
    pub fn new() -> Self {
        Self {
            deposit_calls: Mutex::new(Vec::new()),
            history_calls: Mutex::new(Vec::new()),
            history: Mutex::new(Vec::new()),
            failure: Mutex::new(None),
        }
    }

    /// Set the records returned by `bridge_history`.
    pub fn set_history(&self, history: Vec<BridgeHistory>) {
        *self.history.lock().unwrap() = history;
    }

    pub fn fail_with(&self, failure: ServiceFailure) {
        *self.failure.lock().unwrap() = Some(failure);
    }

    pub fn deposit_calls(&self) -> Vec<DepositCall> {
        self.deposit_calls.lock().unwrap().clone()
    }

    pub fn history_calls(&self) -> Vec<(String, TokenId)> {
        self.history_calls.lock().unwrap().clone()
    }

    /// Deposit generations plus history queries.
    pub fn total_calls(&self) -> usize {
        self.deposit_calls.lock().unwrap().len() + self.history_calls.lock().unwrap().len()
    }

    fn issue(&self, call: DepositCall, prefix: &str) -> Result<String, ServiceError> {
        let mut calls = self.deposit_calls.lock().unwrap();
        calls.push(call);
        let seq = calls.len();
        drop(calls);

        if let Some(failure) = self.failure.lock().unwrap().clone() {
            return Err(Box::new(failure));
        }
        Ok(format!("{prefix}-{seq}"))
    }
}

impl Default for NullBridge {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BridgeService for NullBridge {
    async fn generate_eth_deposit_address(
        &self,
        params: &DepositParams,
    ) -> Result<String, ServiceError> {
        self.issue(DepositCall::Ethereum(params.clone()), "eth")
    }

    async fn generate_erc20_deposit_address(
        &self,
        params: &DepositParams,
        token_contract_id: &str,
    ) -> Result<String, ServiceError> {
        self.issue(
            DepositCall::Erc20 {
                params: params.clone(),
                token_contract_id: token_contract_id.to_string(),
            },
            "erc20",
        )
    }

    async fn generate_centralized_deposit_address(
        &self,
        params: &DepositParams,
    ) -> Result<String, ServiceError> {
        self.issue(DepositCall::Centralized(params.clone()), "custody")
    }

    async fn bridge_history(
        &self,
        payment_address: &str,
        token_id: &TokenId,
    ) -> Result<Vec<BridgeHistory>, ServiceError> {
        self.history_calls
            .lock()
            .unwrap()
            .push((payment_address.to_string(), token_id.clone()));

        if let Some(failure) = self.failure.lock().unwrap().clone() {
            return Err(Box::new(failure));
        }
        Ok(self.history.lock().unwrap().clone())
    }
}
