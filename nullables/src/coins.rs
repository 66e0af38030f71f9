//! Nullable coin inventory: canned coin lists, counted queries.

use async_trait::async_trait;
use ptoken_services::{CoinInventory, ServiceError, ServiceFailure};
use ptoken_types::{AccountKeySet, Coin, TokenId};
use std::collections::HashMap;
use std::sync::Mutex;

/// An in-memory coin inventory.
///
/// Queries for tokens with no configured coins return an empty list.
pub struct NullCoinInventory {
    native: Mutex<Vec<Coin>>,
    tokens: Mutex<HashMap<TokenId, Vec<Coin>>>,
    native_queries: Mutex<usize>,
    token_queries: Mutex<HashMap<TokenId, usize>>,
    failure: Mutex<Option<ServiceFailure>>,
}

impl NullCoinInventory {
    pub fn new() -> Self {
        Self {
            native: Mutex::new(Vec::new()),
            tokens: Mutex::new(HashMap::new()),
            native_queries: Mutex::new(0),
            token_queries: Mutex::new(HashMap::new()),
            failure: Mutex::new(None),
        }
    }

    /// Set the native-currency coins.
    pub fn set_native(&self, coins: Vec<Coin>) {
        *self.native.lock().unwrap() = coins;
    }

    /// Set the coins of a specific token.
    pub fn set_token(&self, token_id: TokenId, coins: Vec<Coin>) {
        self.tokens.lock().unwrap().insert(token_id, coins);
    }

    /// Make every subsequent query fail with `failure`.
    pub fn fail_with(&self, failure: ServiceFailure) {
        *self.failure.lock().unwrap() = Some(failure);
    }

    /// Number of native-currency queries served (or failed).
    pub fn native_queries(&self) -> usize {
        *self.native_queries.lock().unwrap()
    }

    /// Number of queries for `token_id` served (or failed).
    pub fn token_queries(&self, token_id: &TokenId) -> usize {
        self.token_queries
            .lock()
            .unwrap()
            .get(token_id)
            .copied()
            .unwrap_or(0)
    }

    /// Total queries of any kind.
    pub fn total_queries(&self) -> usize {
        self.native_queries() + self.token_queries.lock().unwrap().values().sum::<usize>()
    }
}

impl Default for NullCoinInventory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CoinInventory for NullCoinInventory {
    async fn available_coins(
        &self,
        _account: &AccountKeySet,
        token_id: Option<&TokenId>,
    ) -> Result<Vec<Coin>, ServiceError> {
        match token_id {
            None => *self.native_queries.lock().unwrap() += 1,
            Some(id) => {
                *self
                    .token_queries
                    .lock()
                    .unwrap()
                    .entry(id.clone())
                    .or_default() += 1
            }
        }

        if let Some(failure) = self.failure.lock().unwrap().clone() {
            return Err(Box::new(failure));
        }

        Ok(match token_id {
            None => self.native.lock().unwrap().clone(),
            Some(id) => self
                .tokens
                .lock()
                .unwrap()
                .get(id)
                .cloned()
                .unwrap_or_default(),
        })
    }
}
