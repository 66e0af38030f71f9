//! Nullable exchange-rate oracle.

use async_trait::async_trait;
use ptoken_services::{ExchangeRateOracle, ServiceError, ServiceFailure};
use ptoken_types::TokenId;
use std::collections::HashSet;
use std::sync::Mutex;

/// Answers `true` for tokens registered with [`NullExchangeRate::add_rate`].
pub struct NullExchangeRate {
    priced: Mutex<HashSet<TokenId>>,
    lookups: Mutex<usize>,
    failure: Mutex<Option<ServiceFailure>>,
}

impl NullExchangeRate {
    pub fn new() -> Self {
        Self {
            priced: Mutex::new(HashSet::new()),
            lookups: Mutex::new(0),
            failure: Mutex::new(None),
        }
    }

    pub fn add_rate(&self, token_id: TokenId) {
        self.priced.lock().unwrap().insert(token_id);
    }

    pub fn fail_with(&self, failure: ServiceFailure) {
        *self.failure.lock().unwrap() = Some(failure);
    }

    pub fn lookups(&self) -> usize {
        *self.lookups.lock().unwrap()
    }
}

impl Default for NullExchangeRate {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExchangeRateOracle for NullExchangeRate {
    async fn has_exchange_rate(&self, token_id: &TokenId) -> Result<bool, ServiceError> {
        *self.lookups.lock().unwrap() += 1;
        if let Some(failure) = self.failure.lock().unwrap().clone() {
            return Err(Box::new(failure));
        }
        Ok(self.priced.lock().unwrap().contains(token_id))
    }
}
