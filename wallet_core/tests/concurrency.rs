//! The two inventory queries of a send run concurrently.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use ptoken_nullables::{NullBridge, NullClock, NullExchangeRate, NullTransactionSender};
use ptoken_services::{CoinInventory, ServiceError};
use ptoken_types::{AccountKeySet, Coin, PaymentInfo, PrivateKey, TokenDescription, TokenId};
use ptoken_wallet_core::{PrivacyToken, TokenServices};
use tokio::sync::Barrier;

/// Every query waits until two queries are in flight at once.
struct RendezvousInventory {
    barrier: Barrier,
}

#[async_trait]
impl CoinInventory for RendezvousInventory {
    async fn available_coins(
        &self,
        _account: &AccountKeySet,
        _token_id: Option<&TokenId>,
    ) -> Result<Vec<Coin>, ServiceError> {
        self.barrier.wait().await;
        Ok(Vec::new())
    }
}

#[tokio::test]
async fn inventories_are_queried_concurrently() {
    let sender = Arc::new(NullTransactionSender::new());
    let services = TokenServices {
        exchange_rates: Arc::new(NullExchangeRate::new()),
        coins: Arc::new(RendezvousInventory {
            barrier: Barrier::new(2),
        }),
        sender: sender.clone(),
        bridge: Arc::new(NullBridge::new()),
        clock: Arc::new(NullClock::new(0)),
    };
    let keys = Arc::new(AccountKeySet::new("addr", "ro", PrivateKey::new("pk")));
    let token =
        PrivacyToken::new(keys, TokenDescription::new("T1", "Test", "TST", 1), services).unwrap();

    let history = tokio::time::timeout(
        Duration::from_secs(5),
        token.transfer(&[PaymentInfo::new("r", 1)], 0, 0),
    )
    .await
    .expect("sequential queries would never pass the barrier")
    .unwrap();

    assert_eq!(history.tx_id, "tx-1");
    assert_eq!(sender.call_count(), 1);
}
