//! Log events emitted by token operations, captured with a scoped subscriber.
//!
//! Each test installs a thread-local fmt subscriber writing into a buffer, so
//! the current-thread tokio runtime sees every event the operation emits.

use std::io;
use std::sync::{Arc, Mutex};

use ptoken_nullables::{
    NullBridge, NullClock, NullCoinInventory, NullExchangeRate, NullTransactionSender,
};
use ptoken_services::ServiceFailure;
use ptoken_types::{AccountKeySet, PaymentInfo, PrivateKey, TokenDescription, TokenId};
use ptoken_wallet_core::{PrivacyToken, TokenServices};
use tracing::subscriber::DefaultGuard;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl CapturedLogs {
    /// The single captured line containing `message`.
    fn line_with(&self, message: &str) -> String {
        let text = String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned();
        let matching: Vec<&str> = text.lines().filter(|l| l.contains(message)).collect();
        assert_eq!(matching.len(), 1, "expected one `{message}` line in:\n{text}");
        matching[0].to_string()
    }
}

fn capture_logs() -> (CapturedLogs, DefaultGuard) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    (logs, tracing::subscriber::set_default(subscriber))
}

struct Harness {
    coins: Arc<NullCoinInventory>,
    sender: Arc<NullTransactionSender>,
}

impl Harness {
    fn new() -> Self {
        Self {
            coins: Arc::new(NullCoinInventory::new()),
            sender: Arc::new(NullTransactionSender::new()),
        }
    }

    fn token(&self) -> PrivacyToken {
        let services = TokenServices {
            exchange_rates: Arc::new(NullExchangeRate::new()),
            coins: self.coins.clone(),
            sender: self.sender.clone(),
            bridge: Arc::new(NullBridge::new()),
            clock: Arc::new(NullClock::new(1_700_000_000)),
        };
        let keys = Arc::new(AccountKeySet::new("addr-1", "ro", PrivateKey::new("pk")));
        PrivacyToken::new(keys, TokenDescription::new("T1", "Test", "TST", 1), services)
            .expect("valid token")
    }
}

// ---------------------------------------------------------------------------
// Send failures carry the operation's parameters
// ---------------------------------------------------------------------------

#[tokio::test]
async fn transfer_failure_event_carries_parameters() {
    let (logs, _guard) = capture_logs();
    let h = Harness::new();
    h.sender.fail_with(ServiceFailure::Rejected("double spend".into()));

    h.token()
        .transfer(&[PaymentInfo::new("r", 5)], 7, 3)
        .await
        .unwrap_err();

    let line = logs.line_with("transaction failed");
    assert!(line.contains("ERROR"), "{line}");
    for field in ["token_id=T1", "payments=1", "native_fee=7", "privacy_fee=3", "double spend"] {
        assert!(line.contains(field), "missing {field} in {line}");
    }
}

#[tokio::test]
async fn rejected_input_is_logged_with_the_offending_value() {
    let (logs, _guard) = capture_logs();
    let h = Harness::new();

    h.token().burning("0xOutchain", 300, -4, 1).await.unwrap_err();

    let line = logs.line_with("transaction failed");
    for field in ["0xOutchain", "burning_amount=300", "native_fee=-4", "nativeFee"] {
        assert!(line.contains(field), "missing {field} in {line}");
    }
}

#[tokio::test]
async fn trade_failure_event_names_both_tokens() {
    let (logs, _guard) = capture_logs();
    let h = Harness::new();
    h.sender.fail_with(ServiceFailure::Unavailable("beacon".into()));

    h.token()
        .request_trade(&TokenId::new("BUY"), 500, 480, 10, 2, 3)
        .await
        .unwrap_err();

    let line = logs.line_with("transaction failed");
    for field in ["token_id=T1", "token_id_buy=BUY", "sell_amount=500", "trading_fee=3"] {
        assert!(line.contains(field), "missing {field} in {line}");
    }
}

// ---------------------------------------------------------------------------
// Coin queries
// ---------------------------------------------------------------------------

#[tokio::test]
async fn native_coin_query_failure_is_logged() {
    let (logs, _guard) = capture_logs();
    let h = Harness::new();
    h.coins.fail_with(ServiceFailure::Unavailable("indexer".into()));

    h.token().get_native_available_coins().await.unwrap_err();

    let line = logs.line_with("coin query failed");
    assert!(line.contains("ERROR"), "{line}");
    for field in ["get_native_available_coins", "token_id=T1", "indexer"] {
        assert!(line.contains(field), "missing {field} in {line}");
    }
}

#[tokio::test]
async fn token_coin_query_failure_is_logged() {
    let (logs, _guard) = capture_logs();
    let h = Harness::new();
    h.coins.fail_with(ServiceFailure::Unavailable("indexer".into()));

    h.token().available_balance().await.unwrap_err();

    let line = logs.line_with("coin query failed");
    for field in ["get_available_coins", "token_id=T1"] {
        assert!(line.contains(field), "missing {field} in {line}");
    }
}
