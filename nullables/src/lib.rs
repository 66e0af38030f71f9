//! Nullable collaborators for deterministic testing.
//!
//! All external dependencies of the wallet (clock, coin inventory, transaction
//! sender, bridge, exchange rates) are abstracted behind the traits in
//! `ptoken-services`. This crate provides test-friendly implementations that:
//! - Return deterministic values
//! - Record every call for later assertions
//! - Can be told to fail with a chosen error
//! - Never touch the network
//!
//! Usage: swap real implementations for nullables in tests.

pub mod bridge;
pub mod clock;
pub mod coins;
pub mod exchange;
pub mod sender;

pub use bridge::{DepositCall, NullBridge};
pub use clock::NullClock;
pub use coins::NullCoinInventory;
pub use exchange::NullExchangeRate;
pub use sender::{NullTransactionSender, RecordedContext, SentRequest};
