//! Fundamental types for privacy token wallets.
//!
//! This crate defines the plain data shared across every other crate in the workspace:
//! token identity, bridge configuration, amounts, coins, payments, account keys,
//! history records, deposit addresses, and timestamps.

pub mod amount;
pub mod bridge;
pub mod coin;
pub mod history;
pub mod keys;
pub mod payment;
pub mod time;
pub mod token;

pub use amount::Amount;
pub use bridge::{BridgeHistory, BridgeInfo, CurrencyType, DepositAddress, DepositKind};
pub use coin::{coin_total, Coin};
pub use history::TxHistory;
pub use keys::{AccountKeySet, PrivateKey};
pub use payment::{Payment, PaymentInfo};
pub use time::Timestamp;
pub use token::{TokenDescription, TokenId, TokenIdentity, ETHEREUM_TOKEN_ID, PRV_TOKEN_ID};
