//! Wallet core library for privacy tokens.
//!
//! Provides the operations a wallet application performs on a token it holds:
//! - Private transfer to one or more payment addresses
//! - Burning for release on an external chain
//! - Liquidity contribution and trade requests against the AMM
//! - Bridge deposit address generation and bridge history
//! - Coin inventory and exchange-rate queries
//!
//! Transaction construction, coin selection, signing and bridge bookkeeping are
//! delegated to the collaborators in `ptoken-services`.

pub mod config;
pub mod error;
pub mod logging;
pub mod privacy_token;
pub mod spans;
pub mod validation;

pub use config::WalletConfig;
pub use error::WalletError;
pub use logging::{init_logging, LogFormat};
pub use privacy_token::{
    is_bridge_erc20, is_bridge_ethereum, select_deposit_kind, PrivacyToken, TokenServices,
};
