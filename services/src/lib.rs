//! Collaborator contracts consumed by the privacy token wallet.
//!
//! Every backend (RPC client, in-memory for testing) implements these traits.
//! The wallet core depends only on the traits and never sees the backends'
//! internals: coin selection, signing, broadcast and bridge bookkeeping all
//! live behind them.

pub mod bridge;
pub mod clock;
pub mod coins;
pub mod error;
pub mod exchange;
pub mod sender;

pub use bridge::{BridgeService, DepositParams};
pub use clock::{Clock, SystemClock};
pub use coins::CoinInventory;
pub use error::{ServiceError, ServiceFailure};
pub use exchange::ExchangeRateOracle;
pub use sender::{
    BurnRequest, ContributionRequest, SendContext, TradeRequest, TransactionSender,
    TransferRequest,
};
