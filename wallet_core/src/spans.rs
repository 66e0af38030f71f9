//! [`tracing::Span`] constructors for token operations.
//!
//! Each operation runs inside its span, so the parameters recorded here are
//! attached to the attempt, success and failure events alike.

use ptoken_types::TokenId;
use tracing::{info_span, Span};

/// Span covering a private transfer.
pub fn transfer_span(token_id: &TokenId, payments: usize, native_fee: i64, privacy_fee: i64) -> Span {
    info_span!("transfer", token_id = %token_id, payments, native_fee, privacy_fee)
}

/// Span covering a burning request.
pub fn burning_span(
    token_id: &TokenId,
    outchain_address: &str,
    burning_amount: i64,
    native_fee: i64,
    privacy_fee: i64,
) -> Span {
    info_span!(
        "burning",
        token_id = %token_id,
        outchain_address,
        burning_amount,
        native_fee,
        privacy_fee
    )
}

/// Span covering a liquidity contribution.
pub fn pde_contribution_span(
    token_id: &TokenId,
    pair_id: &str,
    contributed_amount: i64,
    native_fee: i64,
    privacy_fee: i64,
) -> Span {
    info_span!(
        "pde_contribution",
        token_id = %token_id,
        pair_id,
        contributed_amount,
        native_fee,
        privacy_fee
    )
}

/// Span covering a trade request.
pub fn request_trade_span(
    token_id: &TokenId,
    token_id_buy: &TokenId,
    sell_amount: i64,
    minimum_acceptable_amount: i64,
    fees: (i64, i64, i64),
) -> Span {
    let (native_fee, privacy_fee, trading_fee) = fees;
    info_span!(
        "request_trade",
        token_id = %token_id,
        token_id_buy = %token_id_buy,
        sell_amount,
        minimum_acceptable_amount,
        native_fee,
        privacy_fee,
        trading_fee
    )
}

/// Span covering a bridge call made on behalf of `payment_address`.
pub fn bridge_span(operation: &'static str, token_id: &TokenId, payment_address: &str) -> Span {
    info_span!("bridge", operation, token_id = %token_id, payment_address)
}
