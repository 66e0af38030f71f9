//! Parameter checks run before any collaborator call.
//!
//! Each check is a pure function returning the validated value or a
//! [`WalletError::Validation`]. Operations run them in sequence and stop at the
//! first failure.

use ptoken_types::{Amount, Payment, PaymentInfo, TokenId};

use crate::error::WalletError;

/// A required, non-blank string.
pub fn required_text(field: &'static str, value: &str) -> Result<(), WalletError> {
    if value.trim().is_empty() {
        return Err(WalletError::validation(field, "is required"));
    }
    Ok(())
}

/// A required, non-blank token id.
pub fn required_token_id(field: &'static str, value: &TokenId) -> Result<(), WalletError> {
    if value.is_empty() {
        return Err(WalletError::validation(field, "is required"));
    }
    Ok(())
}

/// A non-negative amount.
pub fn required_amount(field: &'static str, raw: i64) -> Result<Amount, WalletError> {
    Amount::from_signed(raw).ok_or_else(|| WalletError::validation(field, "must not be negative"))
}

/// A non-empty list of payments, each with a destination and a positive amount.
pub fn payment_list(
    field: &'static str,
    payments: &[PaymentInfo],
) -> Result<Vec<Payment>, WalletError> {
    if payments.is_empty() {
        return Err(WalletError::validation(field, "must contain at least one payment"));
    }

    payments
        .iter()
        .map(|p| {
            if p.payment_address.trim().is_empty() {
                return Err(WalletError::validation(field, "payment address is required"));
            }
            if p.amount <= 0 {
                return Err(WalletError::validation(field, "payment amount must be positive"));
            }
            Ok(Payment {
                payment_address: p.payment_address.clone(),
                amount: Amount::new(p.amount as u64),
                message: p.message.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(err: WalletError) -> &'static str {
        match err {
            WalletError::Validation { field, .. } => field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn blank_text_is_rejected() {
        assert_eq!(field_of(required_text("pairID", "").unwrap_err()), "pairID");
        assert_eq!(field_of(required_text("pairID", "  \t").unwrap_err()), "pairID");
        assert!(required_text("pairID", "pair-1").is_ok());
    }

    #[test]
    fn negative_amount_is_rejected() {
        assert_eq!(field_of(required_amount("nativeFee", -1).unwrap_err()), "nativeFee");
        assert_eq!(required_amount("nativeFee", 0).unwrap(), Amount::ZERO);
        assert_eq!(required_amount("nativeFee", 25).unwrap(), Amount::new(25));
    }

    #[test]
    fn empty_payment_list_is_rejected() {
        assert!(payment_list("paymentInfoList", &[]).unwrap_err().is_validation());
    }

    #[test]
    fn payment_needs_destination_and_positive_amount() {
        let no_dest = [PaymentInfo::new("", 5)];
        assert!(payment_list("paymentInfoList", &no_dest).is_err());

        let zero = [PaymentInfo::new("addr", 0)];
        assert!(payment_list("paymentInfoList", &zero).is_err());

        let negative = [PaymentInfo::new("addr", -3)];
        assert!(payment_list("paymentInfoList", &negative).is_err());
    }

    #[test]
    fn valid_payments_are_converted() {
        let mut with_memo = PaymentInfo::new("addr-b", 7);
        with_memo.message = Some("thanks".into());
        let out = payment_list("paymentInfoList", &[PaymentInfo::new("addr-a", 3), with_memo])
            .unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].amount, Amount::new(3));
        assert_eq!(out[1].payment_address, "addr-b");
        assert_eq!(out[1].message.as_deref(), Some("thanks"));
    }
}
