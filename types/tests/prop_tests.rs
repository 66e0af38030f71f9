use proptest::prelude::*;

use ptoken_types::{
    coin_total, Amount, Coin, CurrencyType, DepositAddress, DepositKind, Timestamp, TokenId,
};

proptest! {
    /// Amount::from_signed accepts exactly the non-negative values.
    #[test]
    fn amount_from_signed_matches_sign(raw in any::<i64>()) {
        let parsed = Amount::from_signed(raw);
        prop_assert_eq!(parsed.is_some(), raw >= 0);
        if let Some(a) = parsed {
            prop_assert_eq!(a.raw(), raw as u64);
        }
    }

    /// coin_total equals the u128 sum whenever that sum fits in u64.
    #[test]
    fn coin_total_matches_wide_sum(values in prop::collection::vec(any::<u64>(), 0..8)) {
        let coins: Vec<Coin> = values
            .iter()
            .enumerate()
            .map(|(i, v)| Coin::new(format!("c{i}"), TokenId::prv(), Amount::new(*v)))
            .collect();
        let wide: u128 = values.iter().map(|v| *v as u128).sum();
        match coin_total(&coins) {
            Some(total) => prop_assert_eq!(total.raw() as u128, wide),
            None => prop_assert!(wide > u64::MAX as u128),
        }
    }

    /// Every currency code decodes, and only 1..=7 have a known name.
    #[test]
    fn currency_code_is_preserved(code in any::<u32>()) {
        let ct = CurrencyType::from_code(code);
        prop_assert_eq!(ct.code(), code);
        prop_assert_eq!(ct == CurrencyType::Other(code), !(1..=7).contains(&code));
    }

    /// Timestamp::plus_secs never wraps, so a deposit address is always
    /// expired at its own expiry instant and never before issuance.
    #[test]
    fn deposit_expiry_saturates(base in any::<u64>(), secs in 1u64..=u64::MAX) {
        let issued_at = Timestamp::new(base);
        let expires_at = issued_at.plus_secs(secs);
        prop_assert!(expires_at >= issued_at);

        let address = DepositAddress {
            address: "addr".into(),
            kind: DepositKind::Centralized,
            issued_at,
            expires_at,
        };
        prop_assert!(address.is_expired(expires_at));
        prop_assert_eq!(address.remaining_secs(expires_at), 0);
        if expires_at > issued_at {
            prop_assert!(!address.is_expired(issued_at));
        }
    }
}
