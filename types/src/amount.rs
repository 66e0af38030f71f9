//! Token amount type.
//!
//! Amounts are fixed-point integers in the token's smallest unit. Callers hand in
//! signed raw values (which may be negative and therefore invalid); only validated,
//! non-negative values become an [`Amount`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative token amount in raw units.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Amount(u64);

impl Amount {
    pub const ZERO: Self = Self(0);

    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Convert a signed raw value, rejecting negatives.
    pub fn from_signed(raw: i64) -> Option<Self> {
        u64::try_from(raw).ok().map(Self)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_signed_rejects_negative() {
        assert_eq!(Amount::from_signed(-1), None);
        assert_eq!(Amount::from_signed(i64::MIN), None);
    }

    #[test]
    fn from_signed_accepts_zero_and_max() {
        assert_eq!(Amount::from_signed(0), Some(Amount::ZERO));
        assert_eq!(
            Amount::from_signed(i64::MAX),
            Some(Amount::new(i64::MAX as u64))
        );
    }

    #[test]
    fn checked_add_detects_overflow() {
        assert_eq!(Amount::new(u64::MAX).checked_add(Amount::new(1)), None);
        assert_eq!(
            Amount::new(2).checked_add(Amount::new(3)),
            Some(Amount::new(5))
        );
    }
}
