//! Account key material handed to transaction-construction services.

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// An account's serialized spending key.
///
/// This type intentionally does not implement `Debug`, `Serialize`, or `Clone`
/// to prevent accidental exposure. Key bytes are zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey(String);

impl PrivateKey {
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// The encoded key, for transaction-construction services that sign.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

/// The key set of one wallet account.
///
/// The payment address doubles as the account's public identifier on bridges.
pub struct AccountKeySet {
    pub payment_address: String,
    pub read_only_key: String,
    pub private_key: PrivateKey,
}

impl AccountKeySet {
    pub fn new(
        payment_address: impl Into<String>,
        read_only_key: impl Into<String>,
        private_key: PrivateKey,
    ) -> Self {
        Self {
            payment_address: payment_address.into(),
            read_only_key: read_only_key.into(),
            private_key,
        }
    }

    pub fn payment_address(&self) -> &str {
        &self.payment_address
    }
}

impl fmt::Debug for AccountKeySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountKeySet")
            .field("payment_address", &self.payment_address)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_never_prints_secrets() {
        let keys = AccountKeySet::new("addr1", "view-secret", PrivateKey::new("spend-secret"));
        let out = format!("{keys:?}");
        assert!(out.contains("addr1"));
        assert!(!out.contains("view-secret"));
        assert!(!out.contains("spend-secret"));
    }

    #[test]
    fn private_key_is_readable_by_signers() {
        let keys = AccountKeySet::new("addr1", "view", PrivateKey::new("spend-secret"));
        assert_eq!(keys.private_key.expose(), "spend-secret");
    }
}
