//! Token identity and the description a privacy token is built from.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::bridge::BridgeInfo;

/// Token id of the chain's native currency (PRV).
pub const PRV_TOKEN_ID: &str = "0000000000000000000000000000000000000000000000000000000000000004";

/// Token id of the privacy-wrapped Ether (pETH).
pub const ETHEREUM_TOKEN_ID: &str =
    "ffd8d42dc40a8d166ea4848baf8b5f6e9fe0e9c30d60062eb7d44a8df9e00854";

/// A token identifier, globally unique per network.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenId(String);

impl TokenId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The native-currency token id.
    pub fn prv() -> Self {
        Self(PRV_TOKEN_ID.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn is_ethereum(&self) -> bool {
        self.0 == ETHEREUM_TOKEN_ID
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TokenId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TokenId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl PartialEq<str> for TokenId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TokenId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// The immutable identity of a token: id, display name and ticker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenIdentity {
    pub token_id: TokenId,
    pub name: String,
    pub symbol: String,
}

/// External description of a privacy token, as served by the token registry.
///
/// Field names follow the registry's JSON (`tokenId`, `supplyAmount`, `bridgeInfo`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenDescription {
    pub token_id: TokenId,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub supply_amount: u64,
    #[serde(default)]
    pub bridge_info: Option<BridgeInfo>,
}

impl TokenDescription {
    /// Description of a token with no bridge configuration.
    pub fn new(
        token_id: impl Into<TokenId>,
        name: impl Into<String>,
        symbol: impl Into<String>,
        supply_amount: u64,
    ) -> Self {
        Self {
            token_id: token_id.into(),
            name: name.into(),
            symbol: symbol.into(),
            supply_amount,
            bridge_info: None,
        }
    }

    pub fn with_bridge_info(mut self, bridge_info: BridgeInfo) -> Self {
        self.bridge_info = Some(bridge_info);
        self
    }

    /// Parse a description from the registry's JSON form.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    pub fn identity(&self) -> TokenIdentity {
        TokenIdentity {
            token_id: self.token_id.clone(),
            name: self.name.clone(),
            symbol: self.symbol.clone(),
        }
    }
}
