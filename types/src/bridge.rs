//! Cross-chain bridge configuration and the records bridge operations return.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::amount::Amount;
use crate::time::Timestamp;

/// Currency family of the external asset a bridged token wraps.
///
/// Serialized as the bridge's numeric currency code. Both the numeric code and
/// the currency name (`"ERC20"`, `"BTC"`, ...) are accepted on input. Codes the
/// wallet does not know are kept as [`CurrencyType::Other`] rather than
/// rejected, since the registry may list currencies newer than this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "CurrencyCode", into = "u32")]
pub enum CurrencyType {
    Eth,
    Btc,
    Erc20,
    Bnb,
    BnbBep2,
    Usd,
    Bep20,
    /// A currency code with no known name. Unknown names decode as `Other(0)`.
    Other(u32),
}

impl CurrencyType {
    pub fn from_code(code: u32) -> Self {
        match code {
            1 => Self::Eth,
            2 => Self::Btc,
            3 => Self::Erc20,
            4 => Self::Bnb,
            5 => Self::BnbBep2,
            6 => Self::Usd,
            7 => Self::Bep20,
            other => Self::Other(other),
        }
    }

    /// Look up a currency by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        let known = [
            Self::Eth,
            Self::Btc,
            Self::Erc20,
            Self::Bnb,
            Self::BnbBep2,
            Self::Usd,
            Self::Bep20,
        ];
        known
            .into_iter()
            .find(|ct| ct.as_str().eq_ignore_ascii_case(name.trim()))
    }

    pub fn code(&self) -> u32 {
        match self {
            Self::Eth => 1,
            Self::Btc => 2,
            Self::Erc20 => 3,
            Self::Bnb => 4,
            Self::BnbBep2 => 5,
            Self::Usd => 6,
            Self::Bep20 => 7,
            Self::Other(code) => *code,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eth => "ETH",
            Self::Btc => "BTC",
            Self::Erc20 => "ERC20",
            Self::Bnb => "BNB",
            Self::BnbBep2 => "BNB_BEP2",
            Self::Usd => "USD",
            Self::Bep20 => "BEP20",
            Self::Other(_) => "UNKNOWN",
        }
    }
}

/// Wire form of a currency type: a numeric code or a currency name.
#[derive(Deserialize)]
#[serde(untagged)]
enum CurrencyCode {
    Code(u32),
    Name(String),
}

impl From<CurrencyCode> for CurrencyType {
    fn from(raw: CurrencyCode) -> Self {
        match raw {
            CurrencyCode::Code(code) => Self::from_code(code),
            CurrencyCode::Name(name) => Self::from_name(&name).unwrap_or(Self::Other(0)),
        }
    }
}

impl From<CurrencyType> for u32 {
    fn from(ct: CurrencyType) -> u32 {
        ct.code()
    }
}

impl fmt::Display for CurrencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Other(code) => write!(f, "UNKNOWN({code})"),
            known => f.write_str(known.as_str()),
        }
    }
}

/// Bridge configuration of a token. Present only on bridgeable tokens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeInfo {
    #[serde(rename = "currencyType")]
    pub currency_type: CurrencyType,
    /// External contract address (ERC20/BEP20 tokens).
    #[serde(rename = "contractID", default)]
    pub contract_id: Option<String>,
    #[serde(rename = "externalSymbol", default)]
    pub external_symbol: Option<String>,
    #[serde(default)]
    pub decimals: Option<u32>,
}

impl BridgeInfo {
    pub fn new(currency_type: CurrencyType) -> Self {
        Self {
            currency_type,
            contract_id: None,
            external_symbol: None,
            decimals: None,
        }
    }

    pub fn with_contract_id(mut self, contract_id: impl Into<String>) -> Self {
        self.contract_id = Some(contract_id.into());
        self
    }
}

/// Which deposit-address generator issued an address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DepositKind {
    /// Native Ether deposits.
    Ethereum,
    /// ERC20 contract deposits.
    Erc20,
    /// Deposits handled by the centralized custodian.
    Centralized,
}

/// A temporary deposit address issued by a bridge.
///
/// Only valid until `expires_at`; never treat it as a permanent address.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositAddress {
    pub address: String,
    pub kind: DepositKind,
    pub issued_at: Timestamp,
    pub expires_at: Timestamp,
}

impl DepositAddress {
    pub fn is_expired(&self, now: Timestamp) -> bool {
        now >= self.expires_at
    }

    /// Seconds of validity left (zero once expired).
    pub fn remaining_secs(&self, now: Timestamp) -> u64 {
        self.expires_at.as_secs().saturating_sub(now.as_secs())
    }
}

/// One entry of a token's bridge deposit/withdraw history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BridgeHistory {
    pub id: u64,
    pub address: String,
    pub status: String,
    #[serde(default)]
    pub amount: Option<Amount>,
    /// Remaining fields as returned by the bridge, untouched.
    #[serde(default)]
    pub detail: serde_json::Value,
}
