//! Wallet configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::logging::LogFormat;
use crate::WalletError;

/// Validity window of a bridge deposit address: 60 minutes.
pub const DEFAULT_DEPOSIT_ADDRESS_VALIDITY_SECS: u64 = 60 * 60;

/// Configuration for the wallet core.
///
/// Can be loaded from a TOML file via [`WalletConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletConfig {
    /// How long a generated bridge deposit address stays valid.
    #[serde(default = "default_deposit_address_validity_secs")]
    pub deposit_address_validity_secs: u64,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_deposit_address_validity_secs() -> u64 {
    DEFAULT_DEPOSIT_ADDRESS_VALIDITY_SECS
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl WalletConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, WalletError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| WalletError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, WalletError> {
        let config: Self = toml::from_str(s).map_err(|e| WalletError::Config(e.to_string()))?;
        if config.deposit_address_validity_secs == 0 {
            return Err(WalletError::Config(
                "deposit_address_validity_secs must be positive".to_string(),
            ));
        }
        Ok(config)
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, WalletError> {
        toml::to_string_pretty(self).map_err(|e| WalletError::Config(e.to_string()))
    }

    /// The configured log format.
    pub fn log_format(&self) -> Result<LogFormat, WalletError> {
        LogFormat::parse(&self.log_format)
            .ok_or_else(|| WalletError::Config(format!("unknown log format: {}", self.log_format)))
    }
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            deposit_address_validity_secs: default_deposit_address_validity_secs(),
            log_format: default_log_format(),
            log_level: default_log_level(),
        }
    }
}
