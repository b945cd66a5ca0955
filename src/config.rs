//! Explorer configuration
//!
//! One immutable value per network, threaded into the codec and the fee
//! resolver. Loaded from JSON or taken from a preset.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::address::{AddressCodec, Bech32Prefixes};
use crate::constants::{DEFAULT_GAS_PRICE, UTILITY_DENOM};

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Inclusive block height range. A start of 0 disables the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeightRange {
    pub start: u64,
    pub end: u64,
}

impl HeightRange {
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    pub fn is_enabled(&self) -> bool {
        self.start != 0
    }

    pub fn contains(&self, height: u64) -> bool {
        self.is_enabled() && self.start <= height && height <= self.end
    }
}

/// Fee reconciliation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeConfig {
    /// Denomination fees are charged in
    #[serde(default = "default_utility_denom")]
    pub utility_denom: String,
    /// Floor gas price used when the schedule has none for a height
    #[serde(default = "default_gas_price")]
    pub default_gas_price: u128,
    /// Heights whose fee events are known to be wrong
    #[serde(default)]
    pub bug_window: Option<HeightRange>,
}

fn default_utility_denom() -> String {
    UTILITY_DENOM.to_string()
}

fn default_gas_price() -> u128 {
    DEFAULT_GAS_PRICE
}

impl Default for FeeConfig {
    fn default() -> Self {
        Self {
            utility_denom: default_utility_denom(),
            default_gas_price: DEFAULT_GAS_PRICE,
            bug_window: None,
        }
    }
}

impl FeeConfig {
    pub fn with_bug_window(mut self, window: HeightRange) -> Self {
        self.bug_window = Some(window);
        self
    }

    pub fn in_bug_window(&self, height: u64) -> bool {
        self.bug_window.map(|w| w.contains(height)).unwrap_or(false)
    }
}

/// Complete configuration for one network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorerConfig {
    pub prefixes: Bech32Prefixes,
    #[serde(default)]
    pub fees: FeeConfig,
}

impl ExplorerConfig {
    pub fn mainnet() -> Self {
        Self {
            prefixes: Bech32Prefixes::mainnet(),
            fees: FeeConfig::default(),
        }
    }

    pub fn testnet() -> Self {
        Self {
            prefixes: Bech32Prefixes::testnet(),
            fees: FeeConfig::default(),
        }
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.prefixes;
        if p.account.is_empty() || p.validator_operator.is_empty() || p.validator_consensus.is_empty() {
            return Err(ConfigError::Invalid("address prefixes must be non-empty".to_string()));
        }
        if self.fees.utility_denom.is_empty() {
            return Err(ConfigError::Invalid("utility denom must be non-empty".to_string()));
        }
        if let Some(window) = self.fees.bug_window {
            if window.is_enabled() && window.start > window.end {
                return Err(ConfigError::Invalid(format!(
                    "bug window start {} is after end {}",
                    window.start, window.end
                )));
            }
        }
        Ok(())
    }

    pub fn codec(&self) -> AddressCodec {
        AddressCodec::new(self.prefixes.clone())
    }

    pub fn account_prefix(&self) -> &str {
        &self.prefixes.account
    }
}
