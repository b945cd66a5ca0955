//! Address module - bech32 rendering of raw account / validator identifiers

mod codec;

pub use codec::*;

use serde::{Deserialize, Serialize};

use crate::constants::{
    MAINNET_ACCOUNT_PREFIX, MAINNET_VALCONS_PREFIX, MAINNET_VALOPER_PREFIX,
    TESTNET_ACCOUNT_PREFIX, TESTNET_VALCONS_PREFIX, TESTNET_VALOPER_PREFIX,
};

/// The three renderings the same raw bytes can take on one network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressClass {
    Account,
    ValidatorOperator,
    ValidatorConsensus,
}

/// Network-specific human readable prefixes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bech32Prefixes {
    pub account: String,
    pub validator_operator: String,
    pub validator_consensus: String,
}

impl Bech32Prefixes {
    pub fn mainnet() -> Self {
        Self {
            account: MAINNET_ACCOUNT_PREFIX.to_string(),
            validator_operator: MAINNET_VALOPER_PREFIX.to_string(),
            validator_consensus: MAINNET_VALCONS_PREFIX.to_string(),
        }
    }

    pub fn testnet() -> Self {
        Self {
            account: TESTNET_ACCOUNT_PREFIX.to_string(),
            validator_operator: TESTNET_VALOPER_PREFIX.to_string(),
            validator_consensus: TESTNET_VALCONS_PREFIX.to_string(),
        }
    }

    /// Prefix for an address class
    pub fn prefix(&self, class: AddressClass) -> &str {
        match class {
            AddressClass::Account => &self.account,
            AddressClass::ValidatorOperator => &self.validator_operator,
            AddressClass::ValidatorConsensus => &self.validator_consensus,
        }
    }

    /// Class whose prefix is exactly `hrp`
    pub fn class_of(&self, hrp: &str) -> Option<AddressClass> {
        [
            AddressClass::Account,
            AddressClass::ValidatorOperator,
            AddressClass::ValidatorConsensus,
        ]
        .into_iter()
        .find(|class| self.prefix(*class) == hrp)
    }
}

/// Raw address bytes paired with the prefix they are rendered under
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    raw: Vec<u8>,
    hrp: String,
}

impl Address {
    /// Pair raw bytes with a prefix. Length is checked when rendered or decoded.
    pub fn new(hrp: impl Into<String>, raw: impl Into<Vec<u8>>) -> Self {
        Self {
            raw: raw.into(),
            hrp: hrp.into(),
        }
    }

    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    pub fn hrp(&self) -> &str {
        &self.hrp
    }

    /// Same bytes under a different prefix
    pub fn with_prefix(&self, hrp: impl Into<String>) -> Self {
        Self {
            raw: self.raw.clone(),
            hrp: hrp.into(),
        }
    }

    /// Bech32 string rendering
    pub fn to_bech32(&self) -> Result<String, AddressError> {
        encode(&self.hrp, &self.raw)
    }

    /// Parse a bech32 string
    pub fn from_bech32(s: &str) -> Result<Self, AddressError> {
        let (hrp, raw) = decode(s)?;
        Ok(Self { raw, hrp })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_lookup() {
        let prefixes = Bech32Prefixes::mainnet();
        assert_eq!(prefixes.class_of("pb"), Some(AddressClass::Account));
        assert_eq!(prefixes.class_of("pbvaloper"), Some(AddressClass::ValidatorOperator));
        assert_eq!(prefixes.class_of("pbvalcons"), Some(AddressClass::ValidatorConsensus));
        assert_eq!(prefixes.class_of("tp"), None);
    }

    #[test]
    fn test_with_prefix_keeps_bytes() {
        let addr = Address::new("pb", vec![7u8; 20]);
        let valoper = addr.with_prefix("pbvaloper");
        assert_eq!(addr.raw(), valoper.raw());
        assert_ne!(addr.to_bech32().unwrap(), valoper.to_bech32().unwrap());
    }
}
