//! Message fee schedule lookup
//!
//! The governance-configured message fees and floor gas price, versioned by
//! block height. Production deployments back this with a node query; the
//! static schedule serves files and tests.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Additional fee charged for one message type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgFeeEntry {
    pub msg_type_url: String,
    pub amount: u128,
    pub denom: String,
}

impl MsgFeeEntry {
    pub fn new(msg_type_url: impl Into<String>, amount: u128, denom: impl Into<String>) -> Self {
        Self {
            msg_type_url: msg_type_url.into(),
            amount,
            denom: denom.into(),
        }
    }
}

/// Per-height message fee facts
pub trait MsgFeeScheduleLookup: Send + Sync {
    /// Message fees in force at `height`
    fn fees_at_height(&self, height: u64) -> Vec<MsgFeeEntry>;

    /// Floor gas price at `height`, if the chain reports one
    fn floor_gas_price_at_height(&self, height: u64) -> Option<u128>;
}

impl<T: MsgFeeScheduleLookup + ?Sized> MsgFeeScheduleLookup for Arc<T> {
    fn fees_at_height(&self, height: u64) -> Vec<MsgFeeEntry> {
        (**self).fees_at_height(height)
    }

    fn floor_gas_price_at_height(&self, height: u64) -> Option<u128> {
        (**self).floor_gas_price_at_height(height)
    }
}

/// Schedule values from `start_height` until the next epoch begins
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeEpoch {
    pub start_height: u64,
    #[serde(default)]
    pub floor_gas_price: Option<u128>,
    #[serde(default)]
    pub fees: Vec<MsgFeeEntry>,
}

/// Height-versioned schedule held in memory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticFeeSchedule {
    epochs: Vec<FeeEpoch>,
}

impl StaticFeeSchedule {
    /// A schedule with no fees and no floor price at any height
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(mut epochs: Vec<FeeEpoch>) -> Self {
        epochs.sort_by_key(|e| e.start_height);
        Self { epochs }
    }

    /// Single epoch covering every height
    pub fn constant(floor_gas_price: Option<u128>, fees: Vec<MsgFeeEntry>) -> Self {
        Self::new(vec![FeeEpoch {
            start_height: 0,
            floor_gas_price,
            fees,
        }])
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let epochs: Vec<FeeEpoch> = serde_json::from_str(json)?;
        Ok(Self::new(epochs))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    fn epoch_at(&self, height: u64) -> Option<&FeeEpoch> {
        self.epochs.iter().rev().find(|e| e.start_height <= height)
    }
}

impl MsgFeeScheduleLookup for StaticFeeSchedule {
    fn fees_at_height(&self, height: u64) -> Vec<MsgFeeEntry> {
        self.epoch_at(height).map(|e| e.fees.clone()).unwrap_or_default()
    }

    fn floor_gas_price_at_height(&self, height: u64) -> Option<u128> {
        self.epoch_at(height).and_then(|e| e.floor_gas_price)
    }
}

/// Memoizes an inner lookup per height, for batches where many
/// transactions share a block
pub struct MemoizedSchedule<L> {
    inner: L,
    fees: Mutex<HashMap<u64, Vec<MsgFeeEntry>>>,
    gas_prices: Mutex<HashMap<u64, Option<u128>>>,
}

impl<L: MsgFeeScheduleLookup> MemoizedSchedule<L> {
    pub fn new(inner: L) -> Self {
        Self {
            inner,
            fees: Mutex::new(HashMap::new()),
            gas_prices: Mutex::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &L {
        &self.inner
    }

    /// Number of heights memoized so far
    pub fn cached_heights(&self) -> usize {
        self.fees.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

impl<L: MsgFeeScheduleLookup> MsgFeeScheduleLookup for MemoizedSchedule<L> {
    fn fees_at_height(&self, height: u64) -> Vec<MsgFeeEntry> {
        if let Some(hit) = self.fees.lock().unwrap_or_else(|e| e.into_inner()).get(&height) {
            return hit.clone();
        }
        // Lock is not held across the inner call; a racing miss just queries twice.
        let fees = self.inner.fees_at_height(height);
        self.fees
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(height, fees.clone());
        fees
    }

    fn floor_gas_price_at_height(&self, height: u64) -> Option<u128> {
        if let Some(hit) = self.gas_prices.lock().unwrap_or_else(|e| e.into_inner()).get(&height) {
            return *hit;
        }
        let price = self.inner.floor_gas_price_at_height(height);
        self.gas_prices
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(height, price);
        price
    }
}
