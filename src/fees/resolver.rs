//! Fee reconciliation
//!
//! Picks the single authoritative fee for a transaction from the sources a
//! node reports: fee events, the chain's default charging formula, and the
//! fee the payer declared. Sources are tried in a fixed precedence and the
//! first present one wins. A present value that fails to parse resolves to
//! zero rather than falling through.

use log::{debug, warn};
use serde::Serialize;

use super::schedule::MsgFeeScheduleLookup;
use crate::config::FeeConfig;
use crate::constants::TX_EVENT;
use crate::events::parse_denom_amount;
use crate::tx::TxOutcome;

/// Attribute on the `tx` event carrying the base fee charged
pub const BASEFEE_ATTR: &str = "basefee";
/// Attribute on the `tx` event carrying the total fee charged
pub const FEE_ATTR: &str = "fee";
/// Attribute on the `tx` event carrying the minimum fee kept on failure
pub const MIN_FEE_CHARGED_ATTR: &str = "min_fee_charged";
/// Event emitted when coins leave an account
pub const COIN_SPENT_EVENT: &str = "coin_spent";

/// Reconciled fee for one transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeeResult {
    pub amount: u128,
    pub denom: String,
}

impl FeeResult {
    pub fn new(amount: u128, denom: impl Into<String>) -> Self {
        Self {
            amount,
            denom: denom.into(),
        }
    }
}

/// Where a [`FeeResult`] came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeeSource {
    /// Gas wanted times floor price, inside the bug window
    BugWindowDefault,
    BaseFeeEvent,
    FeeEvent,
    /// Sum of declared utility-denom fee coins
    DeclaredFee,
    MinFeeChargedEvent,
    CoinSpentEvent,
    /// Rejected before any fee could be charged
    NoChargeRejection,
    /// Lesser of the default formula and the declared fee
    CappedDefault,
}

/// Resolves fees against one configuration and fee schedule
pub struct FeeResolver<'a, L: ?Sized> {
    config: &'a FeeConfig,
    lookup: &'a L,
}

impl<'a, L: MsgFeeScheduleLookup + ?Sized> FeeResolver<'a, L> {
    pub fn new(config: &'a FeeConfig, lookup: &'a L) -> Self {
        Self { config, lookup }
    }

    /// Fee paid by `outcome`. `has_msg_fees` says whether the transaction
    /// carries any message-based surcharge.
    pub fn resolve(&self, outcome: &TxOutcome, has_msg_fees: bool) -> FeeResult {
        self.resolve_with_source(outcome, has_msg_fees).0
    }

    pub fn resolve_with_source(&self, outcome: &TxOutcome, has_msg_fees: bool) -> (FeeResult, FeeSource) {
        let (result, source) = if outcome.is_success() {
            self.success_fee(outcome, has_msg_fees)
        } else {
            self.failure_fee(outcome)
        };
        debug!(
            "tx {} at height {}: fee {}{} from {:?}",
            outcome.txhash(),
            outcome.height(),
            result.amount,
            result.denom,
            source
        );
        (result, source)
    }

    /// The chain's default charging formula: gas wanted times the floor gas
    /// price at the transaction's height
    pub fn default_base_fee(&self, outcome: &TxOutcome) -> u128 {
        let price = self
            .lookup
            .floor_gas_price_at_height(outcome.height())
            .unwrap_or(self.config.default_gas_price);
        outcome.gas_wanted().saturating_mul(price)
    }

    fn success_fee(&self, outcome: &TxOutcome, has_msg_fees: bool) -> (FeeResult, FeeSource) {
        if self.config.in_bug_window(outcome.height()) && !has_msg_fees {
            return (self.utility(self.default_base_fee(outcome)), FeeSource::BugWindowDefault);
        }
        if let Some(fee) = self.event_fee(outcome, TX_EVENT, BASEFEE_ATTR) {
            return (fee, FeeSource::BaseFeeEvent);
        }
        if let Some(fee) = self.event_fee(outcome, TX_EVENT, FEE_ATTR) {
            return (fee, FeeSource::FeeEvent);
        }
        (self.declared(outcome), FeeSource::DeclaredFee)
    }

    fn failure_fee(&self, outcome: &TxOutcome) -> (FeeResult, FeeSource) {
        if let Some(fee) = self.event_fee(outcome, TX_EVENT, MIN_FEE_CHARGED_ATTR) {
            return (fee, FeeSource::MinFeeChargedEvent);
        }
        if let Some(fee) = self.event_fee(outcome, COIN_SPENT_EVENT, "amount") {
            return (fee, FeeSource::CoinSpentEvent);
        }
        if outcome.is_no_charge_rejection() {
            return (self.utility(0), FeeSource::NoChargeRejection);
        }
        if !self.lookup.fees_at_height(outcome.height()).is_empty() {
            let declared = self.declared(outcome);
            let capped = self.default_base_fee(outcome).min(declared.amount);
            return (self.utility(capped), FeeSource::CappedDefault);
        }
        (self.declared(outcome), FeeSource::DeclaredFee)
    }

    /// `None` when no event carries the attribute. A present value that does
    /// not parse yields a zero fee.
    fn event_fee(&self, outcome: &TxOutcome, event_type: &str, key: &str) -> Option<FeeResult> {
        let raw = outcome.reader().find(event_type, key, None)?;
        match parse_denom_amount(&raw) {
            Some((amount, denom)) if !denom.is_empty() => Some(FeeResult::new(amount, denom)),
            Some((amount, _)) => Some(self.utility(amount)),
            None => {
                warn!("unparsable {}/{} value {:?}, treating fee as zero", event_type, key, raw);
                Some(self.utility(0))
            }
        }
    }

    fn declared(&self, outcome: &TxOutcome) -> FeeResult {
        self.utility(outcome.declared_total(&self.config.utility_denom))
    }

    fn utility(&self, amount: u128) -> FeeResult {
        FeeResult::new(amount, self.config.utility_denom.clone())
    }
}
