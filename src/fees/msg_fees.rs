//! Message-based fee surcharges
//!
//! Newer chains report surcharges directly in a `EventMsgFees` event. For
//! older transactions they are reconstructed from the fee schedule at the
//! block height and the events each fee-bearing message emits.

use std::collections::HashMap;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::schedule::MsgFeeScheduleLookup;
use crate::events::{parse_denom_amount, scrub_quotes};
use crate::messages::MsgTypeBreakout;
use crate::proto::tx::Event;
use crate::tx::TxOutcome;

/// Transaction-level event listing the surcharges charged
pub const MSG_FEES_EVENT: &str = "provenance.msgfees.v1.EventMsgFees";
/// Attribute on [`MSG_FEES_EVENT`] holding the JSON fee list
pub const MSG_FEES_ATTR: &str = "msg_fees";
/// Message that charges a caller-specified fee
pub const CUSTOM_FEE_MSG_TYPE_URL: &str = "/provenance.msgfees.v1.MsgAssessCustomMsgFeeRequest";
/// Event emitted once per custom fee assessed
pub const CUSTOM_FEE_EVENT: &str = "assess_custom_msg_fee";
/// Type name reported for surcharges with no known message type
pub const CUSTOM_FEE_MSG_TYPE: &str = "custom_fee";

/// Message type, the event it emits once per chargeable action, and the
/// attribute occurring once per action on that event
pub const DEFINED_EVENTS: &[(&str, &str, &str)] = &[
    (
        "/provenance.attribute.v1.MsgAddAttributeRequest",
        "provenance.attribute.v1.EventAttributeAdd",
        "account",
    ),
    (
        "/provenance.metadata.v1.MsgWriteScopeRequest",
        "provenance.metadata.v1.EventScopeCreated",
        "scope_addr",
    ),
    (
        "/provenance.name.v1.MsgBindNameRequest",
        "provenance.name.v1.EventNameBound",
        "address",
    ),
    ("/cosmos.gov.v1beta1.MsgSubmitProposal", "submit_proposal", "proposal_id"),
    (
        "/provenance.marker.v1.MsgAddMarkerRequest",
        "provenance.marker.v1.EventMarkerAdd",
        "denom",
    ),
];

#[derive(Debug, Error)]
pub enum MsgFeeError {
    #[error("Malformed msg_fees attribute: {0}")]
    MalformedMsgFees(#[from] serde_json::Error),
}

/// One caller-specified fee folded into a custom surcharge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomFee {
    pub name: String,
    pub amount: u128,
    pub denom: String,
    pub recipient: String,
}

/// Surcharge charged for one message type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MsgBasedFee {
    pub msg_type_url: String,
    /// Snake-case action name, or `custom_fee`
    pub msg_type: String,
    pub amount: u128,
    pub denom: String,
    pub recipient: Option<String>,
    pub custom_fees: Vec<CustomFee>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EventFee {
    msg_type: String,
    total: String,
    recipient: String,
}

fn msg_type_name(type_url: &str) -> String {
    if type_url == CUSTOM_FEE_MSG_TYPE_URL || type_url.is_empty() {
        CUSTOM_FEE_MSG_TYPE.to_string()
    } else {
        MsgTypeBreakout::from_type_url(type_url).action
    }
}

/// Surcharges charged by `outcome`, preferring the fee event and falling
/// back to the schedule at `height`
pub fn identify_msg_based_fees<L>(
    outcome: &TxOutcome,
    lookup: &L,
    height: u64,
) -> Result<Vec<MsgBasedFee>, MsgFeeError>
where
    L: MsgFeeScheduleLookup + ?Sized,
{
    match outcome.reader().find_event(MSG_FEES_EVENT, MSG_FEES_ATTR, None) {
        Some(event) => {
            let raw = event.attribute(MSG_FEES_ATTR).map(scrub_quotes).unwrap_or("[]");
            from_fee_event(outcome, raw)
        }
        None => Ok(from_schedule(outcome, lookup, height)),
    }
}

fn from_fee_event(outcome: &TxOutcome, raw: &str) -> Result<Vec<MsgBasedFee>, MsgFeeError> {
    let listed: Vec<EventFee> = serde_json::from_str(raw)?;
    let mut custom: Option<HashMap<String, Vec<CustomFee>>> = None;

    Ok(listed
        .into_iter()
        .map(|fee| {
            let (amount, denom) = parse_denom_amount(&fee.total).unwrap_or_else(|| {
                warn!("unparsable msg fee total {:?} for {}", fee.total, fee.msg_type);
                (0, String::new())
            });
            let custom_fees = if fee.msg_type == CUSTOM_FEE_MSG_TYPE_URL {
                custom
                    .get_or_insert_with(|| custom_fees_by_recipient(outcome))
                    .get(&fee.recipient)
                    .cloned()
                    .unwrap_or_default()
            } else {
                Vec::new()
            };
            MsgBasedFee {
                msg_type: msg_type_name(&fee.msg_type),
                msg_type_url: fee.msg_type,
                amount,
                denom,
                recipient: Some(fee.recipient).filter(|r| !r.is_empty()),
                custom_fees,
            }
        })
        .collect())
}

/// Custom fees from `assess_custom_msg_fee` events, grouped by recipient.
/// Names, amounts, and recipients pair up by position within an event.
fn custom_fees_by_recipient(outcome: &TxOutcome) -> HashMap<String, Vec<CustomFee>> {
    let mut grouped: HashMap<String, Vec<CustomFee>> = HashMap::new();
    for event in outcome.reader().matching(&[CUSTOM_FEE_EVENT]) {
        let amounts = attribute_values(event, "amount");
        let recipients = attribute_values(event, "recipient");

        for (idx, name) in attribute_values(event, "name").into_iter().enumerate() {
            let (Some(amount), Some(recipient)) = (amounts.get(idx), recipients.get(idx)) else {
                warn!("custom fee {:?} is missing its amount or recipient", name);
                continue;
            };
            let Some((amount, denom)) = parse_denom_amount(amount) else {
                warn!("unparsable custom fee amount {:?} for {:?}", amount, name);
                continue;
            };
            grouped.entry(recipient.to_string()).or_default().push(CustomFee {
                name: name.to_string(),
                amount,
                denom,
                recipient: recipient.to_string(),
            });
        }
    }
    grouped
}

fn attribute_values<'e>(event: &'e Event, key: &str) -> Vec<&'e str> {
    event
        .attributes
        .iter()
        .filter(|a| a.key == key)
        .map(|a| scrub_quotes(&a.value))
        .collect()
}

/// Scheduled fee times the number of actions each message's event records,
/// summed per message type in first-seen order
fn from_schedule<L>(outcome: &TxOutcome, lookup: &L, height: u64) -> Vec<MsgBasedFee>
where
    L: MsgFeeScheduleLookup + ?Sized,
{
    let schedule = lookup.fees_at_height(height);
    if schedule.is_empty() {
        return Vec::new();
    }
    let mut totals: Vec<MsgBasedFee> = Vec::new();
    for event in outcome.events() {
        let Some((msg, _, unique_field)) = DEFINED_EVENTS.iter().find(|(_, kind, _)| *kind == event.r#type) else {
            continue;
        };
        let Some(entry) = schedule.iter().find(|e| e.msg_type_url == *msg) else {
            debug!("no scheduled fee for {} at height {}", msg, height);
            continue;
        };
        let count = event.attributes.iter().filter(|a| a.key == *unique_field).count() as u128;
        let amount = entry.amount.saturating_mul(count);

        match totals.iter_mut().find(|f| f.msg_type_url == *msg) {
            Some(existing) => existing.amount = existing.amount.saturating_add(amount),
            None => totals.push(MsgBasedFee {
                msg_type_url: msg.to_string(),
                msg_type: msg_type_name(msg),
                amount,
                denom: entry.denom.clone(),
                recipient: None,
                custom_fees: Vec::new(),
            }),
        }
    }
    totals
}
