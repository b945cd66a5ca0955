//! Event attribute lookup
//!
//! Event schemas vary by chain version, so a missing event or attribute is
//! an ordinary outcome and reads as `None`.

use std::collections::BTreeMap;

use log::warn;

use crate::constants::MSG_INDEX;
use crate::proto::tx::{Event, TxResponse};

/// Strip one pair of surrounding double quotes, if both are present
pub fn scrub_quotes(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

/// Split a coin string such as `1000nhash` into amount and denom.
///
/// Leading decimal digits form the amount. Returns `None` for blank input,
/// input without leading digits, or an amount that does not fit in `u128`.
pub fn parse_denom_amount(value: &str) -> Option<(u128, String)> {
    let value = value.trim();
    let digits = value.len() - value.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return None;
    }
    match value[..digits].parse::<u128>() {
        Ok(amount) => Some((amount, value[digits..].to_string())),
        Err(_) => {
            warn!("amount in {:?} does not fit in u128", value);
            None
        }
    }
}

fn carries_index(event: &Event, msg_index: u32) -> bool {
    let wanted = msg_index.to_string();
    event
        .attributes
        .iter()
        .any(|attr| attr.key == MSG_INDEX && scrub_quotes(&attr.value) == wanted)
}

/// Read-only view over a transaction's events
#[derive(Debug, Clone, Copy)]
pub struct EventAttributeReader<'a> {
    events: &'a [Event],
}

impl<'a> EventAttributeReader<'a> {
    pub fn new(events: &'a [Event]) -> Self {
        Self { events }
    }

    /// First event of `event_type` carrying `key`, optionally restricted to
    /// events tagged with `msg_index`
    pub fn find_event(&self, event_type: &str, key: &str, msg_index: Option<u32>) -> Option<&'a Event> {
        self.events.iter().find(|event| {
            event.r#type == event_type
                && event.has_attribute(key)
                && msg_index.map(|idx| carries_index(event, idx)).unwrap_or(true)
        })
    }

    /// Quote-scrubbed value of `key` on the first matching event
    pub fn find(&self, event_type: &str, key: &str, msg_index: Option<u32>) -> Option<String> {
        self.find_event(event_type, key, msg_index)
            .and_then(|event| event.attribute(key))
            .map(|value| scrub_quotes(value).to_string())
    }

    /// Every value of `key` across events of `event_type`, in order
    pub fn values(&self, event_type: &str, key: &str) -> Vec<String> {
        self.events
            .iter()
            .filter(|event| event.r#type == event_type)
            .filter_map(|event| event.attribute(key))
            .map(|value| scrub_quotes(value).to_string())
            .collect()
    }

    /// Events of any of the given types
    pub fn matching(&self, types: &[&str]) -> Vec<&'a Event> {
        self.events
            .iter()
            .filter(|event| types.contains(&event.r#type.as_str()))
            .collect()
    }
}

/// Events belonging to one message: its log entry when logs are present,
/// otherwise the transaction events tagged with its index
pub fn events_at_index(response: &TxResponse, msg_index: usize) -> Vec<Event> {
    match response.logs.get(msg_index) {
        Some(log) => log.events.clone(),
        None => response
            .events
            .iter()
            .filter(|event| carries_index(event, msg_index as u32))
            .cloned()
            .collect(),
    }
}

/// Values of `keys` on the first `event_type` event of one message
pub fn message_attributes(
    response: &TxResponse,
    msg_index: usize,
    event_type: &str,
    keys: &[&str],
) -> BTreeMap<String, String> {
    events_at_index(response, msg_index)
        .iter()
        .find(|event| event.r#type == event_type)
        .map(|event| {
            event
                .attributes
                .iter()
                .filter(|attr| keys.contains(&attr.key.as_str()))
                .fold(BTreeMap::new(), |mut acc, attr| {
                    acc.entry(attr.key.clone())
                        .or_insert_with(|| scrub_quotes(&attr.value).to_string());
                    acc
                })
        })
        .unwrap_or_default()
}

/// Every value of `key` on `event_type` transaction events
pub fn tx_event_values(events: &[Event], event_type: &str, key: &str) -> Vec<String> {
    EventAttributeReader::new(events).values(event_type, key)
}
