//! Events that name the accounts a transaction touched

use super::reader::scrub_quotes;
use crate::proto::tx::Event;

/// Event type and the attributes on it that carry addresses
pub const ADDRESS_EVENTS: &[(&str, &[&str])] = &[
    ("transfer", &["sender", "recipient"]),
    (
        "provenance.marker.v1.EventMarkerTransfer",
        &["administrator", "to_address", "from_address"],
    ),
    ("provenance.marker.v1.EventMarkerAdd", &["manager"]),
    ("provenance.marker.v1.EventMarkerMint", &["administrator"]),
    ("provenance.marker.v1.EventMarkerWithdraw", &["administrator", "to_address"]),
    ("provenance.marker.v1.EventMarkerActivate", &["administrator"]),
    ("provenance.marker.v1.EventMarkerAddAccess", &["administrator"]),
    (
        "provenance.marker.v1.EventMarkerDeleteAccess",
        &["administrator", "remove_address"],
    ),
    ("provenance.marker.v1.EventMarkerFinalize", &["administrator"]),
    ("provenance.marker.v1.EventMarkerCancel", &["administrator"]),
    ("provenance.marker.v1.EventMarkerBurn", &["administrator"]),
    ("provenance.marker.v1.EventMarkerDelete", &["administrator"]),
    ("fungible_token_packet", &["receiver"]),
    ("provenance.name.v1.EventNameBound", &["address"]),
    ("name_bound", &["address"]),
    ("cosmos.authz.v1beta1.EventGrant", &["granter", "grantee"]),
    ("cosmos.authz.v1beta1.EventRevoke", &["granter", "grantee"]),
    ("provenance.attribute.v1.EventAttributeAdd", &["account", "owner"]),
    ("provenance.attribute.v1.EventAttributeUpdate", &["account", "owner"]),
    ("provenance.attribute.v1.EventAttributeDelete", &["account", "owner"]),
    (
        "provenance.attribute.v1.EventAttributeDistinctDelete",
        &["account", "owner"],
    ),
    ("cosmos.group.v1.EventCreateGroupPolicy", &["address"]),
    ("cosmos.group.v1.EventUpdateGroupPolicy", &["address"]),
    ("cosmos.group.v1.EventLeaveGroup", &["address"]),
];

fn address_keys(event_type: &str) -> Option<&'static [&'static str]> {
    ADDRESS_EVENTS
        .iter()
        .find(|(kind, _)| *kind == event_type)
        .map(|(_, keys)| *keys)
}

/// Quote-scrubbed address values from address-bearing events, in order
pub fn event_addresses(events: &[Event]) -> Vec<String> {
    events
        .iter()
        .filter_map(|event| address_keys(&event.r#type).map(|keys| (event, keys)))
        .flat_map(|(event, keys)| {
            event
                .attributes
                .iter()
                .filter(move |attr| keys.contains(&attr.key.as_str()))
                .map(|attr| scrub_quotes(&attr.value).to_string())
        })
        .collect()
}

/// Unique, non-empty union of message signers and event addresses,
/// in first-seen order
pub fn touched_addresses(signers: &[String], events: &[Event]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for addr in signers.iter().cloned().chain(event_addresses(events)) {
        if !addr.is_empty() && !out.contains(&addr) {
            out.push(addr);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_addresses() {
        let events = vec![
            Event::new("transfer", [("sender", "pb1a"), ("recipient", "pb1b"), ("amount", "5nhash")]),
            Event::new("message", [("sender", "pb1ignored")]),
            Event::new("name_bound", [("address", "\"pb1c\""), ("name", "x.pb")]),
        ];
        assert_eq!(event_addresses(&events), vec!["pb1a", "pb1b", "pb1c"]);
    }

    #[test]
    fn test_touched_addresses_dedup_and_drop_empty() {
        let signers = vec!["pb1a".to_string(), String::new(), "pb1a".to_string()];
        let events = vec![Event::new("transfer", [("sender", "pb1a"), ("recipient", "pb1b")])];
        assert_eq!(touched_addresses(&signers, &events), vec!["pb1a", "pb1b"]);
    }
}
