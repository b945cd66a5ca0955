//! Message module - signer extraction and type classification

mod registry;
mod standard;

pub use registry::*;

use serde::Serialize;

/// A message type URL split into its module and a snake_case action name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MsgTypeBreakout {
    pub type_url: String,
    pub module: String,
    pub action: String,
}

impl MsgTypeBreakout {
    /// `/cosmos.bank.v1beta1.MsgSend` -> (`bank`, `send`);
    /// `/ibc.core.channel.v1.MsgRecvPacket` -> (`ibc_channel`, `recv_packet`).
    /// Group module actions without "Group" in their name get a `_for_group`
    /// suffix so they stay distinct from their gov namesakes.
    pub fn from_type_url(type_url: &str) -> Self {
        let parts: Vec<&str> = type_url.trim_start_matches('/').split('.').collect();
        let module = if type_url.starts_with("/ibc") {
            format!("{}_{}", parts.first().unwrap_or(&""), parts.get(2).unwrap_or(&""))
        } else {
            parts.get(1).unwrap_or(&"").to_string()
        };

        let name = parts.last().copied().unwrap_or_default();
        let short = name
            .split_once("Msg")
            .map(|(_, rest)| rest)
            .unwrap_or(name);
        let short = short.strip_suffix("Request").unwrap_or(short);

        let mut action = to_snake_case(short);
        if type_url.starts_with("/cosmos.group.v1") && !short.contains("Group") {
            action.push_str("_for_group");
        }

        Self {
            type_url: type_url.to_string(),
            module,
            action,
        }
    }
}

fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 4);
    for (i, c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_lower = chars.get(i + 1).map(|n| n.is_lowercase()).unwrap_or(false);
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_lower) {
                out.push('_');
            }
        }
        out.extend(c.to_lowercase());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakout_cosmos() {
        let b = MsgTypeBreakout::from_type_url("/cosmos.bank.v1beta1.MsgSend");
        assert_eq!(b.module, "bank");
        assert_eq!(b.action, "send");
    }

    #[test]
    fn test_breakout_ibc() {
        let b = MsgTypeBreakout::from_type_url("/ibc.core.channel.v1.MsgRecvPacket");
        assert_eq!(b.module, "ibc_channel");
        assert_eq!(b.action, "recv_packet");
    }

    #[test]
    fn test_breakout_provenance_request_suffix() {
        let b = MsgTypeBreakout::from_type_url("/provenance.metadata.v1.MsgBindOSLocatorRequest");
        assert_eq!(b.module, "metadata");
        assert_eq!(b.action, "bind_os_locator");
    }

    #[test]
    fn test_breakout_group_disambiguation() {
        let vote = MsgTypeBreakout::from_type_url("/cosmos.group.v1.MsgVote");
        assert_eq!(vote.action, "vote_for_group");

        let create = MsgTypeBreakout::from_type_url("/cosmos.group.v1.MsgCreateGroup");
        assert_eq!(create.action, "create_group");
    }
}
