//! cosmos.tx.v1beta1 / cosmos.base.abci.v1beta1 transaction objects

use super::{Coin, MessageEnvelope};
use super::keys::CompactBitArray;

/// Response of the `GetTx` query: decoded body plus execution result
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetTxResponse {
    #[prost(message, optional, tag = "1")]
    pub tx: Option<Tx>,
    #[prost(message, optional, tag = "2")]
    pub tx_response: Option<TxResponse>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Tx {
    #[prost(message, optional, tag = "1")]
    pub body: Option<TxBody>,
    #[prost(message, optional, tag = "2")]
    pub auth_info: Option<AuthInfo>,
    #[prost(bytes = "vec", repeated, tag = "3")]
    pub signatures: Vec<Vec<u8>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TxBody {
    #[prost(message, repeated, tag = "1")]
    pub messages: Vec<MessageEnvelope>,
    #[prost(string, tag = "2")]
    pub memo: String,
    #[prost(uint64, tag = "3")]
    pub timeout_height: u64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AuthInfo {
    #[prost(message, repeated, tag = "1")]
    pub signer_infos: Vec<SignerInfo>,
    #[prost(message, optional, tag = "2")]
    pub fee: Option<Fee>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SignerInfo {
    /// Absent when the key is already known on chain
    #[prost(message, optional, tag = "1")]
    pub public_key: Option<MessageEnvelope>,
    #[prost(message, optional, tag = "2")]
    pub mode_info: Option<ModeInfo>,
    #[prost(uint64, tag = "3")]
    pub sequence: u64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ModeInfo {
    #[prost(oneof = "mode_info::Sum", tags = "1, 2")]
    pub sum: Option<mode_info::Sum>,
}

pub mod mode_info {
    use super::CompactBitArray;

    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Sum {
        #[prost(message, tag = "1")]
        Single(Single),
        #[prost(message, tag = "2")]
        Multi(Multi),
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Single {
        #[prost(int32, tag = "1")]
        pub mode: i32,
    }

    /// Which sub-keys of a multisig signed, and how
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Multi {
        #[prost(message, optional, tag = "1")]
        pub bitarray: Option<CompactBitArray>,
        #[prost(message, repeated, tag = "2")]
        pub mode_infos: Vec<super::ModeInfo>,
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Fee {
    #[prost(message, repeated, tag = "1")]
    pub amount: Vec<Coin>,
    #[prost(uint64, tag = "2")]
    pub gas_limit: u64,
    #[prost(string, tag = "3")]
    pub payer: String,
    #[prost(string, tag = "4")]
    pub granter: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TxResponse {
    #[prost(int64, tag = "1")]
    pub height: i64,
    #[prost(string, tag = "2")]
    pub txhash: String,
    #[prost(string, tag = "3")]
    pub codespace: String,
    /// Zero on success
    #[prost(uint32, tag = "4")]
    pub code: u32,
    #[prost(string, tag = "6")]
    pub raw_log: String,
    /// Per-message logs; empty on newer chain versions
    #[prost(message, repeated, tag = "7")]
    pub logs: Vec<AbciMessageLog>,
    #[prost(int64, tag = "9")]
    pub gas_wanted: i64,
    #[prost(int64, tag = "10")]
    pub gas_used: i64,
    #[prost(message, optional, tag = "11")]
    pub tx: Option<MessageEnvelope>,
    #[prost(string, tag = "12")]
    pub timestamp: String,
    #[prost(message, repeated, tag = "13")]
    pub events: Vec<Event>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AbciMessageLog {
    #[prost(uint32, tag = "1")]
    pub msg_index: u32,
    #[prost(string, tag = "2")]
    pub log: String,
    #[prost(message, repeated, tag = "3")]
    pub events: Vec<Event>,
}

/// ABCI event. Also wire-compatible with the `StringEvent` used in logs.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Event {
    #[prost(string, tag = "1")]
    pub r#type: String,
    #[prost(message, repeated, tag = "2")]
    pub attributes: Vec<EventAttribute>,
}

impl Event {
    pub fn new<K: Into<String>, V: Into<String>>(
        kind: impl Into<String>,
        attributes: impl IntoIterator<Item = (K, V)>,
    ) -> Self {
        Self {
            r#type: kind.into(),
            attributes: attributes
                .into_iter()
                .map(|(key, value)| EventAttribute {
                    key: key.into(),
                    value: value.into(),
                    index: false,
                })
                .collect(),
        }
    }

    /// Value of the first attribute with this key
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.key == key)
            .map(|attr| attr.value.as_str())
    }

    pub fn has_attribute(&self, key: &str) -> bool {
        self.attributes.iter().any(|attr| attr.key == key)
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EventAttribute {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(string, tag = "2")]
    pub value: String,
    #[prost(bool, tag = "3")]
    pub index: bool,
}
