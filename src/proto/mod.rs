//! Protocol objects received from the node
//!
//! Hand-maintained prost definitions covering only the fields this crate
//! reads. Field tags match the upstream .proto files; unknown fields are
//! skipped on decode, so partial definitions decode full payloads.

/// Declare a message whose only address-bearing field is one string
/// (or one repeated string) at a fixed tag.
macro_rules! address_message {
    ($(#[$meta:meta])* $name:ident { $field:ident = $tag:tt }) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct $name {
            #[prost(string, tag = $tag)]
            pub $field: String,
        }
    };
    ($(#[$meta:meta])* $name:ident { repeated $field:ident = $tag:tt }) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct $name {
            #[prost(string, repeated, tag = $tag)]
            pub $field: Vec<String>,
        }
    };
}

pub mod cosmos;
pub mod ibc;
pub mod keys;
pub mod provenance;
pub mod tx;
pub mod wasm;

use prost::{DecodeError, Message};

/// A type-tagged, opaque encoded message (protobuf `Any`)
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MessageEnvelope {
    /// Fully qualified type name, e.g. `/cosmos.bank.v1beta1.MsgSend`
    #[prost(string, tag = "1")]
    pub type_url: String,
    /// Encoded payload, interpretable once the type is known
    #[prost(bytes = "vec", tag = "2")]
    pub value: Vec<u8>,
}

impl MessageEnvelope {
    /// Wrap an encoded message under a type URL
    pub fn pack<M: Message>(type_url: impl Into<String>, msg: &M) -> Self {
        Self {
            type_url: type_url.into(),
            value: msg.encode_to_vec(),
        }
    }

    /// Decode the payload as `M`
    pub fn unpack<M: Message + Default>(&self) -> Result<M, DecodeError> {
        M::decode(self.value.as_slice())
    }

    /// Type name with any `/` or `type.googleapis.com/` prefix removed
    pub fn type_name(&self) -> &str {
        self.type_url
            .rsplit('/')
            .next()
            .unwrap_or(self.type_url.as_str())
    }
}

/// cosmos.base.v1beta1.Coin
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Coin {
    #[prost(string, tag = "1")]
    pub denom: String,
    #[prost(string, tag = "2")]
    pub amount: String,
}

impl Coin {
    pub fn new(amount: impl ToString, denom: impl Into<String>) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.to_string(),
        }
    }
}
