//! Message signer registry
//!
//! Maps a message type to the payload fields naming the addresses that
//! signed or authorized it. Entries are keyed by a dot-separated suffix of
//! the type name, so `bank.v1beta1.MsgSend` and `nft.v1beta1.MsgSend` are
//! distinct entries while `MsgMultiSend` matches any version.

use std::collections::HashMap;

use log::debug;
use prost::Message;
use thiserror::Error;

use crate::proto::MessageEnvelope;

/// Deepest level of embedded messages followed before giving up. Matches
/// the protobuf decoder's own recursion limit.
pub const MAX_NESTING_DEPTH: usize = 100;

/// Signer extraction errors
#[derive(Debug, Error)]
pub enum SignerError {
    #[error("Failed to decode {type_url}: {source}")]
    Decode {
        type_url: String,
        source: prost::DecodeError,
    },
    #[error("{type_url} is embedded more than {limit} messages deep")]
    NestingTooDeep { type_url: String, limit: usize },
}

/// Extracts signer addresses from one message shape
pub trait SignerExtractor: Send + Sync {
    /// Addresses in message-defined order. Duplicates are preserved.
    fn signers(
        &self,
        env: &MessageEnvelope,
        scope: &NestingScope<'_>,
    ) -> Result<Vec<String>, SignerError>;
}

/// The registry as seen from one level of message nesting. Extractors that
/// recurse into embedded messages go through their scope so the depth is
/// tracked.
#[derive(Clone, Copy)]
pub struct NestingScope<'a> {
    registry: &'a MessageRegistry,
    depth: usize,
}

impl<'a> NestingScope<'a> {
    pub fn registry(&self) -> &'a MessageRegistry {
        self.registry
    }

    /// 0 for a transaction's own messages
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Signers of one message at this depth
    pub fn signers_of(&self, env: &MessageEnvelope) -> Result<Vec<String>, SignerError> {
        if self.depth > MAX_NESTING_DEPTH {
            return Err(SignerError::NestingTooDeep {
                type_url: env.type_url.clone(),
                limit: MAX_NESTING_DEPTH,
            });
        }
        match self.registry.lookup(&env.type_url) {
            Some(handler) => handler.signers(env, self),
            None => {
                debug!("This type URL is not yet supported as an address-based msg: {}", env.type_url);
                Ok(Vec::new())
            }
        }
    }

    /// Concatenated signers of messages embedded one level below this one
    pub fn signers_of_all(&self, envs: &[MessageEnvelope]) -> Result<Vec<String>, SignerError> {
        let inner = NestingScope {
            registry: self.registry,
            depth: self.depth + 1,
        };
        let mut out = Vec::new();
        for env in envs {
            out.extend(inner.signers_of(env)?);
        }
        Ok(out)
    }
}

fn unpack<M: Message + Default>(env: &MessageEnvelope) -> Result<M, SignerError> {
    env.unpack::<M>().map_err(|source| SignerError::Decode {
        type_url: env.type_url.clone(),
        source,
    })
}

/// Reads plain fields of a decoded message
struct Fields<M> {
    extract: fn(&M) -> Vec<String>,
}

impl<M: Message + Default> SignerExtractor for Fields<M> {
    fn signers(
        &self,
        env: &MessageEnvelope,
        _scope: &NestingScope<'_>,
    ) -> Result<Vec<String>, SignerError> {
        Ok((self.extract)(&unpack::<M>(env)?))
    }
}

/// Reads fields and recurses into embedded messages
struct Nested<M> {
    extract: fn(&M, &NestingScope<'_>) -> Result<Vec<String>, SignerError>,
}

impl<M: Message + Default> SignerExtractor for Nested<M> {
    fn signers(
        &self,
        env: &MessageEnvelope,
        scope: &NestingScope<'_>,
    ) -> Result<Vec<String>, SignerError> {
        (self.extract)(&unpack::<M>(env)?, scope)
    }
}

/// Registry of known message shapes, built once and shared read-only
#[derive(Default)]
pub struct MessageRegistry {
    handlers: HashMap<String, Box<dyn SignerExtractor>>,
}

impl MessageRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a custom extractor under a type-name suffix
    pub fn register(&mut self, key: impl Into<String>, extractor: Box<dyn SignerExtractor>) {
        self.handlers.insert(key.into(), extractor);
    }

    /// Register a message whose signers are plain fields
    pub fn fields<M>(&mut self, key: &str, extract: fn(&M) -> Vec<String>)
    where
        M: Message + Default + 'static,
    {
        self.register(key, Box::new(Fields { extract }));
    }

    /// Register a message that embeds further messages
    pub fn nested<M>(
        &mut self,
        key: &str,
        extract: fn(&M, &NestingScope<'_>) -> Result<Vec<String>, SignerError>,
    ) where
        M: Message + Default + 'static,
    {
        self.register(key, Box::new(Nested { extract }));
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Find the handler for a type URL, most specific suffix first
    pub fn lookup(&self, type_url: &str) -> Option<&dyn SignerExtractor> {
        let name = type_url.rsplit('/').next().unwrap_or(type_url);
        let mut suffix = name;
        loop {
            if let Some(handler) = self.handlers.get(suffix) {
                return Some(handler.as_ref());
            }
            match suffix.split_once('.') {
                Some((_, rest)) => suffix = rest,
                None => return None,
            }
        }
    }

    pub fn is_known(&self, type_url: &str) -> bool {
        self.lookup(type_url).is_some()
    }

    /// Scope for a transaction's own messages
    pub fn top_level(&self) -> NestingScope<'_> {
        NestingScope {
            registry: self,
            depth: 0,
        }
    }

    /// Signer addresses of one message. Unknown types yield an empty list.
    pub fn signers_of(&self, env: &MessageEnvelope) -> Result<Vec<String>, SignerError> {
        self.top_level().signers_of(env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::cosmos::bank;

    fn registry() -> MessageRegistry {
        let mut reg = MessageRegistry::new();
        reg.fields::<bank::MsgSend>("bank.v1beta1.MsgSend", |m| {
            vec![m.from_address.clone(), m.to_address.clone()]
        });
        reg.fields::<bank::MsgSend>("MsgSend", |m| vec![m.to_address.clone()]);
        reg
    }

    fn send(type_url: &str) -> MessageEnvelope {
        MessageEnvelope::pack(
            type_url,
            &bank::MsgSend {
                from_address: "from".to_string(),
                to_address: "to".to_string(),
            },
        )
    }

    #[test]
    fn test_longest_suffix_wins() {
        let reg = registry();
        assert_eq!(
            reg.signers_of(&send("/cosmos.bank.v1beta1.MsgSend")).unwrap(),
            vec!["from", "to"]
        );
        assert_eq!(reg.signers_of(&send("/other.v1.MsgSend")).unwrap(), vec!["to"]);
    }

    #[test]
    fn test_suffix_must_align_on_dot() {
        let reg = registry();
        assert!(!reg.is_known("/cosmos.bank.v1beta1.XMsgSend"));
        assert!(reg.is_known("MsgSend"));
    }

    #[test]
    fn test_unknown_type_is_empty() {
        let reg = registry();
        let env = MessageEnvelope {
            type_url: "/cosmos.unknown.v1.MsgNothing".to_string(),
            value: vec![0xff, 0xff],
        };
        assert!(reg.signers_of(&env).unwrap().is_empty());
    }

    #[test]
    fn test_known_type_bad_payload_errors() {
        let reg = registry();
        let env = MessageEnvelope {
            type_url: "/cosmos.bank.v1beta1.MsgSend".to_string(),
            value: vec![0x0a, 0x10, 0x01],
        };
        assert!(matches!(reg.signers_of(&env), Err(SignerError::Decode { .. })));
    }

    #[test]
    fn test_scope_depth_limit() {
        let reg = registry();
        let env = send("/cosmos.bank.v1beta1.MsgSend");
        let at_limit = NestingScope {
            registry: &reg,
            depth: MAX_NESTING_DEPTH,
        };
        assert_eq!(at_limit.signers_of(&env).unwrap(), vec!["from", "to"]);
        assert!(matches!(
            at_limit.signers_of_all(std::slice::from_ref(&env)),
            Err(SignerError::NestingTooDeep { limit: MAX_NESTING_DEPTH, .. })
        ));
    }
}
