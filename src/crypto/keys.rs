//! Public keys and key-to-address derivation
//!
//! Each curve family derives its raw address differently:
//! - secp256k1: RIPEMD-160(SHA-256(compressed point)), 20 bytes
//! - secp256r1: SHA-256(SHA-256(type id) || key), 32 bytes
//! - ed25519: SHA-256(key) truncated to 20 bytes (consensus keys)
//! - legacy multisig: no single signer address, see [`MultisigKey`]

use log::error;
use thiserror::Error;

use super::hash::{hash160, sha256};
use super::multisig::MultisigKey;
use crate::address::{Address, AddressError};
use crate::proto::keys::{LegacyAminoPubKey, PubKey};
use crate::proto::MessageEnvelope;

pub const SECP256K1: &str = "secp256k1";
pub const SECP256R1: &str = "secp256r1";
pub const ED25519: &str = "ed25519";
pub const LEGACY_MULTISIG: &str = "LegacyAminoPubKey";

/// Key errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("Invalid {curve} key encoding: {reason}")]
    InvalidKeyEncoding { curve: &'static str, reason: String },
    #[error("Composite multisig key has no single signer address")]
    CompositeKey,
    #[error("Failed to decode public key {type_url}: {reason}")]
    Decode { type_url: String, reason: String },
    #[error(transparent)]
    Address(#[from] AddressError),
}

/// Short label for a key type URL, matched on substring
pub fn type_label_of(type_url: &str) -> Option<&'static str> {
    [SECP256K1, SECP256R1, ED25519, LEGACY_MULTISIG]
        .into_iter()
        .find(|label| type_url.contains(label))
}

/// A public key of one of the supported curve families
#[derive(Debug, Clone, PartialEq)]
pub enum PublicKey {
    /// 33-byte compressed point
    Secp256k1(Vec<u8>),
    /// Key bytes plus the declared type identifier, which is hashed verbatim
    Secp256r1 { key: Vec<u8>, type_id: String },
    /// 32-byte key
    Ed25519(Vec<u8>),
    LegacyMultisig(MultisigKey),
}

impl PublicKey {
    /// Interpret a protocol-encoded key by its type URL.
    ///
    /// Unsupported key types are logged and yield `Ok(None)`.
    pub fn from_envelope(env: &MessageEnvelope) -> Result<Option<Self>, KeyError> {
        let decode_err = |e: prost::DecodeError| KeyError::Decode {
            type_url: env.type_url.clone(),
            reason: e.to_string(),
        };

        let key = match type_label_of(&env.type_url) {
            Some(SECP256K1) => Self::Secp256k1(env.unpack::<PubKey>().map_err(decode_err)?.key),
            Some(SECP256R1) => Self::Secp256r1 {
                key: env.unpack::<PubKey>().map_err(decode_err)?.key,
                type_id: env
                    .type_url
                    .strip_prefix('/')
                    .unwrap_or(&env.type_url)
                    .to_string(),
            },
            Some(ED25519) => Self::Ed25519(env.unpack::<PubKey>().map_err(decode_err)?.key),
            Some(_) => Self::LegacyMultisig(MultisigKey::new(
                env.unpack::<LegacyAminoPubKey>().map_err(decode_err)?,
            )),
            None => {
                error!("This type URL is not supported as a public key type: {}", env.type_url);
                return Ok(None);
            }
        };
        Ok(Some(key))
    }

    pub fn type_label(&self) -> &'static str {
        match self {
            Self::Secp256k1(_) => SECP256K1,
            Self::Secp256r1 { .. } => SECP256R1,
            Self::Ed25519(_) => ED25519,
            Self::LegacyMultisig(_) => LEGACY_MULTISIG,
        }
    }

    /// Raw key bytes; multisig keys have none of their own
    pub fn raw_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Secp256k1(key) | Self::Ed25519(key) | Self::Secp256r1 { key, .. } => Some(key),
            Self::LegacyMultisig(_) => None,
        }
    }

    pub fn to_base64(&self) -> Option<String> {
        self.raw_bytes().map(base64::encode)
    }

    /// Derive the address this key signs for, rendered under `hrp`
    pub fn derive(&self, hrp: &str) -> Result<Address, KeyError> {
        let raw = match self {
            Self::Secp256k1(key) => {
                if key.len() != 33 {
                    return Err(KeyError::InvalidKeyEncoding {
                        curve: SECP256K1,
                        reason: format!("length must be 33 not {}", key.len()),
                    });
                }
                if key[0] != 0x02 && key[0] != 0x03 {
                    return Err(KeyError::InvalidKeyEncoding {
                        curve: SECP256K1,
                        reason: format!("first byte must be 2 or 3 not {}", key[0]),
                    });
                }
                hash160(key).to_vec()
            }
            Self::Secp256r1 { key, type_id } => {
                let mut material = sha256(type_id.as_bytes()).0.to_vec();
                material.extend_from_slice(key);
                sha256(&material).0.to_vec()
            }
            Self::Ed25519(key) => {
                if key.len() != 32 {
                    return Err(KeyError::InvalidKeyEncoding {
                        curve: ED25519,
                        reason: format!("length must be 32 not {}", key.len()),
                    });
                }
                sha256(key).truncated().to_vec()
            }
            Self::LegacyMultisig(_) => return Err(KeyError::CompositeKey),
        };
        Ok(Address::new(hrp, raw))
    }

    /// Derive and render as bech32
    pub fn derive_bech32(&self, hrp: &str) -> Result<String, KeyError> {
        Ok(self.derive(hrp)?.to_bech32()?)
    }

    /// The address an on-chain account holding this key is stored under.
    /// For multisig keys this is the composite address.
    pub fn account_address(&self, hrp: &str) -> Result<String, KeyError> {
        match self {
            Self::LegacyMultisig(multi) => Ok(multi.composite_address(hrp).to_bech32()?),
            _ => self.derive_bech32(hrp),
        }
    }
}
