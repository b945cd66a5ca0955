//! Legacy amino multisig keys
//!
//! A multisig key has no signer address of its own. The account it controls
//! lives at the composite address (truncated SHA-256 of the encoded key),
//! while the legible signers are the member keys whose slots signed.

use log::warn;
use prost::Message;
use serde::Serialize;

use super::hash::sha256;
use super::keys::{type_label_of, KeyError, PublicKey};
use crate::address::Address;
use crate::proto::keys::{CompactBitArray, LegacyAminoPubKey};

/// Threshold multisig public key
#[derive(Debug, Clone, PartialEq)]
pub struct MultisigKey {
    inner: LegacyAminoPubKey,
}

/// One member slot of a multisig key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MultisigMember {
    pub index: usize,
    pub key_type: String,
    /// None when the member key could not be interpreted
    pub address: Option<String>,
    pub signed: bool,
}

/// Threshold, composite address and per-member signing status
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MultisigBreakdown {
    pub threshold: u32,
    pub composite_address: String,
    pub members: Vec<MultisigMember>,
}

impl MultisigBreakdown {
    /// Addresses of members whose slots signed, in slot order
    pub fn signing_addresses(&self) -> Vec<String> {
        self.members
            .iter()
            .filter(|m| m.signed)
            .filter_map(|m| m.address.clone())
            .collect()
    }

    pub fn signature_count(&self) -> usize {
        self.members.iter().filter(|m| m.signed).count()
    }

    pub fn threshold_met(&self) -> bool {
        self.signature_count() >= self.threshold as usize
    }
}

impl MultisigKey {
    pub fn new(inner: LegacyAminoPubKey) -> Self {
        Self { inner }
    }

    pub fn threshold(&self) -> u32 {
        self.inner.threshold
    }

    pub fn member_count(&self) -> usize {
        self.inner.public_keys.len()
    }

    /// Address of the account controlled by this key
    pub fn composite_address(&self, hrp: &str) -> Address {
        Address::new(hrp, sha256(&self.inner.encode_to_vec()).truncated().to_vec())
    }

    /// Break the key down into its members. `signed` is the bit array from the
    /// signer's multi mode info; without one no member is marked as signed.
    pub fn breakdown(
        &self,
        hrp: &str,
        signed: Option<&CompactBitArray>,
    ) -> Result<MultisigBreakdown, KeyError> {
        let members = self
            .inner
            .public_keys
            .iter()
            .enumerate()
            .map(|(index, env)| {
                let address = match PublicKey::from_envelope(env) {
                    Ok(Some(key)) => match key.account_address(hrp) {
                        Ok(addr) => Some(addr),
                        Err(e) => {
                            warn!("Skipping multisig member {}: {}", index, e);
                            None
                        }
                    },
                    Ok(None) => None,
                    Err(e) => {
                        warn!("Skipping multisig member {}: {}", index, e);
                        None
                    }
                };
                MultisigMember {
                    index,
                    key_type: type_label_of(&env.type_url)
                        .unwrap_or(env.type_url.as_str())
                        .to_string(),
                    address,
                    signed: signed.map(|bits| bits.get(index)).unwrap_or(false),
                }
            })
            .collect();

        Ok(MultisigBreakdown {
            threshold: self.inner.threshold,
            composite_address: self.composite_address(hrp).to_bech32()?,
            members,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::keys::PubKey;
    use crate::proto::MessageEnvelope;

    fn member(fill: u8) -> MessageEnvelope {
        let mut key = vec![0x02];
        key.extend_from_slice(&[fill; 32]);
        MessageEnvelope::pack("/cosmos.crypto.secp256k1.PubKey", &PubKey { key })
    }

    fn two_of_three() -> MultisigKey {
        MultisigKey::new(LegacyAminoPubKey {
            threshold: 2,
            public_keys: vec![member(1), member(2), member(3)],
        })
    }

    #[test]
    fn test_breakdown_marks_signed_slots() {
        let multi = two_of_three();
        let bits = CompactBitArray::from_bits(&[true, false, true]);
        let breakdown = multi.breakdown("pb", Some(&bits)).unwrap();

        assert_eq!(breakdown.threshold, 2);
        assert_eq!(breakdown.members.len(), 3);
        assert_eq!(breakdown.signature_count(), 2);
        assert!(breakdown.threshold_met());

        let signers = breakdown.signing_addresses();
        assert_eq!(signers.len(), 2);
        assert_eq!(signers[0], breakdown.members[0].address.clone().unwrap());
        assert_eq!(signers[1], breakdown.members[2].address.clone().unwrap());
        assert!(!signers.contains(&breakdown.composite_address));
    }

    #[test]
    fn test_breakdown_without_bits() {
        let breakdown = two_of_three().breakdown("pb", None).unwrap();
        assert_eq!(breakdown.signature_count(), 0);
        assert!(!breakdown.threshold_met());
        assert!(breakdown.members.iter().all(|m| m.key_type == "secp256k1"));
    }

    #[test]
    fn test_bad_member_is_skipped() {
        let multi = MultisigKey::new(LegacyAminoPubKey {
            threshold: 1,
            public_keys: vec![
                MessageEnvelope::pack("/cosmos.crypto.secp256k1.PubKey", &PubKey { key: vec![9; 10] }),
                member(4),
            ],
        });
        let breakdown = multi.breakdown("pb", Some(&CompactBitArray::from_bits(&[true, true]))).unwrap();
        assert_eq!(breakdown.members[0].address, None);
        assert_eq!(breakdown.signing_addresses().len(), 1);
    }

    #[test]
    fn test_bit_array_longer_than_its_bytes() {
        let multi = MultisigKey::new(LegacyAminoPubKey {
            threshold: 3,
            public_keys: (1..=10).map(member).collect(),
        });
        let bits = CompactBitArray {
            extra_bits_stored: 200,
            elems: vec![0xff],
        };
        let breakdown = multi.breakdown("pb", Some(&bits)).unwrap();

        assert_eq!(breakdown.members.len(), 10);
        assert_eq!(breakdown.signature_count(), 8);
        assert!(!breakdown.members[8].signed);
        assert!(!breakdown.members[9].signed);
    }

    #[test]
    fn test_composite_address_is_stable() {
        let a = two_of_three().composite_address("pb");
        let b = two_of_three().composite_address("pb");
        assert_eq!(a, b);
        assert_eq!(a.raw().len(), 20);
    }
}
