//! Signature records for a transaction's signers
//!
//! Each signer info carries the signer's public key (absent when the chain
//! already knows it) and, for multisig accounts, a bit array of which
//! member slots signed.

use log::{debug, warn};
use serde::Serialize;

use crate::crypto::{MultisigBreakdown, PublicKey};
use crate::proto::keys::CompactBitArray;
use crate::proto::tx::{mode_info, SignerInfo};
use crate::tx::TxOutcome;

/// One signer of a transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignatureRecord {
    pub index: usize,
    pub key_type: String,
    /// Account address; the composite address for multisig keys
    pub address: Option<String>,
    /// Raw key bytes, base64; absent for multisig keys
    pub base64_key: Option<String>,
    pub sequence: u64,
    pub multisig: Option<MultisigBreakdown>,
}

fn multi_bits(info: &SignerInfo) -> Option<&CompactBitArray> {
    match info.mode_info.as_ref()?.sum.as_ref()? {
        mode_info::Sum::Multi(multi) => multi.bitarray.as_ref(),
        mode_info::Sum::Single(_) => None,
    }
}

fn signer_key(index: usize, info: &SignerInfo) -> Option<PublicKey> {
    let env = info.public_key.as_ref()?;
    match PublicKey::from_envelope(env) {
        Ok(key) => key,
        Err(e) => {
            warn!("Signer {} has an unusable public key: {}", index, e);
            None
        }
    }
}

fn record(index: usize, info: &SignerInfo, key: &PublicKey, hrp: &str) -> SignatureRecord {
    let address = key
        .account_address(hrp)
        .map_err(|e| warn!("Failed to derive address for signer {}: {}", index, e))
        .ok();
    let multisig = match key {
        PublicKey::LegacyMultisig(multi) => multi
            .breakdown(hrp, multi_bits(info))
            .map_err(|e| warn!("Failed to break down multisig signer {}: {}", index, e))
            .ok(),
        _ => None,
    };
    SignatureRecord {
        index,
        key_type: key.type_label().to_string(),
        address,
        base64_key: key.to_base64(),
        sequence: info.sequence,
        multisig,
    }
}

/// Records for every signer whose public key is present and supported
pub fn signature_records(outcome: &TxOutcome, hrp: &str) -> Vec<SignatureRecord> {
    outcome
        .signer_infos()
        .iter()
        .enumerate()
        .filter_map(|(index, info)| {
            let key = signer_key(index, info);
            if key.is_none() {
                debug!("Signer {} of {} has no usable public key", index, outcome.txhash());
            }
            key.map(|key| record(index, info, &key, hrp))
        })
        .collect()
}

/// Account address of the first signer. Falls back to the address half of
/// the `tx`/`acc_seq` event when the first signer's key is absent.
pub fn first_signer(outcome: &TxOutcome, hrp: &str) -> Option<String> {
    outcome
        .signer_infos()
        .first()
        .and_then(|info| signer_key(0, info))
        .and_then(|key| key.account_address(hrp).ok())
        .or_else(|| outcome.acc_seq_address())
}

/// Addresses that actually signed: single keys give their own address,
/// multisig keys the addresses of members whose slots signed
pub fn signer_addresses(outcome: &TxOutcome, hrp: &str) -> Vec<String> {
    let mut out = Vec::new();
    for (index, info) in outcome.signer_infos().iter().enumerate() {
        let Some(key) = signer_key(index, info) else {
            continue;
        };
        match &key {
            PublicKey::LegacyMultisig(multi) => match multi.breakdown(hrp, multi_bits(info)) {
                Ok(breakdown) => out.extend(breakdown.signing_addresses()),
                Err(e) => warn!("Failed to break down multisig signer {}: {}", index, e),
            },
            single => match single.derive_bech32(hrp) {
                Ok(addr) => out.push(addr),
                Err(e) => warn!("Failed to derive address for signer {}: {}", index, e),
            },
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::keys::{LegacyAminoPubKey, PubKey};
    use crate::proto::tx::{AuthInfo, Event, ModeInfo, Tx, TxResponse};
    use crate::proto::MessageEnvelope;

    const K1: &str = "/cosmos.crypto.secp256k1.PubKey";

    fn k1_env(fill: u8) -> MessageEnvelope {
        let mut key = vec![0x02];
        key.extend_from_slice(&[fill; 32]);
        MessageEnvelope::pack(K1, &PubKey { key })
    }

    fn outcome(signer_infos: Vec<SignerInfo>, events: Vec<Event>) -> TxOutcome {
        let tx = Tx {
            auth_info: Some(AuthInfo { signer_infos, fee: None }),
            ..Default::default()
        };
        TxOutcome::new(TxResponse { events, ..Default::default() }, tx)
    }

    fn single(env: Option<MessageEnvelope>, sequence: u64) -> SignerInfo {
        SignerInfo {
            public_key: env,
            mode_info: Some(ModeInfo {
                sum: Some(mode_info::Sum::Single(mode_info::Single { mode: 1 })),
            }),
            sequence,
        }
    }

    fn multi(signed: &[bool]) -> SignerInfo {
        let key = LegacyAminoPubKey {
            threshold: 2,
            public_keys: vec![k1_env(1), k1_env(2), k1_env(3)],
        };
        SignerInfo {
            public_key: Some(MessageEnvelope::pack(
                "/cosmos.crypto.multisig.LegacyAminoPubKey",
                &key,
            )),
            mode_info: Some(ModeInfo {
                sum: Some(mode_info::Sum::Multi(mode_info::Multi {
                    bitarray: Some(CompactBitArray::from_bits(signed)),
                    mode_infos: vec![],
                })),
            }),
            sequence: 4,
        }
    }

    #[test]
    fn test_single_signer_record() {
        let o = outcome(vec![single(Some(k1_env(0x11)), 9)], vec![]);
        let records = signature_records(&o, "pb");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].key_type, "secp256k1");
        assert_eq!(records[0].sequence, 9);
        assert!(records[0].address.as_deref().unwrap().starts_with("pb1"));
        assert!(records[0].base64_key.is_some());
        assert!(records[0].multisig.is_none());
    }

    #[test]
    fn test_multisig_signers() {
        let o = outcome(vec![multi(&[true, false, true])], vec![]);

        let records = signature_records(&o, "pb");
        let breakdown = records[0].multisig.as_ref().unwrap();
        assert!(breakdown.threshold_met());
        assert_eq!(records[0].address.as_deref(), Some(breakdown.composite_address.as_str()));
        assert!(records[0].base64_key.is_none());

        let signers = signer_addresses(&o, "pb");
        let member_one = PublicKey::Secp256k1(k1_env(1).unpack::<PubKey>().unwrap().key)
            .derive_bech32("pb")
            .unwrap();
        assert_eq!(signers.len(), 2);
        assert_eq!(signers[0], member_one);
    }

    #[test]
    fn test_first_signer_prefers_key() {
        let o = outcome(
            vec![single(Some(k1_env(0x11)), 0)],
            vec![Event::new("tx", [("acc_seq", "pb1fallback/3")])],
        );
        let expected = signer_addresses(&o, "pb").remove(0);
        assert_eq!(first_signer(&o, "pb"), Some(expected));
    }

    #[test]
    fn test_first_signer_falls_back_to_acc_seq() {
        let o = outcome(
            vec![single(None, 3)],
            vec![Event::new("tx", [("acc_seq", "pb1fallback/3")])],
        );
        assert_eq!(first_signer(&o, "pb").as_deref(), Some("pb1fallback"));
        assert!(signature_records(&o, "pb").is_empty());

        assert_eq!(first_signer(&outcome(vec![], vec![]), "pb"), None);
    }

    #[test]
    fn test_bad_key_is_skipped() {
        let bad = MessageEnvelope::pack(K1, &PubKey { key: vec![0x02; 5] });
        let o = outcome(vec![single(Some(bad), 0), single(Some(k1_env(7)), 1)], vec![]);

        assert_eq!(signer_addresses(&o, "pb").len(), 1);
        let records = signature_records(&o, "pb");
        assert_eq!(records.len(), 2);
        assert!(records[0].address.is_none());
    }
}
