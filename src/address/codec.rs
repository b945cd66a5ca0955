//! Bech32 address codec
//!
//! Address format: bech32(hrp, raw) where raw is 20 bytes (hash160 or
//! truncated SHA-256) or 32 bytes (secp256r1 / module style).

use bech32::{FromBase32, ToBase32, Variant};
use thiserror::Error;

use super::{AddressClass, Bech32Prefixes};

/// Raw lengths a chain address may carry
pub const ADDRESS_LENGTHS: [usize; 2] = [20, 32];

/// Address errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("Malformed address {address}: {reason}")]
    MalformedAddress { address: String, reason: String },
    #[error("Invalid address length: {0} bytes")]
    InvalidLength(usize),
    #[error("Invalid human readable prefix: {0:?}")]
    InvalidPrefix(String),
}

/// Encode raw bytes under a human readable prefix
pub fn encode(hrp: &str, raw: &[u8]) -> Result<String, AddressError> {
    if !ADDRESS_LENGTHS.contains(&raw.len()) {
        return Err(AddressError::InvalidLength(raw.len()));
    }
    bech32::encode(hrp, raw.to_base32(), Variant::Bech32)
        .map_err(|_| AddressError::InvalidPrefix(hrp.to_string()))
}

/// Decode a bech32 string into (prefix, raw bytes)
pub fn decode(address: &str) -> Result<(String, Vec<u8>), AddressError> {
    let malformed = |reason: String| AddressError::MalformedAddress {
        address: address.to_string(),
        reason,
    };

    let (hrp, data, variant) = bech32::decode(address).map_err(|e| malformed(e.to_string()))?;
    if variant != Variant::Bech32 {
        return Err(malformed("bech32m checksum".to_string()));
    }

    let raw = Vec::<u8>::from_base32(&data).map_err(|e| malformed(e.to_string()))?;
    if !ADDRESS_LENGTHS.contains(&raw.len()) {
        return Err(malformed(format!("{} byte payload", raw.len())));
    }

    Ok((hrp, raw))
}

/// Codec bound to one network's prefixes
#[derive(Debug, Clone)]
pub struct AddressCodec {
    prefixes: Bech32Prefixes,
}

impl AddressCodec {
    pub fn new(prefixes: Bech32Prefixes) -> Self {
        Self { prefixes }
    }

    pub fn prefixes(&self) -> &Bech32Prefixes {
        &self.prefixes
    }

    /// Encode raw bytes as the given class
    pub fn encode_as(&self, class: AddressClass, raw: &[u8]) -> Result<String, AddressError> {
        encode(self.prefixes.prefix(class), raw)
    }

    /// Which class an address belongs to on this network, if any
    pub fn classify(&self, address: &str) -> Option<AddressClass> {
        let (hrp, _) = decode(address).ok()?;
        self.prefixes.class_of(&hrp)
    }

    pub fn is_validator_operator(&self, address: &str) -> bool {
        self.classify(address) == Some(AddressClass::ValidatorOperator)
    }

    /// Re-render an address as another class (e.g. operator -> account)
    pub fn translate(&self, address: &str, class: AddressClass) -> Result<String, AddressError> {
        let (_, raw) = decode(address)?;
        self.encode_as(class, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_20_bytes() {
        let raw = [0x11u8; 20];
        let encoded = encode("pb", &raw).unwrap();
        assert!(encoded.starts_with("pb1"));

        let (hrp, decoded) = decode(&encoded).unwrap();
        assert_eq!(hrp, "pb");
        assert_eq!(decoded, raw.to_vec());
    }

    #[test]
    fn test_roundtrip_32_bytes() {
        let raw = [0xabu8; 32];
        let encoded = encode("tp", &raw).unwrap();
        assert_eq!(decode(&encoded).unwrap().1, raw.to_vec());
    }

    #[test]
    fn test_known_cosmos_vector() {
        let raw = hex::decode("0000000000000000000000000000000000000000").unwrap();
        assert_eq!(
            encode("cosmos", &raw).unwrap(),
            "cosmos1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqnrql8a"
        );
    }

    #[test]
    fn test_bad_checksum_rejected() {
        let mut encoded = encode("pb", &[0x22u8; 20]).unwrap();
        let last = encoded.pop().unwrap();
        encoded.push(if last == 'q' { 'p' } else { 'q' });

        assert!(matches!(
            decode(&encoded),
            Err(AddressError::MalformedAddress { .. })
        ));
    }

    #[test]
    fn test_wrong_length_rejected() {
        assert_eq!(encode("pb", &[0u8; 21]), Err(AddressError::InvalidLength(21)));

        let odd = bech32::encode("pb", [0u8; 21].to_base32(), Variant::Bech32).unwrap();
        assert!(matches!(decode(&odd), Err(AddressError::MalformedAddress { .. })));
    }

    #[test]
    fn test_bech32m_rejected() {
        let m = bech32::encode("pb", [0u8; 20].to_base32(), Variant::Bech32m).unwrap();
        assert!(matches!(decode(&m), Err(AddressError::MalformedAddress { .. })));
    }

    #[test]
    fn test_translate_between_classes() {
        let codec = AddressCodec::new(Bech32Prefixes::mainnet());
        let account = codec.encode_as(AddressClass::Account, &[5u8; 20]).unwrap();
        let valoper = codec.translate(&account, AddressClass::ValidatorOperator).unwrap();

        assert!(valoper.starts_with("pbvaloper1"));
        assert!(codec.is_validator_operator(&valoper));
        assert_eq!(codec.translate(&valoper, AddressClass::Account).unwrap(), account);
    }

    #[test]
    fn test_classify_foreign_prefix() {
        let codec = AddressCodec::new(Bech32Prefixes::testnet());
        let mainnet = encode("pb", &[1u8; 20]).unwrap();
        assert_eq!(codec.classify(&mainnet), None);
    }
}
