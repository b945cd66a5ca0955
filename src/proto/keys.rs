//! cosmos.crypto public key encodings

use super::MessageEnvelope;

/// secp256k1, secp256r1 and ed25519 keys share this shape
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PubKey {
    #[prost(bytes = "vec", tag = "1")]
    pub key: Vec<u8>,
}

/// cosmos.crypto.multisig.LegacyAminoPubKey
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LegacyAminoPubKey {
    #[prost(uint32, tag = "1")]
    pub threshold: u32,
    #[prost(message, repeated, tag = "2")]
    pub public_keys: Vec<MessageEnvelope>,
}

/// cosmos.crypto.multisig.v1beta1.CompactBitArray
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CompactBitArray {
    #[prost(uint32, tag = "1")]
    pub extra_bits_stored: u32,
    #[prost(bytes = "vec", tag = "2")]
    pub elems: Vec<u8>,
}

impl CompactBitArray {
    /// Build from a list of set/unset flags
    pub fn from_bits(bits: &[bool]) -> Self {
        let mut elems = vec![0u8; (bits.len() + 7) / 8];
        for (i, set) in bits.iter().enumerate() {
            if *set {
                elems[i >> 3] |= 1 << (7 - (i % 8));
            }
        }
        Self {
            extra_bits_stored: (bits.len() % 8) as u32,
            elems,
        }
    }

    /// Number of bits carried, never more than the stored bytes hold
    pub fn count(&self) -> usize {
        let capacity = self.elems.len() * 8;
        if self.elems.is_empty() {
            0
        } else if self.extra_bits_stored == 0 {
            capacity
        } else {
            ((self.elems.len() - 1) * 8).saturating_add(self.extra_bits_stored as usize).min(capacity)
        }
    }

    /// Whether bit `i` is set; out of range reads as unset
    pub fn get(&self, i: usize) -> bool {
        if i >= self.count() {
            return false;
        }
        self.elems
            .get(i >> 3)
            .map_or(false, |byte| byte & (1 << (7 - (i % 8))) != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_array_roundtrip() {
        let bits = [true, false, true, true, false, false, false, false, true, false];
        let arr = CompactBitArray::from_bits(&bits);

        assert_eq!(arr.count(), 10);
        for (i, bit) in bits.iter().enumerate() {
            assert_eq!(arr.get(i), *bit, "bit {}", i);
        }
        assert!(!arr.get(10));
    }

    #[test]
    fn test_full_byte_count() {
        let arr = CompactBitArray::from_bits(&[true; 8]);
        assert_eq!(arr.extra_bits_stored, 0);
        assert_eq!(arr.count(), 8);
        assert!(arr.get(7));
    }

    #[test]
    fn test_oversized_extra_bits_clamped() {
        let arr = CompactBitArray {
            extra_bits_stored: 200,
            elems: vec![0xff],
        };
        assert_eq!(arr.count(), 8);
        assert!(arr.get(7));
        assert!(!arr.get(8));
        assert!(!arr.get(199));
    }
}
