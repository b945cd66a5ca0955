//! Cryptography module - hashing, public keys, multisig breakdown

mod hash;
mod keys;
mod multisig;

pub use hash::*;
pub use keys::*;
pub use multisig::*;
