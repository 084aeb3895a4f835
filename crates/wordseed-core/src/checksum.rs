//! BIP-39 checksum for 128-bit entropy.
//!
//! The checksum is the top 4 bits of `SHA-256(entropy)`, where the entropy is
//! hashed as 16 big-endian bytes.

use serde::Serialize;
use sha2::{Digest, Sha256};
use zeroize::Zeroize;

use crate::constants::CHECKSUM_BITS;
use crate::entropy::Entropy;

/// 4-bit checksum. Only obtainable from [`compute_checksum`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Zeroize)]
#[serde(transparent)]
pub struct Checksum(u8);

impl Checksum {
    /// Value in `[0, 15]`.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Four binary digits, e.g. `"0011"`.
    pub fn to_binary(self) -> String {
        format!("{:0width$b}", self.0, width = CHECKSUM_BITS as usize)
    }
}

/// Hash the entropy and keep the high nibble of the first digest byte.
pub fn compute_checksum(entropy: &Entropy) -> Checksum {
    let digest = Sha256::digest(entropy.to_be_bytes());
    Checksum(digest[0] >> (8 - CHECKSUM_BITS))
}
