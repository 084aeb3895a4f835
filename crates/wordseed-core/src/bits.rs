//! Packing entropy and checksum into 132 bits and splitting them into
//! twelve 11-bit word indices.
//!
//! Layout, most significant bit first:
//!
//! ```text
//! | entropy (128) | checksum (4) |
//! | w0 (11) | w1 (11) | ... | w10 (11) | w11: 7 entropy + 4 checksum |
//! ```
//!
//! Group `i` is `(combined >> (121 - 11 * i)) & 0x7FF`. The 132-bit value
//! never needs to be materialized: every group except the last lies
//! entirely inside the entropy, and the last one takes the low 7 entropy
//! bits followed by the checksum.

use std::fmt;

use serde::Serialize;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::checksum::Checksum;
use crate::constants::{CHECKSUM_BITS, COMBINED_BITS, MNEMONIC_WORDS, PATTERN_MASK, WORD_BITS, WORD_MASK};
use crate::entropy::Entropy;

/// An 11-bit index into a word list, always in `[0, 2047]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Zeroize)]
#[serde(transparent)]
pub struct WordIndex(u16);

impl WordIndex {
    /// Checked construction; `None` above 2047.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordseed_core::WordIndex;
    /// assert_eq!(WordIndex::new(2047).map(|i| i.value()), Some(2047));
    /// assert!(WordIndex::new(2048).is_none());
    /// ```
    pub fn new(value: u16) -> Option<Self> {
        (value <= WORD_MASK).then_some(Self(value))
    }

    /// Keep the low 11 bits. Range is guaranteed by the mask.
    pub(crate) fn from_masked(value: u16) -> Self {
        Self(value & WORD_MASK)
    }

    pub fn value(self) -> u16 {
        self.0
    }

    pub fn as_usize(self) -> usize {
        usize::from(self.0)
    }

    /// Low 4 bits. For the final word of a mnemonic this is the checksum.
    pub fn low_bits(self) -> u8 {
        (self.0 & PATTERN_MASK) as u8
    }

    /// Eleven binary digits, e.g. `"00000000011"`.
    pub fn to_binary(self) -> String {
        format!("{:0width$b}", self.0, width = WORD_BITS as usize)
    }
}

impl fmt::Display for WordIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// `(entropy << 4) | checksum`, held as its two parts.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct CombinedBits {
    entropy: u128,
    checksum: u8,
}

impl CombinedBits {
    pub fn new(entropy: &Entropy, checksum: Checksum) -> Self {
        Self {
            entropy: entropy.value(),
            checksum: checksum.value(),
        }
    }

    /// The 11-bit group at `position`, most significant group first.
    /// `None` past the twelfth group.
    pub fn group(&self, position: usize) -> Option<WordIndex> {
        (position < MNEMONIC_WORDS).then(|| self.extract(position))
    }

    /// All twelve groups in order.
    pub fn indices(&self) -> [WordIndex; MNEMONIC_WORDS] {
        std::array::from_fn(|position| self.extract(position))
    }

    fn extract(&self, position: usize) -> WordIndex {
        let shift = COMBINED_BITS - WORD_BITS * (position as u32 + 1);
        let raw = if shift >= CHECKSUM_BITS {
            self.entropy >> (shift - CHECKSUM_BITS)
        } else {
            (self.entropy << (CHECKSUM_BITS - shift)) | u128::from(self.checksum >> shift)
        };
        WordIndex::from_masked(raw as u16)
    }

    /// The low 128 of the 132 bits.
    fn low(&self) -> u128 {
        (self.entropy << CHECKSUM_BITS) | u128::from(self.checksum)
    }

    /// The top 4 of the 132 bits.
    fn high(&self) -> u8 {
        (self.entropy >> (128 - CHECKSUM_BITS)) as u8
    }

    /// 33 lowercase hex digits.
    pub fn to_hex(&self) -> String {
        format!("{:x}{:032x}", self.high(), self.low())
    }

    /// 132 binary digits.
    pub fn to_binary(&self) -> String {
        format!("{:04b}{:0128b}", self.high(), self.low())
    }
}

impl fmt::Debug for CombinedBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CombinedBits")
            .field("bits", &"[REDACTED]")
            .finish()
    }
}

/// Split entropy plus checksum into the twelve word indices.
pub fn pack(entropy: &Entropy, checksum: Checksum) -> [WordIndex; MNEMONIC_WORDS] {
    CombinedBits::new(entropy, checksum).indices()
}
