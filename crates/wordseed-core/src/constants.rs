//! Encoding constants. All widths in bits unless the name says otherwise.

/// Entropy width.
pub const ENTROPY_BITS: u32 = 128;

/// Entropy width in bytes, the SHA-256 input length.
pub const ENTROPY_BYTES: usize = 16;

/// Hex digits in a full entropy string (without `0x`).
pub const ENTROPY_HEX_DIGITS: usize = 32;

/// Checksum width: one bit per 32 bits of entropy.
pub const CHECKSUM_BITS: u32 = ENTROPY_BITS / 32;

/// Entropy plus checksum.
pub const COMBINED_BITS: u32 = ENTROPY_BITS + CHECKSUM_BITS;

/// Width of one word index.
pub const WORD_BITS: u32 = 11;

/// Mask selecting one word index.
pub const WORD_MASK: u16 = 0x7FF;

/// Words in a mnemonic.
pub const MNEMONIC_WORDS: usize = (COMBINED_BITS / WORD_BITS) as usize;

/// Entries in a word list.
pub const WORDLIST_LEN: usize = 1 << WORD_BITS;

/// Mask selecting the low bits of an index that line up with the checksum
/// in the final word.
pub const PATTERN_MASK: u16 = (1 << CHECKSUM_BITS) - 1;

/// Number of distinct checksum / bit patterns.
pub const PATTERN_COUNT: usize = 1 << CHECKSUM_BITS;
