//! # wordseed-core
//!
//! Encodes 128 bits of entropy into a 12-word BIP-39 mnemonic.
//!
//! The pipeline runs strictly forward: entropy is obtained (random, hex or
//! binary), a 4-bit SHA-256 checksum is appended, the resulting 132 bits are
//! split into twelve 11-bit indices, and each index is resolved against an
//! immutable 2048-word [`WordList`].
//!
//! # Modules
//!
//! - [`error`]: error enums per failure domain, folded into `MnemonicError`
//! - [`constants`]: bit widths and table sizes
//! - [`entropy`]: `Entropy` and the three `EntropyMode`s
//! - [`checksum`]: SHA-256 checksum
//! - [`bits`]: `CombinedBits` and `WordIndex` partitioning
//! - [`wordlist`]: validated 2048-word table
//! - [`mnemonic`]: the 12-word output
//! - [`generator`]: pipeline composition and diagnostic reports
//! - [`analysis`]: low-4-bit pattern queries over the word list

pub mod analysis;
pub mod bits;
pub mod checksum;
pub mod constants;
pub mod entropy;
pub mod error;
pub mod generator;
pub mod mnemonic;
pub mod wordlist;

pub use bits::{CombinedBits, WordIndex};
pub use checksum::{compute_checksum, Checksum};
pub use entropy::{Entropy, EntropyMode};
pub use error::{FormatError, MnemonicError, PatternError, WordlistError};
pub use generator::{GenerationReport, MnemonicGenerator, WordBreakdown};
pub use mnemonic::Mnemonic;
pub use wordlist::WordList;
