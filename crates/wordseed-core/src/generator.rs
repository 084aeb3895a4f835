//! Pipeline composition: entropy → checksum → word indices → mnemonic.
//!
//! [`MnemonicGenerator`] owns a shared, immutable [`WordList`] and runs each
//! request as one linear pass. [`MnemonicGenerator::generate`] and
//! [`MnemonicGenerator::explain`] share the same encoding step; the
//! [`GenerationReport`] is only a projection of its intermediate values.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::bits::{CombinedBits, WordIndex};
use crate::checksum::{compute_checksum, Checksum};
use crate::constants::MNEMONIC_WORDS;
use crate::entropy::{Entropy, EntropyMode};
use crate::error::MnemonicError;
use crate::mnemonic::Mnemonic;
use crate::wordlist::WordList;

/// Intermediate values of one encoding pass.
struct Encoding {
    checksum: Checksum,
    combined: CombinedBits,
    indices: [WordIndex; MNEMONIC_WORDS],
    mnemonic: Mnemonic,
}

/// One word of a [`GenerationReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Zeroize, ZeroizeOnDrop)]
pub struct WordBreakdown {
    /// 1-based position in the mnemonic.
    pub position: usize,
    pub word: String,
    pub index: WordIndex,
    /// The 11 bits this word encodes.
    pub bits: String,
}

/// Diagnostic view of a full encoding pass. Holds the entropy in every
/// rendering, so it is wiped on drop like [`Entropy`].
#[derive(Debug, Clone, Serialize, Zeroize, ZeroizeOnDrop)]
pub struct GenerationReport {
    pub entropy_hex: String,
    pub entropy_binary: String,
    pub checksum: Checksum,
    pub checksum_binary: String,
    /// 33 hex digits.
    pub combined_hex: String,
    /// 132 binary digits.
    pub combined_binary: String,
    pub words: Vec<WordBreakdown>,
    pub mnemonic: Mnemonic,
}

/// Encodes entropy into mnemonics against a fixed word list.
///
/// Cheap to clone; clones share the word list.
#[derive(Debug, Clone)]
pub struct MnemonicGenerator {
    wordlist: Arc<WordList>,
}

impl MnemonicGenerator {
    pub fn new(wordlist: Arc<WordList>) -> Self {
        Self { wordlist }
    }

    /// Generator over the built-in BIP-39 English list.
    pub fn english() -> Self {
        Self::new(Arc::new(WordList::english()))
    }

    pub fn wordlist(&self) -> &WordList {
        &self.wordlist
    }

    /// Obtain entropy for `mode` and encode it.
    ///
    /// Input errors abort before any hashing; no partial mnemonic is ever
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordseed_core::{EntropyMode, MnemonicGenerator};
    /// let generator = MnemonicGenerator::english();
    /// let m = generator
    ///     .generate(EntropyMode::Hex, Some("00000000000000000000000000000000"))
    ///     .unwrap();
    /// assert_eq!(m.words()[11], "about");
    /// ```
    pub fn generate(&self, mode: EntropyMode, input: Option<&str>) -> Result<Mnemonic, MnemonicError> {
        let entropy = mode.obtain(input)?;
        debug!(%mode, "entropy obtained");
        Ok(self.encode(&entropy).mnemonic)
    }

    /// Encode already-obtained entropy.
    pub fn from_entropy(&self, entropy: &Entropy) -> Mnemonic {
        self.encode(entropy).mnemonic
    }

    /// Like [`generate`](Self::generate), returning every intermediate value.
    pub fn explain(&self, mode: EntropyMode, input: Option<&str>) -> Result<GenerationReport, MnemonicError> {
        let entropy = mode.obtain(input)?;
        debug!(%mode, "entropy obtained for report");
        Ok(self.explain_entropy(&entropy))
    }

    pub fn explain_entropy(&self, entropy: &Entropy) -> GenerationReport {
        let enc = self.encode(entropy);
        let words = enc
            .indices
            .iter()
            .zip(enc.mnemonic.words())
            .enumerate()
            .map(|(i, (&index, word))| WordBreakdown {
                position: i + 1,
                word: word.clone(),
                index,
                bits: index.to_binary(),
            })
            .collect();

        GenerationReport {
            entropy_hex: entropy.to_hex(),
            entropy_binary: entropy.to_binary(),
            checksum: enc.checksum,
            checksum_binary: enc.checksum.to_binary(),
            combined_hex: enc.combined.to_hex(),
            combined_binary: enc.combined.to_binary(),
            words,
            mnemonic: enc.mnemonic,
        }
    }

    fn encode(&self, entropy: &Entropy) -> Encoding {
        let checksum = compute_checksum(entropy);
        let combined = CombinedBits::new(entropy, checksum);
        let indices = combined.indices();
        let mnemonic = Mnemonic::resolve(&self.wordlist, &indices);
        debug!(words = mnemonic.len(), "mnemonic encoded");
        Encoding {
            checksum,
            combined,
            indices,
            mnemonic,
        }
    }
}
