//! The 12-word output of the pipeline.

use std::fmt;

use serde::Serialize;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::bits::WordIndex;
use crate::constants::MNEMONIC_WORDS;
use crate::wordlist::WordList;

/// Exactly twelve words, in order. Only built by resolving a full set of
/// word indices, so a partial mnemonic cannot exist.
#[derive(Clone, PartialEq, Eq, Serialize, Zeroize, ZeroizeOnDrop)]
#[serde(transparent)]
pub struct Mnemonic {
    words: Vec<String>,
}

impl Mnemonic {
    pub(crate) fn resolve(list: &WordList, indices: &[WordIndex; MNEMONIC_WORDS]) -> Self {
        Self {
            words: indices.iter().map(|&i| list.resolve(i).to_string()).collect(),
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Always 12.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words joined by single spaces.
    pub fn phrase(&self) -> String {
        self.words.join(" ")
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.phrase())
    }
}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mnemonic")
            .field("words", &"[REDACTED]")
            .finish()
    }
}
