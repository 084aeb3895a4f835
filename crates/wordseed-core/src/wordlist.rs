//! The 2048-word dictionary that maps word indices to words.
//!
//! A [`WordList`] is validated once at construction (exact entry count, no
//! empty entries, no duplicates) and is immutable afterwards. Share it
//! between callers behind an `Arc`; no locking is needed.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use tracing::{debug, info};

use crate::bits::WordIndex;
use crate::constants::WORDLIST_LEN;
use crate::error::{MnemonicError, WordlistError};

/// Ordered, validated table of exactly 2048 unique words.
pub struct WordList {
    words: Vec<String>,
    /// Reverse lookup: word -> index.
    positions: HashMap<String, WordIndex>,
}

impl WordList {
    /// The standard BIP-39 English list.
    pub fn english() -> Self {
        let list = Self::from_words(bip39::Language::English.word_list().iter())
            .expect("bip39 English table has 2048 unique words");
        debug!(words = list.len(), "built-in English word list ready");
        list
    }

    /// Validate and index a sequence of words. Entries are used as given;
    /// line numbers in errors are 1-based positions in the sequence.
    pub fn from_words<I, S>(words: I) -> Result<Self, WordlistError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words.into_iter().map(|w| w.as_ref().to_string()).collect();
        if words.len() != WORDLIST_LEN {
            return Err(WordlistError::WrongCount {
                expected: WORDLIST_LEN,
                got: words.len(),
            });
        }

        let mut positions = HashMap::with_capacity(WORDLIST_LEN);
        for (i, word) in words.iter().enumerate() {
            if word.is_empty() {
                return Err(WordlistError::EmptyEntry { line: i + 1 });
            }
            let index = WordIndex::from_masked(i as u16);
            if let Some(first) = positions.insert(word.clone(), index) {
                return Err(WordlistError::DuplicateWord {
                    word: word.clone(),
                    first: first.as_usize() + 1,
                    second: i + 1,
                });
            }
        }

        Ok(Self { words, positions })
    }

    /// Parse one word per line. Surrounding whitespace on each line is
    /// trimmed; a trailing newline does not count as an entry.
    pub fn parse(text: &str) -> Result<Self, WordlistError> {
        Self::from_words(text.lines().map(str::trim))
    }

    /// Read and parse a word list file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, WordlistError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| WordlistError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let list = Self::parse(&text)?;
        info!(path = %path.display(), words = list.len(), "word list loaded");
        Ok(list)
    }

    /// Always 2048.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The word at `index`.
    pub fn resolve(&self, index: WordIndex) -> &str {
        &self.words[index.as_usize()]
    }

    /// Index of an exact, case-sensitive match.
    pub fn reverse_lookup(&self, word: &str) -> Result<WordIndex, MnemonicError> {
        self.positions
            .get(word)
            .copied()
            .ok_or_else(|| MnemonicError::NotFound(word.to_string()))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.positions.contains_key(word)
    }

    /// All `(index, word)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (WordIndex, &str)> + '_ {
        self.words
            .iter()
            .enumerate()
            .map(|(i, w)| (WordIndex::from_masked(i as u16), w.as_str()))
    }
}

impl fmt::Debug for WordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordList")
            .field("len", &self.words.len())
            .field("first", &self.words.first())
            .field("last", &self.words.last())
            .finish()
    }
}
