//! Word list queries keyed on the low 4 bits of a word index.
//!
//! In a 12-word mnemonic the last word's low 4 bits are the checksum, so the
//! 2048 words fall into 16 classes of 128, one per checksum value. These
//! helpers enumerate and compare those classes.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::bits::WordIndex;
use crate::checksum::{compute_checksum, Checksum};
use crate::constants::{PATTERN_COUNT, PATTERN_MASK, WORDLIST_LEN};
use crate::entropy::Entropy;
use crate::error::{MnemonicError, PatternError};
use crate::wordlist::WordList;

/// Words sharing each pattern in a full list.
pub const WORDS_PER_PATTERN: usize = WORDLIST_LEN / PATTERN_COUNT;

/// Other words listed by [`profile_word`].
pub const SIBLING_LIMIT: usize = 5;

/// Words listed per pattern when comparing patterns.
pub const COMPARE_LIMIT: usize = 5;

/// Words listed when [`explore`] resolves its input to a pattern.
pub const EXPLORE_LIMIT: usize = 10;

/// A 4-bit value in `[0, 15]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct BitPattern(u8);

impl BitPattern {
    pub fn new(value: u8) -> Result<Self, PatternError> {
        if u16::from(value) > PATTERN_MASK {
            return Err(PatternError::OutOfRange(u64::from(value)));
        }
        Ok(Self(value))
    }

    /// The low 4 bits of a word index.
    pub fn of_index(index: WordIndex) -> Self {
        Self(index.low_bits())
    }

    pub fn of_checksum(checksum: Checksum) -> Self {
        Self(checksum.value())
    }

    /// All 16 patterns, ascending.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..PATTERN_COUNT as u8).map(Self)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn matches(self, index: WordIndex) -> bool {
        index.low_bits() == self.0
    }

    pub fn to_binary(self) -> String {
        format!("{:04b}", self.0)
    }

    pub fn to_hex(self) -> String {
        format!("{:X}", self.0)
    }
}

impl fmt::Display for BitPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04b}", self.0)
    }
}

impl FromStr for BitPattern {
    type Err = PatternError;

    /// Up to four `0`/`1` digits read as binary, a single hex digit as hex,
    /// anything else as decimal. So `"10"` is 2, `"A"` is 10 and `"12"` is 12.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_uppercase();
        if s.is_empty() {
            return Err(PatternError::Empty);
        }

        let unparseable = |_| PatternError::Unparseable(s.clone());
        let value = if s.len() <= 4 && s.chars().all(|c| c == '0' || c == '1') {
            u64::from_str_radix(&s, 2).map_err(unparseable)?
        } else if s.len() == 1 && s.chars().all(|c| c.is_ascii_hexdigit()) {
            u64::from_str_radix(&s, 16).map_err(unparseable)?
        } else {
            s.parse::<u64>().map_err(unparseable)?
        };

        if value > u64::from(PATTERN_MASK) {
            return Err(PatternError::OutOfRange(value));
        }
        Ok(Self(value as u8))
    }
}

/// A word and its index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternMatch {
    pub index: WordIndex,
    pub word: String,
}

/// Words for one pattern. `count` is always the full class size, even when
/// `matches` has been cut short.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternBucket {
    pub pattern: BitPattern,
    pub count: usize,
    pub matches: Vec<PatternMatch>,
}

/// One word's position and bit pattern, plus a few words sharing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordProfile {
    pub word: String,
    pub index: WordIndex,
    /// 11 binary digits.
    pub bits: String,
    pub pattern: BitPattern,
    pub siblings: Vec<String>,
}

/// What [`explore`] found for its input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Exploration {
    Word(WordProfile),
    Pattern(PatternBucket),
}

fn matching(list: &WordList, pattern: BitPattern) -> impl Iterator<Item = PatternMatch> + '_ {
    list.iter()
        .filter(move |(index, _)| pattern.matches(*index))
        .map(|(index, word)| PatternMatch {
            index,
            word: word.to_string(),
        })
}

/// Every word whose index ends in `pattern`, in index order.
pub fn words_with_pattern(list: &WordList, pattern: BitPattern) -> Vec<PatternMatch> {
    matching(list, pattern).collect()
}

/// One bucket per pattern, ascending, each holding all its words.
pub fn pattern_distribution(list: &WordList) -> Vec<PatternBucket> {
    BitPattern::all()
        .map(|pattern| {
            let matches = words_with_pattern(list, pattern);
            PatternBucket {
                pattern,
                count: matches.len(),
                matches,
            }
        })
        .collect()
}

/// The first `limit` words of each requested pattern, in request order.
pub fn compare_patterns(list: &WordList, patterns: &[BitPattern], limit: usize) -> Vec<PatternBucket> {
    patterns.iter().map(|&pattern| bucket(list, pattern, limit)).collect()
}

fn bucket(list: &WordList, pattern: BitPattern, limit: usize) -> PatternBucket {
    PatternBucket {
        pattern,
        count: matching(list, pattern).count(),
        matches: matching(list, pattern).take(limit).collect(),
    }
}

pub fn profile_word(list: &WordList, word: &str) -> Result<WordProfile, MnemonicError> {
    let index = list.reverse_lookup(word)?;
    let pattern = BitPattern::of_index(index);
    let siblings = matching(list, pattern)
        .filter(|m| m.index != index)
        .take(SIBLING_LIMIT)
        .map(|m| m.word)
        .collect();

    Ok(WordProfile {
        word: word.to_string(),
        index,
        bits: index.to_binary(),
        pattern,
        siblings,
    })
}

/// Profile `input` as a word, or else list the first [`EXPLORE_LIMIT`] words
/// of the bit pattern it spells.
///
/// Input is trimmed and lowercased first. Text that is neither a listed word
/// nor a pattern is `NotFound`; a number above 15 is a pattern error.
pub fn explore(list: &WordList, input: &str) -> Result<Exploration, MnemonicError> {
    let input = input.trim().to_lowercase();
    if list.contains(&input) {
        return profile_word(list, &input).map(Exploration::Word);
    }
    match input.parse::<BitPattern>() {
        Ok(pattern) => Ok(Exploration::Pattern(bucket(list, pattern, EXPLORE_LIMIT))),
        Err(e @ PatternError::OutOfRange(_)) => Err(e.into()),
        Err(_) => Err(MnemonicError::NotFound(input)),
    }
}

/// The words that can close a mnemonic for `entropy`: those whose low 4 bits
/// equal its checksum.
pub fn checksum_word_candidates(list: &WordList, entropy: &Entropy) -> Vec<PatternMatch> {
    words_with_pattern(list, BitPattern::of_checksum(compute_checksum(entropy)))
}
