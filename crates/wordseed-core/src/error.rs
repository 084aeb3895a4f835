//! Error types for the mnemonic pipeline.
use thiserror::Error;

/// Failures while building a word list. Fatal: no encoding may proceed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordlistError {
    #[error("cannot read word list {path}: {reason}")] Io { path: String, reason: String },
    #[error("wrong entry count: expected {expected}, got {got}")] WrongCount { expected: usize, got: usize },
    #[error("empty entry on line {line}")] EmptyEntry { line: usize },
    #[error("duplicate word {word:?} on lines {first} and {second}")] DuplicateWord { word: String, first: usize, second: usize },
}

/// Rejected entropy input. Detected before any checksum work.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("hex entropy must be {expected} digits, got {got}")] HexLength { expected: usize, got: usize },
    #[error("invalid hex character {ch:?} at position {position}")] HexCharacter { ch: char, position: usize },
    #[error("binary entropy must be {expected} digits, got {got}")] BinaryLength { expected: usize, got: usize },
    #[error("invalid binary character {ch:?} at position {position}")] BinaryCharacter { ch: char, position: usize },
    #[error("{mode} entropy requires an input value")] MissingInput { mode: &'static str },
    #[error("random entropy takes no input value")] UnexpectedInput,
    #[error("unknown entropy mode: {0}")] UnknownMode(String),
}

/// Rejected bit pattern for word list analysis.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("empty bit pattern")] Empty,
    #[error("unparseable bit pattern: {0}")] Unparseable(String),
    #[error("bit pattern out of range 0-15: {0}")] OutOfRange(u64),
}

/// Top-level error returned by the pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MnemonicError {
    #[error("word list load error: {0}")] WordlistLoad(#[from] WordlistError),
    #[error("invalid format: {0}")] InvalidFormat(#[from] FormatError),
    #[error("word not found in word list: {0:?}")] NotFound(String),
    #[error("invalid pattern: {0}")] Pattern(#[from] PatternError),
}
