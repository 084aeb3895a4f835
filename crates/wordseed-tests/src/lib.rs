//! Integration test suite for wordseed.
//!
//! Checks the encoding pipeline against the published BIP-39 vectors, the
//! reference `bip39` crate, and randomized properties.

pub mod helpers;
