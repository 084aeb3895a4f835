//! Shared test helpers.

use std::io::Write;
use std::path::PathBuf;

use wordseed_core::WordList;

/// Published 128-bit BIP-39 vectors: (entropy hex, mnemonic).
pub const BIP39_VECTORS: &[(&str, &str)] = &[
    (
        "00000000000000000000000000000000",
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
    ),
    (
        "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
        "legal winner thank year wave sausage worth useful legal winner thank yellow",
    ),
    (
        "80808080808080808080808080808080",
        "letter advice cage absurd amount doctor acoustic avoid letter advice cage above",
    ),
    (
        "ffffffffffffffffffffffffffffffff",
        "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo wrong",
    ),
    (
        "9e885d952ad362caeb4efe34a8e91bd2",
        "ozone drill grab fiber curtain grace pudding thank cruise elder eight picnic",
    ),
    (
        "c0ba5a8e914111210f2bd131f3d5e08d",
        "scheme spot photo card baby mountain device kick cradle pact join borrow",
    ),
    (
        "23db8160a31d3e0dca3688ed941adbf3",
        "cat swing flag economy stadium alone churn speed unique patch report train",
    ),
    (
        "f30f8c1da665478f49b001d94c5fc452",
        "vessel ladder alter error federal sibling chat ability sun glass valve picture",
    ),
];

/// `n` distinct placeholder words: `w0000`, `w0001`, ...
pub fn synthetic_words(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("w{i:04}")).collect()
}

/// A valid 2048-entry list of placeholder words.
pub fn synthetic_list() -> WordList {
    WordList::from_words(synthetic_words(2048)).expect("2048 distinct words")
}

/// Write one word per line into `dir/name`.
pub fn write_wordlist(dir: &tempfile::TempDir, name: &str, words: &[String]) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("create word list file");
    for w in words {
        writeln!(file, "{w}").expect("write word");
    }
    path
}
