//! Word list loading from disk and use with custom lists.

use std::sync::Arc;

use wordseed_core::{Entropy, MnemonicError, MnemonicGenerator, WordList, WordlistError};
use wordseed_tests::helpers::{synthetic_list, synthetic_words, write_wordlist};

#[test]
fn loads_2048_entries() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_wordlist(&dir, "list.txt", &synthetic_words(2048));
    let list = WordList::load(&path).unwrap();
    assert_eq!(list.len(), 2048);
}

#[test]
fn rejects_2047_entries() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_wordlist(&dir, "short.txt", &synthetic_words(2047));
    assert_eq!(
        WordList::load(&path).unwrap_err(),
        WordlistError::WrongCount { expected: 2048, got: 2047 }
    );
}

#[test]
fn rejects_2049_entries() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_wordlist(&dir, "long.txt", &synthetic_words(2049));
    assert_eq!(
        WordList::load(&path).unwrap_err(),
        WordlistError::WrongCount { expected: 2048, got: 2049 }
    );
}

#[test]
fn rejects_duplicate_entries() {
    let dir = tempfile::tempdir().unwrap();
    let mut words = synthetic_words(2048);
    words[2047] = "w0000".into();
    let path = write_wordlist(&dir, "dup.txt", &words);
    assert!(matches!(
        WordList::load(&path).unwrap_err(),
        WordlistError::DuplicateWord { first: 1, second: 2048, .. }
    ));
}

#[test]
fn missing_file_converts_to_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let err: MnemonicError = WordList::load(dir.path().join("nope.txt"))
        .unwrap_err()
        .into();
    assert!(matches!(err, MnemonicError::WordlistLoad(WordlistError::Io { .. })));
}

#[test]
fn english_file_round_trip_matches_builtin() {
    let dir = tempfile::tempdir().unwrap();
    let english: Vec<String> = WordList::english().iter().map(|(_, w)| w.to_string()).collect();
    let path = write_wordlist(&dir, "english.txt", &english);
    let loaded = MnemonicGenerator::new(Arc::new(WordList::load(&path).unwrap()));
    let builtin = MnemonicGenerator::english();
    let e = Entropy::from_bytes([0x3C; 16]);
    assert_eq!(loaded.from_entropy(&e), builtin.from_entropy(&e));
}

#[test]
fn custom_list_maps_indices_directly() {
    let generator = MnemonicGenerator::new(Arc::new(synthetic_list()));
    let m = generator.from_entropy(&Entropy::from_bytes([0xFF; 16]));
    assert!(m.words()[..11].iter().all(|w| w == "w2047"));
    assert_eq!(m.words()[11], "w2037");
}
