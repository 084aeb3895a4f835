//! Property-based tests for the encoding pipeline.
//!
//! Each property runs 256 cases with proptest shrinking.

use proptest::prelude::*;
use wordseed_core::bits::pack;
use wordseed_core::{compute_checksum, Entropy, EntropyMode, MnemonicGenerator};

fn entropy_bytes() -> impl Strategy<Value = [u8; 16]> {
    any::<[u8; 16]>()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn checksum_in_range_and_deterministic(bytes in entropy_bytes()) {
        let e = Entropy::from_bytes(bytes);
        let a = compute_checksum(&e);
        let b = compute_checksum(&Entropy::from_bytes(bytes));
        prop_assert!(a.value() <= 15);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn pack_yields_twelve_indices_in_range(bytes in entropy_bytes()) {
        let e = Entropy::from_bytes(bytes);
        let indices = pack(&e, compute_checksum(&e));
        prop_assert_eq!(indices.len(), 12);
        for i in indices {
            prop_assert!(i.value() <= 2047);
        }
    }

    #[test]
    fn mnemonic_words_come_from_list(bytes in entropy_bytes()) {
        let generator = MnemonicGenerator::english();
        let m = generator.from_entropy(&Entropy::from_bytes(bytes));
        prop_assert_eq!(m.len(), 12);
        for w in m.words() {
            prop_assert!(generator.wordlist().contains(w), "word {} not in list", w);
        }
    }

    #[test]
    fn matches_reference_crate(bytes in entropy_bytes()) {
        let generator = MnemonicGenerator::english();
        let ours = generator.from_entropy(&Entropy::from_bytes(bytes));
        let reference = bip39::Mnemonic::from_entropy(&bytes).unwrap();
        prop_assert_eq!(ours.phrase(), reference.to_string());
    }

    #[test]
    fn indices_reassemble_entropy(bytes in entropy_bytes()) {
        let e = Entropy::from_bytes(bytes);
        let cs = compute_checksum(&e);
        let mut hi = 0u128;
        let mut lo = 0u128;
        // Fold 132 bits into (top 4, low 128).
        for i in pack(&e, cs) {
            hi = (hi << 11) | (lo >> 117);
            lo = (lo << 11) | u128::from(i.value());
        }
        prop_assert_eq!(lo & 0xF, u128::from(cs.value()));
        prop_assert_eq!((lo >> 4) | ((hi & 0xF) << 124), e.value());
    }

    #[test]
    fn hex_and_binary_inputs_agree(bytes in entropy_bytes()) {
        let generator = MnemonicGenerator::english();
        let e = Entropy::from_bytes(bytes);
        let from_hex = generator.generate(EntropyMode::Hex, Some(&e.to_hex())).unwrap();
        let upper = format!("0X{}", e.to_hex().to_uppercase());
        let from_upper = generator.generate(EntropyMode::Hex, Some(&upper)).unwrap();
        let from_binary = generator.generate(EntropyMode::Binary, Some(&e.to_binary())).unwrap();
        prop_assert_eq!(&from_hex, &from_upper);
        prop_assert_eq!(&from_hex, &from_binary);
    }

    #[test]
    fn hex_wrong_length_rejected(len in 0usize..64) {
        prop_assume!(len != 32);
        let input = "a".repeat(len);
        prop_assert!(Entropy::from_hex(&input).is_err());
    }

    #[test]
    fn binary_wrong_length_rejected(len in 0usize..256) {
        prop_assume!(len != 128);
        let input = "1".repeat(len);
        prop_assert!(Entropy::from_binary(&input).is_err());
    }

    #[test]
    fn hex_with_foreign_character_rejected(
        bytes in entropy_bytes(),
        position in 0usize..32,
        ch in "[g-zG-Z!@#%]",
    ) {
        let mut input: Vec<char> = Entropy::from_bytes(bytes).to_hex().chars().collect();
        input[position] = ch.chars().next().unwrap();
        let input: String = input.into_iter().collect();
        prop_assert!(Entropy::from_hex(&input).is_err());
    }
}
