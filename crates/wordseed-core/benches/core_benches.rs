//! Criterion benchmarks for the encoding pipeline.
//!
//! Covers: hex parsing, SHA-256 checksum, bit packing, full encoding and
//! reverse lookup.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use wordseed_core::bits::pack;
use wordseed_core::{compute_checksum, Entropy, EntropyMode, MnemonicGenerator};

const SAMPLE_HEX: &str = "9e885d952ad362caeb4efe34a8e91bd2";

fn bench_parse_hex(c: &mut Criterion) {
    c.bench_function("entropy_from_hex", |b| {
        b.iter(|| Entropy::from_hex(black_box(SAMPLE_HEX)))
    });
}

fn bench_checksum(c: &mut Criterion) {
    let entropy = Entropy::from_hex(SAMPLE_HEX).unwrap();
    c.bench_function("sha256_checksum", |b| {
        b.iter(|| compute_checksum(black_box(&entropy)))
    });
}

fn bench_pack(c: &mut Criterion) {
    let entropy = Entropy::from_hex(SAMPLE_HEX).unwrap();
    let checksum = compute_checksum(&entropy);
    c.bench_function("pack_12_indices", |b| {
        b.iter(|| pack(black_box(&entropy), black_box(checksum)))
    });
}

fn bench_generate(c: &mut Criterion) {
    let generator = MnemonicGenerator::english();

    c.bench_function("generate_from_hex", |b| {
        b.iter(|| generator.generate(EntropyMode::Hex, Some(black_box(SAMPLE_HEX))))
    });

    c.bench_function("generate_random", |b| {
        b.iter(|| generator.generate(EntropyMode::Random, None))
    });

    let entropy = Entropy::from_hex(SAMPLE_HEX).unwrap();
    c.bench_function("explain_entropy", |b| {
        b.iter(|| generator.explain_entropy(black_box(&entropy)))
    });
}

fn bench_reverse_lookup(c: &mut Criterion) {
    let generator = MnemonicGenerator::english();
    c.bench_function("reverse_lookup", |b| {
        b.iter(|| generator.wordlist().reverse_lookup(black_box("zoo")))
    });
}

criterion_group!(
    benches,
    bench_parse_hex,
    bench_checksum,
    bench_pack,
    bench_generate,
    bench_reverse_lookup
);
criterion_main!(benches);
