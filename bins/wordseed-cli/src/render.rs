//! Text rendering of core results.

use std::io::Write;

use anyhow::Result;
use wordseed_core::analysis::{BitPattern, Exploration, PatternBucket, PatternMatch, WordProfile, WORDS_PER_PATTERN};
use wordseed_core::{GenerationReport, Mnemonic, WordIndex};

const RULE: &str = "============================================================";

pub fn mnemonic(out: &mut impl Write, m: &Mnemonic) -> Result<()> {
    writeln!(out, "{m}")?;
    Ok(())
}

pub fn report(out: &mut impl Write, r: &GenerationReport) -> Result<()> {
    writeln!(out, "Entropy (128 bits):  {}", r.entropy_hex)?;
    writeln!(out, "Entropy (binary):    {}", r.entropy_binary)?;
    writeln!(out, "Checksum (4 bits):   {}", r.checksum_binary)?;
    writeln!(out, "Combined (132 bits): {}", r.combined_hex)?;
    writeln!(out)?;
    writeln!(out, "Mnemonic phrase:")?;
    for w in &r.words {
        writeln!(
            out,
            "{:2}. {:<12} (index: {:4}, bits: {})",
            w.position, w.word, w.index, w.bits
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Complete mnemonic: {}", r.mnemonic)?;
    Ok(())
}

pub fn lookup(out: &mut impl Write, word: &str, index: WordIndex) -> Result<()> {
    writeln!(
        out,
        "{word}: index {index}, bits {}, low 4 bits {:04b}",
        index.to_binary(),
        index.low_bits()
    )?;
    Ok(())
}

fn match_table(out: &mut impl Write, matches: &[PatternMatch]) -> Result<()> {
    writeln!(out, "Index | Binary (11-bit) | Hex | Word")?;
    writeln!(out, "{}", "-".repeat(50))?;
    for m in matches {
        writeln!(
            out,
            "{:5} | {}     | {:03x} | {}",
            m.index,
            m.index.to_binary(),
            m.index.value(),
            m.word
        )?;
    }
    Ok(())
}

pub fn pattern_matches(
    out: &mut impl Write,
    pattern: BitPattern,
    matches: &[PatternMatch],
    limit: Option<usize>,
) -> Result<()> {
    writeln!(
        out,
        "Words with last 4 bits = {} (hex: {}, decimal: {})",
        pattern.to_binary(),
        pattern.to_hex(),
        pattern.value()
    )?;
    writeln!(out, "{RULE}")?;
    writeln!(
        out,
        "Total words found: {} (expected {WORDS_PER_PATTERN})",
        matches.len()
    )?;
    writeln!(out)?;
    let shown = limit.map_or(matches.len(), |n| n.min(matches.len()));
    match_table(out, &matches[..shown])?;
    if shown < matches.len() {
        writeln!(out, "... {} more (use --limit to show more)", matches.len() - shown)?;
    }
    Ok(())
}

pub fn distribution(out: &mut impl Write, buckets: &[PatternBucket]) -> Result<()> {
    writeln!(out, "Pattern | Count | Example Indices | Example Words")?;
    writeln!(out, "{}", "-".repeat(60))?;
    for b in buckets {
        let examples = &b.matches[..b.matches.len().min(3)];
        let indices: Vec<String> = examples.iter().map(|m| m.index.to_string()).collect();
        let words: Vec<&str> = examples.iter().map(|m| m.word.as_str()).collect();
        writeln!(
            out,
            "{}    | {:5} | {:<15} | {}",
            b.pattern.to_binary(),
            b.count,
            indices.join(", "),
            words.join(", ")
        )?;
    }
    let total: usize = buckets.iter().map(|b| b.count).sum();
    writeln!(out)?;
    writeln!(out, "Total words: {total}")?;
    Ok(())
}

pub fn comparison(out: &mut impl Write, buckets: &[PatternBucket]) -> Result<()> {
    writeln!(out, "Binary | Hex | Dec | First words")?;
    writeln!(out, "{}", "-".repeat(60))?;
    for b in buckets {
        let words: Vec<&str> = b.matches.iter().map(|m| m.word.as_str()).collect();
        writeln!(
            out,
            "{}   | {}   | {:3} | {}",
            b.pattern.to_binary(),
            b.pattern.to_hex(),
            b.pattern.value(),
            words.join(", ")
        )?;
    }
    Ok(())
}

pub fn profile(out: &mut impl Write, p: &WordProfile) -> Result<()> {
    writeln!(out, "Word: '{}'", p.word)?;
    writeln!(out, "Index: {}", p.index)?;
    writeln!(out, "Full binary (11-bit): {}", p.bits)?;
    writeln!(
        out,
        "Last 4 bits: {} (decimal: {}, hex: {})",
        p.pattern.to_binary(),
        p.pattern.value(),
        p.pattern.to_hex()
    )?;
    if !p.siblings.is_empty() {
        writeln!(out, "Other words with same last 4 bits: {}", p.siblings.join(", "))?;
    }
    Ok(())
}

pub fn exploration(out: &mut impl Write, e: &Exploration) -> Result<()> {
    match e {
        Exploration::Word(p) => profile(out, p),
        Exploration::Pattern(b) => {
            writeln!(
                out,
                "Bit pattern: {} (decimal: {}, hex: {})",
                b.pattern.to_binary(),
                b.pattern.value(),
                b.pattern.to_hex()
            )?;
            writeln!(out, "First {} matching words:", b.matches.len())?;
            for m in &b.matches {
                writeln!(out, "  {} (index: {})", m.word, m.index)?;
            }
            Ok(())
        }
    }
}
