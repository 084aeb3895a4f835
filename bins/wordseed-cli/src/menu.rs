//! Interactive menu loop over the generator and analysis APIs.

use std::io::{BufRead, Write};

use anyhow::Result;
use wordseed_core::analysis::{self, BitPattern, COMPARE_LIMIT};
use wordseed_core::{EntropyMode, MnemonicGenerator, WordList};

use crate::render;

const MENU: &str = "\
1. Generate random mnemonic
2. Generate from hex entropy (32 hex characters)
3. Generate from binary entropy (128 binary digits)
4. Show detailed generation info
5. Look up a word
6. Bit pattern analysis
7. Quit";

const ANALYSIS_MENU: &str = "\
1. Find words with specific last 4 bits
2. Show all bit pattern distributions
3. Compare multiple bit patterns
4. Interactive bit pattern explorer
5. Quick analysis (0000 pattern)
6. Back";

/// At most this many patterns are read for a comparison.
const MAX_COMPARED: usize = 8;

/// Print `text`, read one line. `None` at end of input.
fn prompt(input: &mut impl BufRead, out: &mut impl Write, text: &str) -> Result<Option<String>> {
    write!(out, "{text}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn banner(out: &mut impl Write, title: &str) -> Result<()> {
    writeln!(out, "\n{}\n{title}\n{}", "=".repeat(60), "=".repeat(60))?;
    Ok(())
}

fn read_mode(input: &mut impl BufRead, out: &mut impl Write) -> Result<Option<(EntropyMode, Option<String>)>> {
    writeln!(out, "1. Random entropy\n2. From hex entropy\n3. From binary entropy")?;
    let Some(choice) = prompt(input, out, "Choose option (1-3): ")? else {
        return Ok(None);
    };
    let mode = match choice.as_str() {
        "1" => return Ok(Some((EntropyMode::Random, None))),
        "2" => EntropyMode::Hex,
        "3" => EntropyMode::Binary,
        _ => {
            writeln!(out, "Invalid choice.")?;
            return Ok(None);
        }
    };
    let value = prompt(input, out, &format!("Enter 128-bit entropy as {mode}: "))?;
    Ok(value.map(|v| (mode, Some(v))))
}

fn show_generated(out: &mut impl Write, generator: &MnemonicGenerator, mode: EntropyMode, value: Option<&str>) -> Result<()> {
    match generator.generate(mode, value) {
        Ok(m) => {
            write!(out, "\nGenerated mnemonic: ")?;
            render::mnemonic(out, &m)
        }
        Err(e) => {
            writeln!(out, "Error: {e}")?;
            Ok(())
        }
    }
}

fn show_pattern(out: &mut impl Write, list: &WordList, pattern: BitPattern) -> Result<()> {
    let matches = analysis::words_with_pattern(list, pattern);
    render::pattern_matches(out, pattern, &matches, None)
}

/// Read up to [`MAX_COMPARED`] patterns, one per line, until an empty line.
/// `None` at end of input.
fn read_patterns(input: &mut impl BufRead, out: &mut impl Write) -> Result<Option<Vec<BitPattern>>> {
    let mut patterns = Vec::new();
    while patterns.len() < MAX_COMPARED {
        let text = format!("Pattern {} (or Enter to finish): ", patterns.len() + 1);
        let Some(line) = prompt(input, out, &text)? else {
            return Ok(None);
        };
        if line.is_empty() {
            break;
        }
        match line.parse::<BitPattern>() {
            Ok(p) => patterns.push(p),
            Err(e) => writeln!(out, "Error: {e}")?,
        }
    }
    Ok(Some(patterns))
}

/// Word-or-pattern loop. Returns `false` at end of input.
fn explorer(input: &mut impl BufRead, out: &mut impl Write, list: &WordList) -> Result<bool> {
    writeln!(out, "Enter a word to see its bit pattern, or a pattern to see words")?;
    writeln!(out, "Type 'quit' to return")?;
    loop {
        let Some(line) = prompt(input, out, "\nEnter word or bit pattern: ")? else {
            return Ok(false);
        };
        if line.eq_ignore_ascii_case("quit") {
            return Ok(true);
        }
        if line.is_empty() {
            continue;
        }
        match analysis::explore(list, &line) {
            Ok(found) => render::exploration(out, &found)?,
            Err(e) => writeln!(out, "Error: {e}")?,
        }
    }
}

/// Bit pattern analysis submenu. Returns `false` at end of input.
fn analysis_menu(generator: &MnemonicGenerator, input: &mut impl BufRead, out: &mut impl Write) -> Result<bool> {
    let list = generator.wordlist();
    loop {
        banner(out, "BIP-39 Bit Pattern Analysis")?;
        writeln!(out, "{ANALYSIS_MENU}")?;
        let Some(choice) = prompt(input, out, "\nEnter your choice (1-6): ")? else {
            return Ok(false);
        };

        match choice.as_str() {
            "1" => {
                let text = "Enter bit pattern (binary, hex digit or decimal 0-15): ";
                let Some(line) = prompt(input, out, text)? else {
                    return Ok(false);
                };
                match line.parse::<BitPattern>() {
                    Ok(p) => show_pattern(out, list, p)?,
                    Err(e) => writeln!(out, "Error: {e}")?,
                }
            }
            "2" => render::distribution(out, &analysis::pattern_distribution(list))?,
            "3" => {
                let Some(patterns) = read_patterns(input, out)? else {
                    return Ok(false);
                };
                if patterns.is_empty() {
                    writeln!(out, "No patterns to compare.")?;
                } else {
                    render::comparison(out, &analysis::compare_patterns(list, &patterns, COMPARE_LIMIT))?;
                }
            }
            "4" => {
                if !explorer(input, out, list)? {
                    return Ok(false);
                }
            }
            "5" => show_pattern(out, list, BitPattern::new(0)?)?,
            "6" => return Ok(true),
            _ => writeln!(out, "Invalid choice. Please try again.")?,
        }
    }
}

pub fn run(generator: &MnemonicGenerator, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    loop {
        banner(out, "BIP-39 Mnemonic Generator")?;
        writeln!(out, "{MENU}")?;
        let Some(choice) = prompt(input, out, "\nEnter your choice (1-7): ")? else {
            break;
        };

        match choice.as_str() {
            "1" => show_generated(out, generator, EntropyMode::Random, None)?,
            "2" | "3" => {
                let mode = if choice == "2" { EntropyMode::Hex } else { EntropyMode::Binary };
                let Some(value) = prompt(input, out, &format!("Enter 128-bit entropy as {mode}: "))? else {
                    break;
                };
                show_generated(out, generator, mode, Some(&value))?;
            }
            "4" => {
                if let Some((mode, value)) = read_mode(input, out)? {
                    match generator.explain(mode, value.as_deref()) {
                        Ok(report) => render::report(out, &report)?,
                        Err(e) => writeln!(out, "Error: {e}")?,
                    }
                }
            }
            "5" => {
                let Some(word) = prompt(input, out, "Word: ")? else {
                    break;
                };
                match generator.wordlist().reverse_lookup(&word) {
                    Ok(index) => render::lookup(out, &word, index)?,
                    Err(e) => writeln!(out, "Error: {e}")?,
                }
            }
            "6" => {
                if !analysis_menu(generator, input, out)? {
                    break;
                }
            }
            "7" => {
                writeln!(out, "Goodbye!")?;
                break;
            }
            _ => writeln!(out, "Invalid choice. Please try again.")?,
        }
    }
    Ok(())
}
