//! wordseed: command-line front end for BIP-39 mnemonic generation.
//!
//! Generates 12-word mnemonics from random, hex or binary entropy, shows the
//! bit-level breakdown of an encoding, and explores the word list by the
//! low 4 bits of each index (the bits that carry the checksum).

mod config;
mod menu;
mod render;

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;
use wordseed_core::analysis::{self, BitPattern, COMPARE_LIMIT};
use wordseed_core::{EntropyMode, MnemonicGenerator};

use crate::config::{CliConfig, LogFormat, Overrides, WordlistSource};

/// Encode 128-bit entropy as a 12-word BIP-39 mnemonic.
#[derive(Parser)]
#[command(name = "wordseed")]
#[command(version, about = "Encode 128-bit entropy as a 12-word BIP-39 mnemonic.")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GlobalArgs {
    /// Word list file, one word per line (default: built-in English list).
    #[arg(long, global = true)]
    wordlist: Option<PathBuf>,

    /// Log filter (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Log output format ("text" or "json").
    #[arg(long, global = true)]
    log_format: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a mnemonic.
    Generate(GenerateArgs),
    /// Show the index and bits of a word.
    Lookup {
        /// Word to look up (case-sensitive).
        word: String,
    },
    /// Explore words by the low 4 bits of their index.
    Patterns {
        #[command(subcommand)]
        action: PatternAction,
    },
    /// Interactive menu.
    Menu,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Random,
    Hex,
    Binary,
}

impl From<ModeArg> for EntropyMode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Random => EntropyMode::Random,
            ModeArg::Hex => EntropyMode::Hex,
            ModeArg::Binary => EntropyMode::Binary,
        }
    }
}

#[derive(Args)]
struct GenerateArgs {
    /// Entropy source.
    #[arg(value_enum)]
    mode: ModeArg,

    /// Entropy value for hex or binary mode. If omitted, will prompt securely.
    value: Option<String>,

    /// Show entropy, checksum and per-word bit breakdown.
    #[arg(long)]
    detail: bool,

    /// Print the full breakdown as JSON.
    #[arg(long, conflicts_with = "detail")]
    json: bool,
}

#[derive(Subcommand)]
enum PatternAction {
    /// List words whose index ends in PATTERN (binary, one hex digit, or decimal).
    Show {
        pattern: String,
        /// Maximum rows to print.
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Count words for each of the 16 patterns.
    Distribution,
    /// Compare several patterns side by side.
    Compare {
        #[arg(required = true, num_args = 1..=8)]
        patterns: Vec<String>,
    },
    /// Show a word's pattern and other words sharing it, or the first
    /// words of a bit pattern.
    Explore {
        /// A word (any case) or a bit pattern.
        input: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::from_env(Overrides {
        wordlist: cli.global.wordlist,
        log_level: cli.global.log_level,
        log_format: cli.global.log_format,
    })?;

    init_logging(&config.log_level, config.log_format);

    let wordlist = config.load_wordlist()?;
    match &config.wordlist {
        WordlistSource::Builtin => info!("using built-in English word list"),
        WordlistSource::File(path) => info!(path = %path.display(), "using word list file"),
    }
    let generator = MnemonicGenerator::new(Arc::new(wordlist));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Generate(args) => generate(&generator, args, &mut out),
        Commands::Lookup { word } => lookup(&generator, &word, &mut out),
        Commands::Patterns { action } => patterns(&generator, action, &mut out),
        Commands::Menu => {
            let stdin = std::io::stdin();
            menu::run(&generator, &mut stdin.lock(), &mut out)
        }
    }
}

/// Generate one mnemonic and print it in the requested form.
fn generate(generator: &MnemonicGenerator, args: GenerateArgs, out: &mut impl Write) -> Result<()> {
    let mode = EntropyMode::from(args.mode);
    let value = match (mode, args.value) {
        (EntropyMode::Random, v) => v,
        (_, Some(v)) => Some(v),
        (EntropyMode::Hex, None) => Some(prompt_secret("Enter 128-bit entropy as hex (32 characters)")?),
        (EntropyMode::Binary, None) => Some(prompt_secret("Enter 128-bit entropy as binary (128 digits)")?),
    };

    if args.json {
        let report = generator
            .explain(mode, value.as_deref())
            .context("Failed to generate mnemonic")?;
        serde_json::to_writer_pretty(&mut *out, &report).context("Failed to serialize report")?;
        writeln!(out)?;
    } else if args.detail {
        let report = generator
            .explain(mode, value.as_deref())
            .context("Failed to generate mnemonic")?;
        render::report(out, &report)?;
    } else {
        let mnemonic = generator
            .generate(mode, value.as_deref())
            .context("Failed to generate mnemonic")?;
        render::mnemonic(out, &mnemonic)?;
    }
    Ok(())
}

fn lookup(generator: &MnemonicGenerator, word: &str, out: &mut impl Write) -> Result<()> {
    let index = generator.wordlist().reverse_lookup(word)?;
    render::lookup(out, word, index)
}

fn patterns(generator: &MnemonicGenerator, action: PatternAction, out: &mut impl Write) -> Result<()> {
    let list = generator.wordlist();
    match action {
        PatternAction::Show { pattern, limit } => {
            let pattern = parse_pattern(&pattern)?;
            let matches = analysis::words_with_pattern(list, pattern);
            render::pattern_matches(out, pattern, &matches, Some(limit))
        }
        PatternAction::Distribution => render::distribution(out, &analysis::pattern_distribution(list)),
        PatternAction::Compare { patterns } => {
            let patterns = patterns
                .iter()
                .map(|p| parse_pattern(p))
                .collect::<Result<Vec<_>>>()?;
            render::comparison(out, &analysis::compare_patterns(list, &patterns, COMPARE_LIMIT))
        }
        PatternAction::Explore { input } => {
            let found = analysis::explore(list, &input)
                .with_context(|| format!("'{input}' is neither a listed word nor a bit pattern"))?;
            render::exploration(out, &found)
        }
    }
}

fn parse_pattern(s: &str) -> Result<BitPattern> {
    s.parse::<BitPattern>()
        .with_context(|| format!("Invalid bit pattern '{s}' (expected 0-15)"))
}

/// Read a secret value without echo.
fn prompt_secret(prompt: &str) -> Result<String> {
    rpassword::prompt_password(format!("{}: ", prompt)).context("Failed to read entropy")
}

/// Initialize tracing on stderr so stdout carries only results.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(level_str: &str, format: LogFormat) {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_str));

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
            .init(),
    }
}
