//! CLI configuration from flags, environment variables and defaults.
//!
//! Precedence, highest first: command-line flag, environment variable,
//! default word list file under the platform data directory (only if it
//! exists), built-in English list.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use wordseed_core::WordList;

pub const WORDLIST_ENV: &str = "WORDSEED_WORDLIST";
pub const LOG_LEVEL_ENV: &str = "WORDSEED_LOG_LEVEL";
pub const LOG_FORMAT_ENV: &str = "WORDSEED_LOG_FORMAT";

/// Where the word list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordlistSource {
    Builtin,
    File(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => bail!("Invalid log format '{other}' (must be 'text' or 'json')"),
        }
    }
}

/// Values given on the command line; `None` means not given.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub wordlist: Option<PathBuf>,
    pub log_level: Option<String>,
    pub log_format: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CliConfig {
    pub wordlist: WordlistSource,
    /// Tracing filter string (e.g. "warn", "wordseed_core=debug").
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            wordlist: WordlistSource::Builtin,
            log_level: "warn".to_string(),
            log_format: LogFormat::Text,
        }
    }
}

impl CliConfig {
    /// Resolve against the process environment and the platform data dir.
    pub fn from_env(overrides: Overrides) -> Result<Self> {
        Self::resolve(
            overrides,
            |key| std::env::var(key).ok(),
            default_wordlist_path().filter(|p| p.is_file()),
        )
    }

    /// Resolve with an explicit environment lookup and default list path.
    pub fn resolve(
        overrides: Overrides,
        env: impl Fn(&str) -> Option<String>,
        default_list: Option<PathBuf>,
    ) -> Result<Self> {
        let defaults = Self::default();

        let wordlist = overrides
            .wordlist
            .or_else(|| env(WORDLIST_ENV).map(PathBuf::from))
            .or(default_list)
            .map_or(WordlistSource::Builtin, WordlistSource::File);

        let log_level = overrides
            .log_level
            .or_else(|| env(LOG_LEVEL_ENV))
            .unwrap_or(defaults.log_level);

        let log_format = match overrides.log_format.or_else(|| env(LOG_FORMAT_ENV)) {
            Some(s) => s.parse::<LogFormat>().context("Failed to parse log format")?,
            None => defaults.log_format,
        };

        Ok(Self {
            wordlist,
            log_level,
            log_format,
        })
    }

    /// Build the word list. Any failure here is fatal for the process.
    pub fn load_wordlist(&self) -> Result<WordList> {
        match &self.wordlist {
            WordlistSource::Builtin => Ok(WordList::english()),
            WordlistSource::File(path) => WordList::load(path)
                .with_context(|| format!("Failed to load word list: {}", path.display())),
        }
    }
}

/// `<data dir>/wordseed/wordlist.txt`, if the platform has a data dir.
pub fn default_wordlist_path() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("wordseed").join("wordlist.txt"))
}
