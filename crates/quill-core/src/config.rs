//! Symbol configuration
//!
//! Terminal markers, the closing quotes allowed right after them and the
//! abbreviation whitelist. A [`SymbolConfig`] is handed to
//! [`crate::SentenceExtractor::new`] by reference; nothing here is global.
//!
//! # Example
//!
//! ```
//! use quill_core::config::SymbolConfig;
//!
//! let config = SymbolConfig::from_toml_str(r#"
//! terminals = [".", "?"]
//! whitelist = ["e.g."]
//! "#).unwrap();
//!
//! assert_eq!(config.terminals, vec![".", "?"]);
//! assert!(config.closing_quotes.contains(&"\"".to_string()));
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const ENGLISH_WHITELIST: &[&str] = &[
    "Mr.", "Mrs.", "Dr.", "genn.ai", "Co., Ltd.", "Miss.", "a.m.", "U.S.A.", "Jan.", "Feb.",
    "Mar.", "Apr.", "May.", "Jun.", "Jul.", "Aug.", "Sep.", "Oct.", "Nov.", "Dec.", "B.C",
    "A.D.",
];

/// Input language, selecting the default symbol table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Latin punctuation with the English abbreviation whitelist
    #[default]
    English,
    /// Full-width CJK punctuation
    Japanese,
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "ja" | "japanese" => Ok(Language::Japanese),
            other => Err(Error::Config(format!("unsupported language: {}", other))),
        }
    }
}

/// Sentence symbol configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymbolConfig {
    /// Sentence terminal markers
    pub terminals: Vec<String>,
    /// Quotes that may directly follow a terminal marker
    pub closing_quotes: Vec<String>,
    /// Literal strings whose terminal markers never end a sentence
    pub whitelist: Vec<String>,
}

impl Default for SymbolConfig {
    fn default() -> Self {
        Self::for_language(Language::English)
    }
}

impl SymbolConfig {
    /// Symbol table for a language
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::English => Self {
                terminals: strings(&[".", "?", "!"]),
                closing_quotes: strings(&["'", "\""]),
                whitelist: strings(ENGLISH_WHITELIST),
            },
            Language::Japanese => Self {
                terminals: strings(&["。", "？", "！"]),
                closing_quotes: strings(&["’", "”"]),
                whitelist: Vec::new(),
            },
        }
    }

    /// Parse overrides from a TOML string
    ///
    /// Keys that are not present keep their English defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SymbolConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that at least one non-empty terminal is configured
    pub fn validate(&self) -> Result<()> {
        if self.terminals.is_empty() {
            return Err(Error::Config("no terminal markers configured".to_string()));
        }
        if self.terminals.iter().any(|t| t.is_empty()) {
            return Err(Error::Config("empty terminal marker".to_string()));
        }
        if self.closing_quotes.iter().any(|q| q.is_empty()) {
            return Err(Error::Config("empty closing quote".to_string()));
        }
        Ok(())
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
