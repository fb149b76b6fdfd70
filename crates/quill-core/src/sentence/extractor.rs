//! Sentence extraction
//!
//! Wraps an [`EndOfSentenceDetector`] and repeatedly cuts complete sentences
//! off the front of a [`TextBuffer`]. Whatever is left has no confirmed
//! boundary yet and stays buffered for the next line.

use quill_model::Sentence;
use regex::Regex;
use tracing::debug;

use crate::config::SymbolConfig;
use crate::error::Result;
use crate::sentence::buffer::TextBuffer;
use crate::sentence::detector::EndOfSentenceDetector;

/// Splits buffered text into sentences
#[derive(Debug, Clone)]
pub struct SentenceExtractor {
    detector: EndOfSentenceDetector,
}

impl SentenceExtractor {
    /// Build an extractor from a symbol configuration
    ///
    /// The marker pattern tries every terminal followed by each closing quote
    /// before the bare terminals, so `."` wins over `.`.
    pub fn new(config: &SymbolConfig) -> Result<Self> {
        config.validate()?;
        let pattern = end_of_sentence_pattern(config)?;
        debug!(
            terminals = ?config.terminals,
            pattern = pattern.as_str(),
            "configured end-of-sentence markers"
        );
        Ok(Self::with_pattern(pattern, config.whitelist.clone()))
    }

    /// Build an extractor from an explicit pattern and whitelist
    pub fn with_pattern(pattern: Regex, whitelist: Vec<String>) -> Self {
        Self {
            detector: EndOfSentenceDetector::with_whitelist(pattern, whitelist),
        }
    }

    /// The underlying detector
    pub fn detector(&self) -> &EndOfSentenceDetector {
        &self.detector
    }

    /// Character index of the first sentence end in `text`
    pub fn end_position(&self, text: &str) -> Option<usize> {
        self.detector.end_position(text, 0)
    }

    /// Whether `text` holds at least one confirmed sentence end
    pub fn has_boundary(&self, text: &str) -> bool {
        self.detector.end_byte(text, 0).is_some()
    }

    /// Cut every complete sentence off the front of `buffer`
    ///
    /// The unterminated remainder stays in the buffer.
    pub fn extract(&self, buffer: &mut TextBuffer, fallback_line: usize) -> Vec<Sentence> {
        self.extract_sentences(buffer, fallback_line, false)
    }

    /// Like [`SentenceExtractor::extract`], but never cuts at the very last
    /// character of the buffer
    ///
    /// Used while the next physical line may still continue the sentence.
    pub fn extract_without_last_sentence(
        &self,
        buffer: &mut TextBuffer,
        fallback_line: usize,
    ) -> Vec<Sentence> {
        self.extract_sentences(buffer, fallback_line, true)
    }

    /// Split a string into sentences and an unterminated remainder
    ///
    /// # Example
    ///
    /// ```
    /// use quill_core::{SentenceExtractor, SymbolConfig};
    ///
    /// let extractor = SentenceExtractor::new(&SymbolConfig::default()).unwrap();
    /// let (sentences, remainder) = extractor.extract_str("It rains. It pours");
    ///
    /// assert_eq!(sentences.len(), 1);
    /// assert_eq!(sentences[0].content(), "It rains.");
    /// assert_eq!(remainder, " It pours");
    /// ```
    pub fn extract_str(&self, text: &str) -> (Vec<Sentence>, String) {
        let mut buffer = TextBuffer::from_text(text, 1);
        let sentences = self.extract(&mut buffer, 1);
        (sentences, buffer.take_text())
    }

    fn extract_sentences(
        &self,
        buffer: &mut TextBuffer,
        fallback_line: usize,
        keep_last: bool,
    ) -> Vec<Sentence> {
        let mut sentences = Vec::new();
        while let Some(end) = self.detector.end_byte(buffer.as_str(), 0) {
            if keep_last && is_last_char(buffer.as_str(), end) {
                break;
            }
            sentences.push(buffer.split_sentence(end, fallback_line));
        }
        sentences
    }
}

fn is_last_char(text: &str, byte: usize) -> bool {
    text[byte..].chars().nth(1).is_none()
}

fn end_of_sentence_pattern(config: &SymbolConfig) -> Result<Regex> {
    let mut alternatives = Vec::new();
    for quote in &config.closing_quotes {
        for terminal in &config.terminals {
            alternatives.push(format!("{}{}", regex::escape(terminal), regex::escape(quote)));
        }
    }
    for terminal in &config.terminals {
        alternatives.push(regex::escape(terminal));
    }
    Ok(Regex::new(&alternatives.join("|"))?)
}
