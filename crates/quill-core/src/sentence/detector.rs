//! End-of-sentence detection
//!
//! Finds the character that closes the first complete sentence of a text.
//! A terminal marker ends a sentence when:
//!
//! - it is Latin punctuation directly followed by a space or newline,
//! - it is the very last thing in the text, or
//! - it is non-Latin (CJK) punctuation, which needs no trailing whitespace.
//!
//! Runs of markers (`...`, `。。。`) are treated as one cluster, and markers
//! that belong to a whitelisted abbreviation such as `Mr.` are never
//! boundaries.

use regex::Regex;

/// Detects sentence boundaries with a terminal-marker pattern and an
/// abbreviation whitelist
#[derive(Debug, Clone)]
pub struct EndOfSentenceDetector {
    pattern: Regex,
    whitelist: Vec<String>,
}

impl EndOfSentenceDetector {
    /// Create a detector without a whitelist
    pub fn new(pattern: Regex) -> Self {
        Self::with_whitelist(pattern, Vec::new())
    }

    /// Create a detector whose whitelisted strings never end a sentence
    pub fn with_whitelist(pattern: Regex, whitelist: Vec<String>) -> Self {
        let whitelist = whitelist.into_iter().filter(|w| !w.is_empty()).collect();
        Self { pattern, whitelist }
    }

    /// The terminal-marker pattern
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// The abbreviation whitelist
    pub fn whitelist(&self) -> &[String] {
        &self.whitelist
    }

    /// Character index of the character that ends the first complete sentence
    /// at or after character index `start`
    ///
    /// Returns `None` when no boundary is confirmed yet and the caller should
    /// keep buffering.
    ///
    /// # Example
    ///
    /// ```
    /// use quill_core::EndOfSentenceDetector;
    /// use regex::Regex;
    ///
    /// let detector = EndOfSentenceDetector::new(Regex::new(r"\.").unwrap());
    /// assert_eq!(detector.end_position("this is a pen. ", 0), Some(13));
    /// assert_eq!(detector.end_position("this is a pen", 0), None);
    /// ```
    pub fn end_position(&self, text: &str, start: usize) -> Option<usize> {
        let start_byte = char_to_byte(text, start)?;
        let end = self.end_byte(text, start_byte)?;
        Some(text[..end].chars().count())
    }

    /// Byte offset of the first char of the boundary character, scanning from
    /// byte offset `start` (which must be a char boundary)
    pub(crate) fn end_byte(&self, text: &str, start: usize) -> Option<usize> {
        let protected = self.whitelisted_spans(text);
        let mut offset = start;

        loop {
            if offset > text.len() {
                return None;
            }
            let found = self.pattern.find_at(text, offset)?;

            if found.is_empty() {
                offset = next_char_boundary(text, found.end())?;
                continue;
            }
            if overlaps(&protected, found.start(), found.end()) {
                offset = found.end();
                continue;
            }

            let position = last_char_start(text, found.end());
            let next = found.end();

            // marker is the last thing in the text
            let Some(following) = text[next..].chars().next() else {
                return Some(position);
            };

            if is_basic_latin(text, found.start()) && (following == ' ' || following == '\n') {
                return Some(position);
            }

            let ahead = self.pattern.find_at(text, next).map(|m| m.start());
            match ahead {
                // non-Latin text carries on after the marker without another
                // marker right next to it
                Some(p) if p != next && !is_basic_latin(text, p) => return Some(position),
                None if !is_basic_latin(text, position) => return Some(position),
                // run of markers that ends the text
                Some(p) if p == next && next + following.len_utf8() == text.len() => {
                    return Some(next)
                }
                _ => offset = next,
            }
        }
    }

    /// Byte ranges covered by whitelist occurrences
    fn whitelisted_spans(&self, text: &str) -> Vec<(usize, usize)> {
        let mut spans = Vec::new();
        for word in &self.whitelist {
            let mut from = 0;
            while let Some(found) = text[from..].find(word.as_str()) {
                let start = from + found;
                let end = start + word.len();
                spans.push((start, end));
                from = end;
            }
        }
        spans
    }
}

fn overlaps(spans: &[(usize, usize)], start: usize, end: usize) -> bool {
    spans.iter().any(|&(s, e)| s < end && start < e)
}

fn is_basic_latin(text: &str, byte: usize) -> bool {
    text[byte..].chars().next().is_some_and(|c| c.is_ascii())
}

fn last_char_start(text: &str, end: usize) -> usize {
    text[..end]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_char_boundary(text: &str, byte: usize) -> Option<usize> {
    text[byte..].chars().next().map(|c| byte + c.len_utf8())
}

fn char_to_byte(text: &str, index: usize) -> Option<usize> {
    text.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .nth(index)
}
