//! Position-tracked carry-over buffer
//!
//! Parsers feed physical lines into a [`TextBuffer`] and cut sentences off its
//! front. Every character remembers the line and column it came from, so a
//! sentence wrapped over several lines keeps an exact offset map.

use quill_model::{LineOffset, Sentence};

/// Text plus the source position of each of its characters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    offsets: Vec<LineOffset>,
}

impl TextBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a buffer from a block of text starting at `first_line`
    ///
    /// Newlines are kept as characters; the character after a newline is
    /// placed at column 0 of the next line.
    pub fn from_text(text: &str, first_line: usize) -> Self {
        let mut offsets = Vec::with_capacity(text.len());
        let mut line = first_line;
        let mut column = 0;
        for c in text.chars() {
            offsets.push(LineOffset::new(line, column));
            if c == '\n' {
                line += 1;
                column = 0;
            } else {
                column += 1;
            }
        }
        Self {
            text: text.to_string(),
            offsets,
        }
    }

    /// Append a physical line verbatim, starting at column 0
    pub fn push_line(&mut self, line: &str, line_number: usize) {
        self.push_line_at(line, line_number, 0);
    }

    /// Append a fragment of a physical line whose first character sits at
    /// `first_column`
    pub fn push_line_at(&mut self, fragment: &str, line_number: usize, first_column: usize) {
        self.text.push_str(fragment);
        self.offsets.extend(
            (first_column..first_column + fragment.chars().count())
                .map(|column| LineOffset::new(line_number, column)),
        );
    }

    /// Buffered text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Source positions of the buffered characters
    pub fn offsets(&self) -> &[LineOffset] {
        &self.offsets
    }

    /// Number of buffered characters
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Cut the buffer up to and including the character starting at byte
    /// `last_char` and return it as a sentence
    ///
    /// `fallback_line` is used only when the cut is empty.
    pub(crate) fn split_sentence(&mut self, last_char: usize, fallback_line: usize) -> Sentence {
        let cut = self.text[last_char..]
            .chars()
            .next()
            .map(|c| last_char + c.len_utf8())
            .unwrap_or(self.text.len());
        let count = self.text[..cut].chars().count();

        let content: String = self.text.drain(..cut).collect();
        let offsets: Vec<LineOffset> = self.offsets.drain(..count).collect();
        Sentence::with_offset_map(content, offsets, fallback_line)
    }

    /// Take the whole buffer as one sentence, leaving the buffer empty
    pub fn take_sentence(&mut self, fallback_line: usize) -> Sentence {
        let content = std::mem::take(&mut self.text);
        let offsets = std::mem::take(&mut self.offsets);
        Sentence::with_offset_map(content, offsets, fallback_line)
    }

    /// Drop the buffered text and return it
    pub fn take_text(&mut self) -> String {
        self.offsets.clear();
        std::mem::take(&mut self.text)
    }
}
