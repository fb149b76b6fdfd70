//! Sentences and their source positions
//!
//! A [`Sentence`] is the smallest unit validators look at. Besides its text it
//! carries an offset map that ties every character of the content back to a
//! line and column of the original input, so diagnostics can point at the
//! source even after inline markup has been rewritten.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Source position of a single character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LineOffset {
    /// Line number (1-indexed)
    pub line_number: usize,
    /// Character column within the line (0-indexed)
    pub offset: usize,
}

impl LineOffset {
    /// Create a new position
    pub fn new(line_number: usize, offset: usize) -> Self {
        Self {
            line_number,
            offset,
        }
    }
}

/// A sentence extracted from the source document
///
/// The content is kept verbatim: leading whitespace that separated it from the
/// previous sentence stays part of it. The offset map always has exactly one
/// entry per character of the content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SentenceData")]
pub struct Sentence {
    content: String,
    line_number: usize,
    offset_map: Vec<LineOffset>,
    is_first_sentence: bool,
    links: Vec<String>,
}

impl Sentence {
    /// Create a sentence that starts at column 0 of `line_number`
    ///
    /// Offsets are synthesized as consecutive columns on that line. Use
    /// [`Sentence::with_offset_map`] when real source positions are known.
    pub fn new(content: impl Into<String>, line_number: usize) -> Self {
        let content = content.into();
        let offset_map = (0..content.chars().count())
            .map(|column| LineOffset::new(line_number, column))
            .collect();
        Self {
            content,
            line_number,
            offset_map,
            is_first_sentence: false,
            links: Vec::new(),
        }
    }

    /// Create a sentence from content and its per-character source positions
    ///
    /// The line number is taken from the first position, or `fallback_line`
    /// when the content is empty.
    ///
    /// # Panics
    ///
    /// Panics if `offset_map` does not have one entry per character of
    /// `content`.
    pub fn with_offset_map(
        content: impl Into<String>,
        offset_map: Vec<LineOffset>,
        fallback_line: usize,
    ) -> Self {
        let content = content.into();
        assert_eq!(
            content.chars().count(),
            offset_map.len(),
            "offset map must cover every character of the sentence"
        );
        let line_number = offset_map
            .first()
            .map(|o| o.line_number)
            .unwrap_or(fallback_line);
        Self {
            content,
            line_number,
            offset_map,
            is_first_sentence: false,
            links: Vec::new(),
        }
    }

    /// Sentence text
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Line where the sentence starts (1-indexed)
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Per-character source positions
    pub fn offset_map(&self) -> &[LineOffset] {
        &self.offset_map
    }

    /// Source position of the character at `index`
    pub fn offset(&self, index: usize) -> Option<LineOffset> {
        self.offset_map.get(index).copied()
    }

    /// Whether this is the first sentence of its paragraph, list element or header
    pub fn is_first_sentence(&self) -> bool {
        self.is_first_sentence
    }

    /// Mark or unmark this sentence as the first of its block
    pub fn set_first_sentence(&mut self, first: bool) {
        self.is_first_sentence = first;
    }

    /// Link targets found in this sentence, in order of appearance
    pub fn links(&self) -> &[String] {
        &self.links
    }

    /// Record a link target
    pub fn add_link(&mut self, url: impl Into<String>) {
        self.links.push(url.into());
    }

    /// Replace the content and offset map together
    ///
    /// Used by inline rewriting (link substitution, markup stripping) so that
    /// the surviving characters keep their original source positions.
    ///
    /// # Panics
    ///
    /// Panics if the lengths of `content` and `offset_map` disagree.
    pub fn replace_content(&mut self, content: String, offset_map: Vec<LineOffset>) {
        assert_eq!(
            content.chars().count(),
            offset_map.len(),
            "offset map must cover every character of the sentence"
        );
        self.content = content;
        self.offset_map = offset_map;
    }

    /// Number of characters in the content
    pub fn len(&self) -> usize {
        self.offset_map.len()
    }

    /// Check if the content is empty
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Serialized form of a [`Sentence`], checked before it becomes one
#[derive(Deserialize)]
struct SentenceData {
    content: String,
    line_number: usize,
    offset_map: Vec<LineOffset>,
    #[serde(default)]
    is_first_sentence: bool,
    #[serde(default)]
    links: Vec<String>,
}

impl TryFrom<SentenceData> for Sentence {
    type Error = ModelError;

    fn try_from(data: SentenceData) -> Result<Self, Self::Error> {
        let chars = data.content.chars().count();
        if chars != data.offset_map.len() {
            return Err(ModelError::OffsetMapLength {
                chars,
                offsets: data.offset_map.len(),
            });
        }
        Ok(Self {
            content: data.content,
            line_number: data.line_number,
            offset_map: data.offset_map,
            is_first_sentence: data.is_first_sentence,
            links: data.links,
        })
    }
}
