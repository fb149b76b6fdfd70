//! Block-level containers for sentences
//!
//! Paragraphs and list blocks hold the sentences of a section body. The first
//! sentence pushed into a paragraph or list element is flagged as such, which
//! validators use to tell block openings from continuations.

use serde::{Deserialize, Serialize};

use crate::sentence::Sentence;

/// A paragraph: an ordered run of sentences
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Paragraph {
    sentences: Vec<Sentence>,
}

impl Paragraph {
    /// Create an empty paragraph
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sentence
    ///
    /// The sentence is flagged as first sentence iff the paragraph was empty.
    pub fn push(&mut self, mut sentence: Sentence) {
        sentence.set_first_sentence(self.sentences.is_empty());
        self.sentences.push(sentence);
    }

    /// Sentences in order
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Get a sentence by index
    pub fn sentence(&self, index: usize) -> Option<&Sentence> {
        self.sentences.get(index)
    }

    /// Number of sentences
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Check if the paragraph has no sentences
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// A single item of a list block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListElement {
    level: usize,
    sentences: Vec<Sentence>,
}

impl ListElement {
    /// Create a list element
    ///
    /// `level` is the nesting depth (1 for a top-level item); a value of 0 is
    /// raised to 1.
    pub fn new(level: usize, sentences: Vec<Sentence>) -> Self {
        let mut sentences = sentences;
        for (i, sentence) in sentences.iter_mut().enumerate() {
            sentence.set_first_sentence(i == 0);
        }
        Self {
            level: level.max(1),
            sentences,
        }
    }

    /// Nesting depth (1-indexed)
    pub fn level(&self) -> usize {
        self.level
    }

    /// Sentences of the item
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Get a sentence by index
    pub fn sentence(&self, index: usize) -> Option<&Sentence> {
        self.sentences.get(index)
    }
}

/// A run of consecutive list items
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListBlock {
    elements: Vec<ListElement>,
}

impl ListBlock {
    /// Create an empty list block
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item
    pub fn push(&mut self, element: ListElement) {
        self.elements.push(element);
    }

    /// Items in order
    pub fn elements(&self) -> &[ListElement] {
        &self.elements
    }

    /// Get an item by index
    pub fn element(&self, index: usize) -> Option<&ListElement> {
        self.elements.get(index)
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the block has no items
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
