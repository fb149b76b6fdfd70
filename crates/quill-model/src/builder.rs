//! Incremental document construction
//!
//! Parsers emit structure line by line; [`DocumentBuilder`] keeps track of the
//! current section and links every new heading into the tree as it arrives.

use tracing::warn;

use crate::block::ListElement;
use crate::document::Document;
use crate::section::{Section, SectionId};
use crate::sentence::Sentence;

/// Builds a [`Document`] one structural element at a time
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    document: Document,
}

impl DocumentBuilder {
    /// Start a new document with an empty root section
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source file name
    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.document.set_file_name(name);
        self
    }

    /// Handle of the section new content goes into
    pub fn current_section(&self) -> SectionId {
        self.document.last_section_id()
    }

    /// The section new content goes into
    pub fn current(&self) -> &Section {
        self.document.last_section()
    }

    /// Start a new section and link it under the nearest shallower ancestor
    /// of the current section
    ///
    /// A section that cannot be linked stays in the document as an orphan.
    pub fn add_section(&mut self, level: usize, header: Vec<Sentence>) -> SectionId {
        let current = self.document.last_section_id();
        let id = self.document.push_section(Section::new(level, header));

        if self.document.attach(current, id).is_none() {
            warn!(
                level,
                section = id.index(),
                "no enclosing section with a lower level; keeping section unlinked"
            );
        }
        id
    }

    /// Open a new paragraph in the current section
    pub fn add_paragraph(&mut self) {
        self.document.last_section_mut().append_paragraph();
    }

    /// Append a sentence to the last paragraph of the current section
    pub fn add_sentence(&mut self, sentence: Sentence) {
        self.document.last_section_mut().append_sentence(sentence);
    }

    /// Open a new list block in the current section
    pub fn add_list_block(&mut self) {
        self.document.last_section_mut().append_list_block();
    }

    /// Append a list item to the last list block of the current section
    pub fn add_list_element(&mut self, level: usize, sentences: Vec<Sentence>) {
        self.document
            .last_section_mut()
            .append_list_element(level, sentences);
    }

    /// Append an already assembled list item
    pub fn add_element(&mut self, element: ListElement) {
        let level = element.level();
        self.add_list_element(level, element.sentences().to_vec());
    }

    /// Finish construction
    pub fn build(self) -> Document {
        self.document
    }
}
