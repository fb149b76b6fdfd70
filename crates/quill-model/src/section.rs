//! Sections of a document
//!
//! Sections live in a per-document arena (see [`crate::Document`]) and refer
//! to each other through [`SectionId`] handles. A section lists its children
//! by id and keeps a non-owning handle to its parent, which is only used for
//! the upward walk when a new heading is linked into the tree.

use serde::{Deserialize, Serialize};

use crate::block::{ListBlock, ListElement, Paragraph};
use crate::sentence::Sentence;

/// Handle to a section inside its owning [`crate::Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(pub(crate) usize);

impl SectionId {
    /// Position of the section in the document's flat section list
    pub fn index(self) -> usize {
        self.0
    }
}

/// A section: header, body blocks and links to its neighbours in the tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    level: usize,
    header: Vec<Sentence>,
    subsections: Vec<SectionId>,
    paragraphs: Vec<Paragraph>,
    lists: Vec<ListBlock>,
    parent: Option<SectionId>,
}

impl Section {
    /// Create a section with the given level and header sentences
    ///
    /// The first header sentence is flagged as first sentence.
    pub fn new(level: usize, header: Vec<Sentence>) -> Self {
        let mut header = header;
        for (i, sentence) in header.iter_mut().enumerate() {
            sentence.set_first_sentence(i == 0);
        }
        Self {
            level,
            header,
            subsections: Vec::new(),
            paragraphs: Vec::new(),
            lists: Vec::new(),
            parent: None,
        }
    }

    /// Section level (0 for the implicit document root)
    pub fn level(&self) -> usize {
        self.level
    }

    /// Header sentences
    pub fn header(&self) -> &[Sentence] {
        &self.header
    }

    /// Header sentences joined with a single space
    ///
    /// The result carries the line number of the first header sentence.
    pub fn joined_header(&self) -> Sentence {
        let line = self.header.first().map(|s| s.line_number()).unwrap_or(0);
        let text = self
            .header
            .iter()
            .map(|s| s.content())
            .collect::<Vec<_>>()
            .join(" ");
        Sentence::new(text, line)
    }

    /// Child section handles, in document order
    pub fn subsection_ids(&self) -> &[SectionId] {
        &self.subsections
    }

    /// Parent section handle (`None` for the root and for orphans)
    pub fn parent_id(&self) -> Option<SectionId> {
        self.parent
    }

    /// Paragraphs in order
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Get a paragraph by index
    pub fn paragraph(&self, index: usize) -> Option<&Paragraph> {
        self.paragraphs.get(index)
    }

    /// List blocks in order
    pub fn list_blocks(&self) -> &[ListBlock] {
        &self.lists
    }

    /// Get a list block by index
    pub fn list_block(&self, index: usize) -> Option<&ListBlock> {
        self.lists.get(index)
    }

    /// Open a new, empty paragraph
    pub fn append_paragraph(&mut self) {
        self.paragraphs.push(Paragraph::new());
    }

    /// Open a new, empty list block
    pub fn append_list_block(&mut self) {
        self.lists.push(ListBlock::new());
    }

    /// Append an item to the last list block, opening one if needed
    pub fn append_list_element(&mut self, level: usize, sentences: Vec<Sentence>) {
        if self.lists.is_empty() {
            self.append_list_block();
        }
        if let Some(block) = self.lists.last_mut() {
            block.push(ListElement::new(level, sentences));
        }
    }

    /// Append a sentence to the last paragraph, opening one if needed
    pub fn append_sentence(&mut self, sentence: Sentence) {
        if self.paragraphs.is_empty() {
            self.append_paragraph();
        }
        if let Some(paragraph) = self.paragraphs.last_mut() {
            paragraph.push(sentence);
        }
    }

    /// Append plain text as a sentence on `line_number`
    pub fn append_text(&mut self, content: impl Into<String>, line_number: usize) {
        self.append_sentence(Sentence::new(content, line_number));
    }

    /// All sentences of this section: header, paragraphs, then list items
    pub fn sentences(&self) -> impl Iterator<Item = &Sentence> {
        self.header
            .iter()
            .chain(self.paragraphs.iter().flat_map(|p| p.sentences()))
            .chain(
                self.lists
                    .iter()
                    .flat_map(|l| l.elements())
                    .flat_map(|e| e.sentences()),
            )
    }

    pub(crate) fn append_subsection(&mut self, child: SectionId) {
        self.subsections.push(child);
    }

    pub(crate) fn set_parent(&mut self, parent: SectionId) {
        self.parent = Some(parent);
    }
}
