//! Document root and collections
//!
//! A [`Document`] owns every section of one input file in a flat list, in the
//! order the headings appeared. The tree is expressed through section handles;
//! the first section is always the level-0 root holding whatever precedes the
//! first heading.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::section::{Section, SectionId};
use crate::sentence::Sentence;

/// A parsed document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DocumentData")]
pub struct Document {
    /// Source file name, if the document came from a file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    file_name: Option<String>,
    /// All sections, root first, in source order
    sections: Vec<Section>,
}

impl Document {
    /// Create a document holding only the level-0 root section
    pub fn new() -> Self {
        Self {
            file_name: None,
            sections: vec![Section::new(0, Vec::new())],
        }
    }

    /// Create an empty document with a file name
    pub fn with_file_name(name: impl Into<String>) -> Self {
        let mut doc = Self::new();
        doc.file_name = Some(name.into());
        doc
    }

    /// Source file name
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// Set the source file name
    pub fn set_file_name(&mut self, name: impl Into<String>) {
        self.file_name = Some(name.into());
    }

    /// Handle of the root section
    pub fn root_id(&self) -> SectionId {
        SectionId(0)
    }

    /// The level-0 root section
    pub fn root(&self) -> &Section {
        &self.sections[0]
    }

    /// All sections in source order, including orphans
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Section handles in source order
    pub fn section_ids(&self) -> impl Iterator<Item = SectionId> {
        (0..self.sections.len()).map(SectionId)
    }

    /// Look up a section
    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.get(id.0)
    }

    /// Look up a section mutably
    pub fn section_mut(&mut self, id: SectionId) -> Option<&mut Section> {
        self.sections.get_mut(id.0)
    }

    /// Handle of the most recently added section
    pub fn last_section_id(&self) -> SectionId {
        SectionId(self.sections.len() - 1)
    }

    /// The most recently added section
    pub fn last_section(&self) -> &Section {
        &self.sections[self.sections.len() - 1]
    }

    /// The most recently added section, mutably
    pub fn last_section_mut(&mut self) -> &mut Section {
        let last = self.sections.len() - 1;
        &mut self.sections[last]
    }

    /// Number of sections, root included
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Check if the document has nothing but an empty root
    pub fn is_empty(&self) -> bool {
        self.sections.len() == 1 && self.root().sentences().next().is_none()
    }

    /// Add a section to the flat list without linking it
    pub fn push_section(&mut self, section: Section) -> SectionId {
        self.sections.push(section);
        self.last_section_id()
    }

    /// Link `child` under the nearest section, starting at `current` and
    /// walking up its ancestors, whose level is strictly lower
    ///
    /// Returns the parent the child was attached to, or `None` when no such
    /// ancestor exists. A failed link leaves the child in the flat section
    /// list but outside the tree.
    pub fn attach(&mut self, current: SectionId, child: SectionId) -> Option<SectionId> {
        let level = self.sections.get(child.0)?.level();
        let mut candidate = Some(current);

        while let Some(id) = candidate {
            // parents always precede their children, which keeps the walk acyclic
            if id.0 >= child.0 {
                return None;
            }
            let section = &self.sections[id.0];
            if section.level() < level {
                self.sections[id.0].append_subsection(child);
                self.sections[child.0].set_parent(id);
                return Some(id);
            }
            candidate = section.parent_id();
        }

        None
    }

    /// Child sections of `id`, in document order
    pub fn subsections(&self, id: SectionId) -> impl Iterator<Item = &Section> {
        self.section(id)
            .map(|s| s.subsection_ids())
            .unwrap_or_default()
            .iter()
            .filter_map(|child| self.section(*child))
    }

    /// Parent section of `id`
    pub fn parent(&self, id: SectionId) -> Option<&Section> {
        self.section(id)?.parent_id().and_then(|p| self.section(p))
    }

    /// Ancestors of `id`, nearest first
    pub fn ancestors(&self, id: SectionId) -> Ancestors<'_> {
        Ancestors {
            document: self,
            next: self.section(id).and_then(|s| s.parent_id()),
        }
    }

    /// Whether `id` is a non-root section that could not be linked into the tree
    pub fn is_orphan(&self, id: SectionId) -> bool {
        id.0 != 0 && self.section(id).is_some_and(|s| s.parent_id().is_none())
    }

    /// Every sentence of the document, section by section
    pub fn sentences(&self) -> impl Iterator<Item = &Sentence> {
        self.sections.iter().flat_map(|s| s.sentences())
    }
}

/// Serialized form of a [`Document`], checked before it becomes one
#[derive(Deserialize)]
struct DocumentData {
    #[serde(default)]
    file_name: Option<String>,
    sections: Vec<Section>,
}

impl TryFrom<DocumentData> for Document {
    type Error = ModelError;

    /// Accepts only section lists the builder could have produced: a level-0
    /// root first, every parent before its child at a lower level, and
    /// parent and subsection handles that agree with each other.
    fn try_from(data: DocumentData) -> Result<Self, Self::Error> {
        let sections = data.sections;
        let root = sections.first().ok_or(ModelError::MissingRoot)?;
        if root.level() != 0 || root.parent_id().is_some() {
            return Err(ModelError::InvalidRoot {
                level: root.level(),
            });
        }

        for (index, section) in sections.iter().enumerate() {
            if let Some(parent) = section.parent_id() {
                let parent_section = sections.get(parent.0).ok_or(ModelError::UnknownSection {
                    section: index,
                    target: parent.0,
                })?;
                if parent.0 >= index {
                    return Err(ModelError::ParentOrder {
                        section: index,
                        parent: parent.0,
                    });
                }
                if parent_section.level() >= section.level() {
                    return Err(ModelError::ParentLevel {
                        section: index,
                        level: section.level(),
                        parent: parent.0,
                        parent_level: parent_section.level(),
                    });
                }
                if !parent_section.subsection_ids().contains(&SectionId(index)) {
                    return Err(ModelError::InconsistentLink {
                        parent: parent.0,
                        child: index,
                    });
                }
            }
        }

        for (index, section) in sections.iter().enumerate() {
            for child in section.subsection_ids() {
                let child_section = sections.get(child.0).ok_or(ModelError::UnknownSection {
                    section: index,
                    target: child.0,
                })?;
                if child_section.parent_id() != Some(SectionId(index)) {
                    return Err(ModelError::InconsistentLink {
                        parent: index,
                        child: child.0,
                    });
                }
            }
        }

        Ok(Self {
            file_name: data.file_name,
            sections,
        })
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}

/// Iterator over the ancestors of a section
pub struct Ancestors<'a> {
    document: &'a Document,
    next: Option<SectionId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Section;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let section = self.document.section(id)?;
        self.next = section.parent_id();
        Some(section)
    }
}

/// The documents of a multi-file run
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocumentCollection {
    documents: Vec<Document>,
}

impl DocumentCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document
    pub fn push(&mut self, document: Document) {
        self.documents.push(document);
    }

    /// Get a document by index
    pub fn get(&self, index: usize) -> Option<&Document> {
        self.documents.get(index)
    }

    /// Documents in order
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Iterate over the documents
    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }

    /// Number of documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if the collection is empty
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl FromIterator<Document> for DocumentCollection {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        Self {
            documents: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for DocumentCollection {
    type Item = Document;
    type IntoIter = std::vec::IntoIter<Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.into_iter()
    }
}

impl<'a> IntoIterator for &'a DocumentCollection {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::DocumentBuilder;

    fn linked_document() -> Document {
        let mut builder = DocumentBuilder::new().file_name("doc.wiki");
        builder.add_sentence(Sentence::new("Intro.", 1));
        builder.add_section(1, header("One"));
        builder.add_section(2, header("Two"));
        builder.add_section(1, header("Three"));
        builder.build()
    }

    #[test]
    fn test_deserialize_round_trip() {
        let doc = linked_document();
        let json = serde_json::to_string(&doc).unwrap();
        assert_eq!(serde_json::from_str::<Document>(&json).unwrap(), doc);
    }

    #[test]
    fn test_deserialize_requires_root() {
        let err = serde_json::from_str::<Document>(r#"{"sections":[]}"#).unwrap_err();
        assert!(err.to_string().contains("no root section"));
    }

    #[test]
    fn test_deserialize_rejects_broken_links() {
        let mut value = serde_json::to_value(linked_document()).unwrap();
        // point "One" at "Two", which comes after it
        value["sections"][1]["parent"] = serde_json::json!(2);
        let err = serde_json::from_value::<Document>(value).unwrap_err();
        assert!(err.to_string().contains("does not come before it"));

        let mut value = serde_json::to_value(linked_document()).unwrap();
        value["sections"][0]["level"] = serde_json::json!(1);
        assert!(serde_json::from_value::<Document>(value).is_err());

        let mut value = serde_json::to_value(linked_document()).unwrap();
        value["sections"][0]["subsections"] = serde_json::json!([1, 3, 9]);
        assert!(serde_json::from_value::<Document>(value).is_err());
    }

    #[test]
    fn test_deserialize_checks_nested_sentences() {
        let mut value = serde_json::to_value(linked_document()).unwrap();
        value["sections"][1]["header"][0]["offset_map"] = serde_json::json!([]);
        assert!(serde_json::from_value::<Document>(value).is_err());
    }

    fn header(text: &str) -> Vec<Sentence> {
        vec![Sentence::new(text, 1)]
    }

    #[test]
    fn test_new_document_has_root() {
        let doc = Document::new();
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.root().level(), 0);
        assert!(doc.root().parent_id().is_none());
        assert!(doc.is_empty());
    }

    #[test]
    fn test_document_with_file_name() {
        let doc = Document::with_file_name("intro.wiki");
        assert_eq!(doc.file_name(), Some("intro.wiki"));
    }

    #[test]
    fn test_attach_deeper_level() {
        let mut doc = Document::new();
        let h1 = doc.push_section(Section::new(1, header("Chapter")));
        assert_eq!(doc.attach(doc.root_id(), h1), Some(doc.root_id()));
        assert_eq!(doc.parent(h1).map(|s| s.level()), Some(0));
        assert_eq!(doc.root().subsection_ids(), [h1]);
    }

    #[test]
    fn test_attach_skips_levels() {
        let mut doc = Document::new();
        let h1 = doc.push_section(Section::new(1, header("Chapter")));
        doc.attach(doc.root_id(), h1);
        let h3 = doc.push_section(Section::new(3, header("Deep")));

        assert_eq!(doc.attach(h1, h3), Some(h1));
        assert_eq!(doc.section(h3).and_then(|s| s.parent_id()), Some(h1));
    }

    #[test]
    fn test_attach_walks_up_to_sibling_parent() {
        let mut doc = Document::new();
        let h1 = doc.push_section(Section::new(1, header("Chapter")));
        doc.attach(doc.root_id(), h1);
        let h2 = doc.push_section(Section::new(2, header("Section")));
        doc.attach(h1, h2);
        let h3 = doc.push_section(Section::new(3, header("Sub")));
        doc.attach(h2, h3);
        let h2b = doc.push_section(Section::new(2, header("Section b")));

        assert_eq!(doc.attach(h3, h2b), Some(h1));
        let levels: Vec<_> = doc.ancestors(h2b).map(|s| s.level()).collect();
        assert_eq!(levels, [1, 0]);
        assert_eq!(doc.subsections(h1).count(), 2);
    }

    #[test]
    fn test_attach_failure_keeps_section_flat() {
        let mut doc = Document::new();
        let other_root = doc.push_section(Section::new(0, header("Second root")));

        assert_eq!(doc.attach(doc.root_id(), other_root), None);
        assert!(doc.is_orphan(other_root));
        assert!(!doc.is_orphan(doc.root_id()));
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.subsections(doc.root_id()).count(), 0);
    }

    #[test]
    fn test_attach_rejects_forward_reference() {
        let mut doc = Document::new();
        let a = doc.push_section(Section::new(1, header("a")));
        let b = doc.push_section(Section::new(2, header("b")));
        assert_eq!(doc.attach(b, a), None);
    }

    #[test]
    fn test_sentences_across_sections() {
        let mut doc = Document::new();
        doc.last_section_mut().append_text("Intro.", 1);
        let h1 = doc.push_section(Section::new(1, header("Title")));
        doc.attach(doc.root_id(), h1);
        doc.last_section_mut().append_text("Body.", 3);

        let texts: Vec<_> = doc.sentences().map(|s| s.content()).collect();
        assert_eq!(texts, ["Intro.", "Title", "Body."]);
    }

    #[test]
    fn test_collection() {
        let collection: DocumentCollection = vec![
            Document::with_file_name("a.txt"),
            Document::with_file_name("b.txt"),
        ]
        .into_iter()
        .collect();

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.get(1).and_then(|d| d.file_name()), Some("b.txt"));
        assert_eq!((&collection).into_iter().count(), 2);
    }

    #[test]
    fn test_document_serializes_section_handles() {
        let mut doc = Document::new();
        let h1 = doc.push_section(Section::new(1, header("Title")));
        doc.attach(doc.root_id(), h1);

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["sections"][0]["subsections"][0], 1);
        assert_eq!(json["sections"][1]["parent"], 0);
    }
}
