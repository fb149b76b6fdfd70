//! Section hierarchy validator
//!
//! Checks the heading sequence of a document: levels should not skip (going
//! from level 1 straight to level 3), and every section should hang off the
//! document root. A section that could not be linked into the tree during
//! parsing is still in the flat section list, so it is reported here rather
//! than silently ignored by tree traversals.

use quill_core::diagnostics::{Diagnostic, Span};
use quill_model::{Document, Section};

use crate::Validator;

/// Validates section heading hierarchy
///
/// # Diagnostic Codes
///
/// - `DOC101`: section level jump
/// - `DOC102`: section not attached to the tree
///
/// # Example
///
/// ```
/// use quill_model::{DocumentBuilder, Sentence};
/// use quill_validate::{SectionHierarchyValidator, Validator};
///
/// let mut builder = DocumentBuilder::new();
/// builder.add_section(1, vec![Sentence::new("Chapter", 1)]);
/// builder.add_section(2, vec![Sentence::new("Section", 2)]);
///
/// assert!(SectionHierarchyValidator.validate(&builder.build()).is_empty());
/// ```
pub struct SectionHierarchyValidator;

impl Validator for SectionHierarchyValidator {
    fn code(&self) -> &'static str {
        "DOC1"
    }

    fn name(&self) -> &'static str {
        "section-hierarchy"
    }

    fn validate(&self, doc: &Document) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let mut current_level = doc.root().level();

        for id in doc.section_ids().skip(1) {
            let Some(section) = doc.section(id) else {
                continue;
            };
            let level = section.level();

            if level > current_level + 1 {
                let message = if current_level == 0 {
                    format!(
                        "Document starts at heading level {} (expected level 1)",
                        level
                    )
                } else {
                    format!(
                        "Section level jump detected (Level {} -> Level {}). Missing Level {}?",
                        current_level,
                        level,
                        current_level + 1
                    )
                };
                diagnostics.push(
                    locate(Diagnostic::warning(message), doc, section)
                        .with_code("DOC101")
                        .with_help("Heading levels should not skip; add the intermediate heading"),
                );
            }

            if doc.is_orphan(id) {
                diagnostics.push(
                    locate(
                        Diagnostic::warning(format!(
                            "Section \"{}\" (level {}) has no enclosing section",
                            section.joined_header().content(),
                            level
                        )),
                        doc,
                        section,
                    )
                    .with_code("DOC102")
                    .with_note("the section is kept but is not reachable from the document root"),
                );
            }

            current_level = level;
        }

        diagnostics
    }
}

fn locate(diagnostic: Diagnostic, doc: &Document, section: &Section) -> Diagnostic {
    let diagnostic = match header_span(section) {
        Some(span) => diagnostic.with_span(span),
        None => diagnostic,
    };
    match doc.file_name() {
        Some(name) => diagnostic.with_file(name),
        None => diagnostic,
    }
}

/// Span of a section heading, if it has one
fn header_span(section: &Section) -> Option<Span> {
    section.header().first().map(Span::from_sentence)
}
