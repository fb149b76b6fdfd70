//! Successive sentence validator
//!
//! Flags a sentence that repeats the one before it, either verbatim (ignoring
//! case and surrounding whitespace) or with only a few characters changed.
//! Sentences are compared in reading order within a section's paragraphs and
//! within each list block.

use quill_core::diagnostics::Diagnostic;
use quill_model::{Document, Sentence};

use crate::distance::{levenshtein, EditCosts};
use crate::Validator;

/// Detects duplicated or nearly duplicated consecutive sentences
///
/// # Diagnostic Codes
///
/// - `SEN101`: sentence is identical or similar to the previous one
#[derive(Debug, Clone)]
pub struct SuccessiveSentenceValidator {
    /// Largest edit distance still reported as similar
    pub max_distance: usize,
    /// Sentences with fewer characters than this are not compared
    pub min_length: usize,
    /// Weights used for the edit distance
    pub costs: EditCosts,
}

impl Default for SuccessiveSentenceValidator {
    fn default() -> Self {
        Self {
            max_distance: 3,
            min_length: 5,
            costs: EditCosts::default(),
        }
    }
}

impl SuccessiveSentenceValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_distance(mut self, max_distance: usize) -> Self {
        self.max_distance = max_distance;
        self
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn with_costs(mut self, costs: EditCosts) -> Self {
        self.costs = costs;
        self
    }

    fn check_run<'a>(
        &self,
        sentences: impl Iterator<Item = &'a Sentence>,
        file: Option<&str>,
        out: &mut Vec<Diagnostic>,
    ) {
        let mut previous: Option<String> = None;

        for sentence in sentences {
            let current = normalize(sentence.content());
            if current.chars().count() < self.min_length {
                previous = None;
                continue;
            }

            if let Some(prev) = &previous {
                if let Some(diagnostic) = self.compare(prev, &current, sentence) {
                    out.push(match file {
                        Some(name) => diagnostic.with_file(name),
                        None => diagnostic,
                    });
                }
            }
            previous = Some(current);
        }
    }

    fn compare(&self, previous: &str, current: &str, sentence: &Sentence) -> Option<Diagnostic> {
        let message = if previous == current {
            format!(
                "Sentence repeats the previous one: \"{}\"",
                sentence.content().trim()
            )
        } else {
            let distance = levenshtein(previous, current, &self.costs);
            if distance > self.max_distance {
                return None;
            }
            format!(
                "Sentence is nearly identical to the previous one (edit distance {})",
                distance
            )
        };

        Some(
            Diagnostic::warning(message)
                .with_code("SEN101")
                .at_sentence(sentence)
                .with_help("Remove the duplicate or merge the two sentences"),
        )
    }
}

impl Validator for SuccessiveSentenceValidator {
    fn code(&self) -> &'static str {
        "SEN1"
    }

    fn name(&self) -> &'static str {
        "successive-sentence"
    }

    fn validate(&self, doc: &Document) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let file = doc.file_name();

        for section in doc.sections() {
            self.check_run(
                section.paragraphs().iter().flat_map(|p| p.sentences()),
                file,
                &mut diagnostics,
            );
            for block in section.list_blocks() {
                self.check_run(
                    block.elements().iter().flat_map(|e| e.sentences()),
                    file,
                    &mut diagnostics,
                );
            }
        }

        diagnostics
    }
}

fn normalize(content: &str) -> String {
    content.trim().to_lowercase()
}
