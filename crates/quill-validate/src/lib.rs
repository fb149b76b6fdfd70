//! quill-validate - Read-only document validation
//!
//! Validators inspect a finished [`Document`] and report findings as
//! [`Diagnostic`]s. A document is never modified after parsing, so validators
//! share it freely and a [`DocumentCollection`] is checked in parallel.
//!
//! # Example
//!
//! ```
//! use quill_validate::{ValidationEngine, SectionHierarchyValidator};
//! use quill_model::Document;
//!
//! let mut engine = ValidationEngine::new();
//! engine.add_validator(Box::new(SectionHierarchyValidator));
//!
//! let doc = Document::new();
//! let diagnostics = engine.validate(&doc);
//! assert!(diagnostics.is_empty());
//! ```

pub mod distance;
pub mod hierarchy;
pub mod successive;

use quill_core::diagnostics::Diagnostic;
use quill_model::{Document, DocumentCollection};
use rayon::prelude::*;
use tracing::debug;

pub use distance::{levenshtein, EditCosts};
pub use hierarchy::SectionHierarchyValidator;
pub use successive::SuccessiveSentenceValidator;

/// Trait for document validators
///
/// Each validator has a unique code prefix for its diagnostics.
pub trait Validator: Send + Sync {
    /// The validator's code prefix (e.g., "DOC1" for document structure)
    fn code(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str {
        "unnamed"
    }

    /// Validate the document and return any diagnostics
    fn validate(&self, doc: &Document) -> Vec<Diagnostic>;
}

/// Runs a set of validators against documents
pub struct ValidationEngine {
    validators: Vec<Box<dyn Validator>>,
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationEngine {
    /// Create an engine with no validators
    pub fn new() -> Self {
        Self {
            validators: Vec::new(),
        }
    }

    /// Create an engine with the built-in validators
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_validator(Box::new(SectionHierarchyValidator));
        engine.add_validator(Box::new(SuccessiveSentenceValidator::default()));
        engine
    }

    pub fn add_validator(&mut self, validator: Box<dyn Validator>) {
        self.validators.push(validator);
    }

    pub fn validator_count(&self) -> usize {
        self.validators.len()
    }

    pub fn validator_names(&self) -> Vec<&'static str> {
        self.validators.iter().map(|v| v.name()).collect()
    }

    /// Validate a document using all registered validators
    ///
    /// Diagnostics are grouped by validator, in registration order.
    pub fn validate(&self, doc: &Document) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for validator in &self.validators {
            let found = validator.validate(doc);
            debug!(
                validator = validator.name(),
                file = doc.file_name().unwrap_or("<input>"),
                count = found.len(),
                "validator finished"
            );
            diagnostics.extend(found);
        }

        diagnostics
    }

    /// Validate every document of a collection in parallel
    ///
    /// The result keeps document order.
    pub fn validate_collection(&self, collection: &DocumentCollection) -> Vec<Diagnostic> {
        collection
            .documents()
            .par_iter()
            .map(|doc| self.validate(doc))
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect()
    }

    /// Check if a document has any errors
    pub fn has_errors(&self, doc: &Document) -> bool {
        self.validate(doc).iter().any(|d| d.is_error())
    }

    /// Check if a document has any diagnostics at all
    pub fn has_issues(&self, doc: &Document) -> bool {
        !self.validate(doc).is_empty()
    }
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
