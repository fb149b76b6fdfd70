//! quill-model - Structural document model
//!
//! This crate provides the types parsers produce and validators consume:
//! sentences with source offsets, paragraphs, list blocks, sections and
//! documents.

pub mod block;
pub mod builder;
pub mod document;
pub mod error;
pub mod section;
pub mod sentence;

pub use block::{ListBlock, ListElement, Paragraph};
pub use builder::DocumentBuilder;
pub use document::{Ancestors, Document, DocumentCollection};
pub use error::ModelError;
pub use section::{Section, SectionId};
pub use sentence::{LineOffset, Sentence};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
