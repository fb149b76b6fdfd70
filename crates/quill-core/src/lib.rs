//! quill-core - Sentence segmentation and document parsers
//!
//! Turns wiki markup or plain text into the structural model of
//! [`quill_model`]: a tree of sections holding paragraphs, list blocks and
//! position-tracked sentences.
//!
//! # Example
//!
//! ```
//! use quill_core::parser::{DocumentParser, WikiParser};
//! use quill_core::{SentenceExtractor, SymbolConfig};
//!
//! let extractor = SentenceExtractor::new(&SymbolConfig::default()).unwrap();
//! let text = "h1. Railways\nTokyu is a railway company. It runs in Tokyo.\n- Toyoko Line\n";
//! let doc = WikiParser.parse_str(text, &extractor).unwrap();
//!
//! let section = &doc.sections()[1];
//! assert_eq!(section.header()[0].content(), "Railways");
//! assert_eq!(section.paragraphs()[0].len(), 2);
//! assert_eq!(section.list_blocks()[0].len(), 1);
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod parser;
pub mod sentence;

pub use config::{Language, SymbolConfig};
pub use diagnostics::{Diagnostic, Diagnostics, Severity, Span};
pub use error::{Error, Result};
pub use parser::{DocumentParser, ParserKind, PlainTextParser, WikiParser};
pub use sentence::{EndOfSentenceDetector, SentenceExtractor, TextBuffer};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
