//! Document parsers
//!
//! Every input format implements [`DocumentParser`]: it reads a stream line by
//! line, drives a [`SentenceExtractor`] and assembles a
//! [`quill_model::Document`] through a [`quill_model::DocumentBuilder`].
//!
//! # Example
//!
//! ```
//! use quill_core::parser::{DocumentParser, ParserKind};
//! use quill_core::{SentenceExtractor, SymbolConfig};
//!
//! let extractor = SentenceExtractor::new(&SymbolConfig::default()).unwrap();
//! let parser = ParserKind::Wiki.parser();
//! let doc = parser.parse_str("h1. Intro\nHello there. Bye.", &extractor).unwrap();
//!
//! assert_eq!(doc.sections().len(), 2);
//! assert_eq!(doc.sections()[1].paragraphs()[0].len(), 2);
//! ```

pub mod inline;
pub mod plain;
pub mod wiki;

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;
use std::str::FromStr;

use quill_model::Document;

use crate::error::{Error, Result};
use crate::sentence::SentenceExtractor;

pub use plain::PlainTextParser;
pub use wiki::WikiParser;

/// Builds a document from a line-oriented input stream
pub trait DocumentParser: Send + Sync {
    /// Short parser name
    fn name(&self) -> &'static str;

    /// Parse a whole stream into a document
    ///
    /// Read or decoding failures abort the parse; no partial document is
    /// returned.
    fn parse(&self, reader: &mut dyn BufRead, extractor: &SentenceExtractor) -> Result<Document>;

    /// Parse an in-memory string
    fn parse_str(&self, text: &str, extractor: &SentenceExtractor) -> Result<Document> {
        let mut bytes = text.as_bytes();
        self.parse(&mut bytes, extractor)
    }

    /// Parse a file, recording its file name on the document
    fn parse_file(&self, path: &Path, extractor: &SentenceExtractor) -> Result<Document> {
        let mut reader = BufReader::new(File::open(path)?);
        let mut document = self.parse(&mut reader, extractor)?;
        if let Some(name) = path.file_name() {
            document.set_file_name(name.to_string_lossy());
        }
        Ok(document)
    }
}

/// Available input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParserKind {
    /// Plain text: paragraphs separated by blank lines
    #[default]
    Plain,
    /// Wiki markup: headers, lists, links, comments
    Wiki,
}

impl ParserKind {
    /// All parser kinds
    pub const ALL: [ParserKind; 2] = [ParserKind::Plain, ParserKind::Wiki];

    /// Choose a parser from a file extension (`.txt`, `.text`, `.wiki`)
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "txt" | "text" => Ok(ParserKind::Plain),
            "wiki" => Ok(ParserKind::Wiki),
            _ => Err(Error::UnknownParser(path.display().to_string())),
        }
    }

    /// Create the parser
    pub fn parser(self) -> Box<dyn DocumentParser> {
        match self {
            ParserKind::Plain => Box::new(PlainTextParser),
            ParserKind::Wiki => Box::new(WikiParser),
        }
    }

    /// Parser name
    pub fn as_str(self) -> &'static str {
        match self {
            ParserKind::Plain => "plain",
            ParserKind::Wiki => "wiki",
        }
    }
}

impl fmt::Display for ParserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParserKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "plain" | "text" | "txt" => Ok(ParserKind::Plain),
            "wiki" => Ok(ParserKind::Wiki),
            other => Err(Error::UnknownParser(other.to_string())),
        }
    }
}

/// Feed every line of `reader` to `handle` with its 1-indexed line number
///
/// Line terminators (`\n`, `\r\n`) and a leading byte-order mark are removed.
/// Returns the number of lines read.
pub fn for_each_line<F>(reader: &mut dyn BufRead, mut handle: F) -> Result<usize>
where
    F: FnMut(&str, usize),
{
    let mut line_number = 0;
    for line in reader.lines() {
        line_number += 1;
        let line = line.map_err(|e| match e.kind() {
            ErrorKind::InvalidData => Error::Encoding { line: line_number },
            _ => Error::Io(e),
        })?;
        let line = if line_number == 1 {
            line.strip_prefix('\u{feff}').unwrap_or(&line)
        } else {
            &line
        };
        handle(line, line_number);
    }
    Ok(line_number)
}
