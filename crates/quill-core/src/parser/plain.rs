//! Plain text parser
//!
//! Everything goes into the root section. Blank lines separate paragraphs;
//! a sentence may wrap over several physical lines.

use std::io::BufRead;

use quill_model::{Document, DocumentBuilder};
use tracing::debug;

use crate::error::Result;
use crate::parser::{for_each_line, DocumentParser};
use crate::sentence::{SentenceExtractor, TextBuffer};

/// Parser for plain text
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextParser;

impl DocumentParser for PlainTextParser {
    fn name(&self) -> &'static str {
        "plain"
    }

    fn parse(&self, reader: &mut dyn BufRead, extractor: &SentenceExtractor) -> Result<Document> {
        let mut builder = DocumentBuilder::new();
        builder.add_paragraph();
        let mut buffer = TextBuffer::new();

        let lines = for_each_line(reader, |line, number| {
            if line.trim().is_empty() {
                flush(&mut buffer, &mut builder, number);
                builder.add_paragraph();
                return;
            }

            buffer.push_line(line, number);
            // a line without a boundary of its own keeps the sentence open
            if !extractor.has_boundary(line) {
                return;
            }
            for sentence in extractor.extract(&mut buffer, number) {
                builder.add_sentence(sentence);
            }
        })?;
        flush(&mut buffer, &mut builder, lines);

        let document = builder.build();
        debug!(
            lines,
            paragraphs = document.root().paragraphs().len(),
            "parsed plain text document"
        );
        Ok(document)
    }
}

fn flush(buffer: &mut TextBuffer, builder: &mut DocumentBuilder, number: usize) {
    if buffer.is_empty() {
        return;
    }
    builder.add_sentence(buffer.take_sentence(number));
}
