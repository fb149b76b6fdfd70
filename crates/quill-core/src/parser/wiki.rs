//! Wiki markup parser
//!
//! A line-oriented state machine. Each line is classified, in priority order,
//! as comment continuation, header (`h1. Title`), list item (`- item`,
//! `## item`), comment start (`[!--`), blank line or body text.
//!
//! Body text is appended to a carry-over buffer and cut into sentences as soon
//! as a boundary is confirmed, so sentences may wrap across lines. Headers,
//! list items and blank lines flush whatever is still buffered first.

use std::io::BufRead;
use std::sync::OnceLock;

use quill_model::{Document, DocumentBuilder, Sentence};
use regex::Regex;
use tracing::{debug, trace};

use crate::error::Result;
use crate::parser::inline::process_inline;
use crate::parser::{for_each_line, DocumentParser};
use crate::sentence::{SentenceExtractor, TextBuffer};

const COMMENT_BEGIN: &str = "[!--";
const COMMENT_END: &str = "--]";

/// Parser for wiki markup
#[derive(Debug, Clone, Copy, Default)]
pub struct WikiParser;

impl DocumentParser for WikiParser {
    fn name(&self) -> &'static str {
        "wiki"
    }

    fn parse(&self, reader: &mut dyn BufRead, extractor: &SentenceExtractor) -> Result<Document> {
        let mut state = WikiState::new(extractor);
        let lines = for_each_line(reader, |line, number| state.process_line(line, number))?;
        let document = state.finish(lines);
        debug!(
            lines,
            sections = document.len(),
            sentences = document.sentences().count(),
            "parsed wiki document"
        );
        Ok(document)
    }
}

/// Kind of the most recently processed line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LinePattern {
    Void,
    Sentence,
    List,
    Header,
    Comment,
}

fn header_re() -> &'static Regex {
    static HEADER_RE: OnceLock<Regex> = OnceLock::new();
    HEADER_RE.get_or_init(|| Regex::new(r"^h([1-6])\. (.*)$").unwrap())
}

fn list_re() -> &'static Regex {
    static LIST_RE: OnceLock<Regex> = OnceLock::new();
    LIST_RE.get_or_init(|| Regex::new(r"^(-+) (.*)$").unwrap())
}

fn numbered_list_re() -> &'static Regex {
    static NUMBERED_LIST_RE: OnceLock<Regex> = OnceLock::new();
    NUMBERED_LIST_RE.get_or_init(|| Regex::new(r"^(#+) (.*)$").unwrap())
}

struct WikiState<'a> {
    extractor: &'a SentenceExtractor,
    builder: DocumentBuilder,
    buffer: TextBuffer,
    pattern: LinePattern,
}

impl<'a> WikiState<'a> {
    fn new(extractor: &'a SentenceExtractor) -> Self {
        Self {
            extractor,
            builder: DocumentBuilder::new(),
            buffer: TextBuffer::new(),
            pattern: LinePattern::Void,
        }
    }

    fn process_line(&mut self, line: &str, number: usize) {
        if self.pattern == LinePattern::Comment {
            if line.trim().ends_with(COMMENT_END) {
                trace!(line = number, "comment closed");
                self.pattern = LinePattern::Void;
            }
            return;
        }

        if let Some(caps) = header_re().captures(line) {
            let (Some(marker), Some(body)) = (caps.get(1), caps.get(2)) else {
                return;
            };
            let level = usize::from(marker.as_str().as_bytes()[0] - b'0');
            trace!(line = number, level, "header");
            self.flush(number);
            let header = self.block_sentences(line, body.start(), number);
            self.builder.add_section(level, header);
            self.pattern = LinePattern::Header;
            return;
        }

        if let Some(caps) = list_re()
            .captures(line)
            .or_else(|| numbered_list_re().captures(line))
        {
            let (Some(marker), Some(body)) = (caps.get(1), caps.get(2)) else {
                return;
            };
            let level = marker.as_str().len();
            trace!(line = number, level, "list item");
            self.flush(number);
            if self.pattern != LinePattern::List {
                self.builder.add_list_block();
            }
            let sentences = self.block_sentences(line, body.start(), number);
            self.builder.add_list_element(level, sentences);
            self.pattern = LinePattern::List;
            return;
        }

        let trimmed = line.trim();
        if trimmed.starts_with(COMMENT_BEGIN) {
            // a comment closed on the same line leaves the state untouched
            if !trimmed[COMMENT_BEGIN.len()..].ends_with(COMMENT_END) {
                trace!(line = number, "comment opened");
                self.pattern = LinePattern::Comment;
            }
            return;
        }

        if trimmed.is_empty() {
            self.flush(number);
            self.builder.add_paragraph();
            self.pattern = LinePattern::Void;
            return;
        }

        self.buffer.push_line(line, number);
        for mut sentence in self.extractor.extract(&mut self.buffer, number) {
            process_inline(&mut sentence);
            self.builder.add_sentence(sentence);
        }
        self.pattern = LinePattern::Sentence;
    }

    /// Sentences of a header or list item body starting at byte `start`
    ///
    /// Text after the last boundary becomes a final sentence of its own.
    fn block_sentences(&self, line: &str, start: usize, number: usize) -> Vec<Sentence> {
        let column = line[..start].chars().count();
        let mut buffer = TextBuffer::new();
        buffer.push_line_at(&line[start..], number, column);

        let mut sentences = self.extractor.extract(&mut buffer, number);
        if !buffer.is_empty() {
            sentences.push(buffer.take_sentence(number));
        }
        for sentence in &mut sentences {
            process_inline(sentence);
        }
        sentences
    }

    /// Emit the buffered remainder as a sentence of the current section
    fn flush(&mut self, number: usize) {
        if self.buffer.is_empty() {
            return;
        }
        let mut sentence = self.buffer.take_sentence(number);
        process_inline(&mut sentence);
        self.builder.add_sentence(sentence);
    }

    fn finish(mut self, last_line: usize) -> Document {
        self.flush(last_line);
        self.builder.build()
    }
}
