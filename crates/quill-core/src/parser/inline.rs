//! Inline wiki markup
//!
//! Rewrites a sentence in place: `[[label|target]]` links are replaced by
//! their display text and recorded on the sentence, then paired style tags
//! (`//italic//`, `**bold**`, `__underline__`, `--strike--`) are stripped.
//! Characters that survive keep their original source positions.

use std::ops::Range;
use std::sync::OnceLock;

use quill_model::{LineOffset, Sentence};
use regex::Regex;
use tracing::warn;

fn link_re() -> &'static Regex {
    static LINK_RE: OnceLock<Regex> = OnceLock::new();
    LINK_RE.get_or_init(|| Regex::new(r"\[\[(.*?)\]\]").unwrap())
}

fn style_res() -> &'static [Regex; 4] {
    static STYLE_RES: OnceLock<[Regex; 4]> = OnceLock::new();
    STYLE_RES.get_or_init(|| {
        // applied in this order
        [
            Regex::new(r"//(.+?)//").unwrap(),
            Regex::new(r"\*\*(.+?)\*\*").unwrap(),
            Regex::new(r"__(.+?)__").unwrap(),
            Regex::new(r"--(.+?)--").unwrap(),
        ]
    })
}

/// Extract links, then strip style tags
pub fn process_inline(sentence: &mut Sentence) {
    extract_links(sentence);
    strip_styles(sentence);
}

/// Replace every link span by its display text and record its target
pub fn extract_links(sentence: &mut Sentence) {
    let source = sentence.content().to_string();
    if !link_re().is_match(&source) {
        return;
    }

    let mut rewriter = Rewriter::new(&source, sentence.offset_map());
    let mut links = Vec::new();
    let mut last = 0;

    for caps in link_re().captures_iter(&source) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        rewriter.keep(last..whole.start());

        let segments = split_segments(inner.as_str(), inner.start());
        match segments.as_slice() {
            [] => {
                warn!(line = sentence.line_number(), "empty link block");
                links.push(String::new());
            }
            [target] => {
                if target.is_empty() {
                    warn!(line = sentence.line_number(), "empty link block");
                }
                rewriter.keep(target.clone());
                links.push(source[target.clone()].to_string());
            }
            [label, target, rest @ ..] => {
                if !rest.is_empty() {
                    warn!(
                        line = sentence.line_number(),
                        segments = segments.len(),
                        "link block has more than two segments; extra segments are ignored"
                    );
                }
                rewriter.keep(label.clone());
                links.push(source[target.clone()].to_string());
            }
        }
        last = whole.end();
    }
    rewriter.keep(last..source.len());

    let (content, offsets) = rewriter.finish();
    sentence.replace_content(content, offsets);
    for link in links {
        sentence.add_link(link);
    }
}

/// Remove paired style markers, keeping the marked text
pub fn strip_styles(sentence: &mut Sentence) {
    for re in style_res() {
        let source = sentence.content().to_string();
        if !re.is_match(&source) {
            continue;
        }
        let mut rewriter = Rewriter::new(&source, sentence.offset_map());
        let mut last = 0;
        for caps in re.captures_iter(&source) {
            let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            rewriter.keep(last..whole.start());
            rewriter.keep(inner.range());
            last = whole.end();
        }
        rewriter.keep(last..source.len());

        let (content, offsets) = rewriter.finish();
        sentence.replace_content(content, offsets);
    }
}

/// Trimmed byte ranges of the `|`-separated segments of a link body
///
/// Trailing empty segments are dropped, so `[[|]]` has no segments at all.
fn split_segments(body: &str, base: usize) -> Vec<Range<usize>> {
    let mut segments = Vec::new();
    let mut start = 0;
    for part in body.split('|') {
        let lead = part.len() - part.trim_start().len();
        let from = base + start + lead;
        segments.push(from..from + part.trim().len());
        start += part.len() + 1;
    }
    while segments.last().is_some_and(|r| r.is_empty()) && segments.len() > 1 {
        segments.pop();
    }
    if body.contains('|') && segments.iter().all(|r| r.is_empty()) {
        segments.clear();
    }
    segments
}

/// Copies selected byte ranges of a sentence along with their offsets
struct Rewriter<'a> {
    source: &'a str,
    offsets: &'a [LineOffset],
    content: String,
    kept: Vec<LineOffset>,
}

impl<'a> Rewriter<'a> {
    fn new(source: &'a str, offsets: &'a [LineOffset]) -> Self {
        Self {
            source,
            offsets,
            content: String::with_capacity(source.len()),
            kept: Vec::with_capacity(offsets.len()),
        }
    }

    fn keep(&mut self, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        let first = self.source[..range.start].chars().count();
        let piece = &self.source[range];
        let count = piece.chars().count();
        self.content.push_str(piece);
        self.kept
            .extend_from_slice(&self.offsets[first..first + count]);
    }

    fn finish(self) -> (String, Vec<LineOffset>) {
        (self.content, self.kept)
    }
}
