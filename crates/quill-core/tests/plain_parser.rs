//! Plain text parser behaviour on complete documents

use quill_core::parser::{DocumentParser, ParserKind, PlainTextParser};
use quill_core::{SentenceExtractor, SymbolConfig};
use quill_model::{Document, LineOffset};

fn parse(text: &str) -> Document {
    let extractor = SentenceExtractor::new(&SymbolConfig::default()).unwrap();
    PlainTextParser.parse_str(text, &extractor).unwrap()
}

fn sentence_count(doc: &Document) -> usize {
    doc.root().paragraphs().iter().map(|p| p.len()).sum()
}

#[test]
fn test_generate_document() {
    let text = "This is a pen.\n\
                That is a orange.\n\
                \n\
                However, pen is not oranges.\n\
                We need to be peisient.\n\
                \n\
                Happ life.\n\
                Happy home.\n\
                Tama Home.\n";
    let doc = parse(text);
    assert_eq!(sentence_count(&doc), 7);
    assert_eq!(doc.root().paragraphs().len(), 3);
}

#[test]
fn test_trailing_blank_lines() {
    let text = "This is a pen.\n\
                That is a orange.\n\
                \n\
                However, pen is not oranges.\n\
                We need to be peisient.\n\
                \n\
                \n";
    let doc = parse(text);
    let paragraphs = doc.root().paragraphs();
    assert_eq!(paragraphs.len(), 4);
    assert_eq!(paragraphs[0].len(), 2);
    assert_eq!(paragraphs[1].len(), 2);
    assert_eq!(paragraphs[2].len(), 0);
    assert_eq!(paragraphs[3].len(), 0);
}

#[test]
fn test_multiple_sentences_in_one_line() {
    let text = "Tokyu is a good railway company. The company is reliable. In addition it is rich. \
                I like the company. Howerver someone does not like it.";
    let doc = parse(text);
    let paragraphs = doc.root().paragraphs();
    assert_eq!(paragraphs.len(), 1);

    let texts: Vec<_> = paragraphs[0].sentences().iter().map(|s| s.content()).collect();
    assert_eq!(
        texts,
        [
            "Tokyu is a good railway company.",
            " The company is reliable.",
            " In addition it is rich.",
            " I like the company.",
            " Howerver someone does not like it.",
        ]
    );
    assert!(doc.root().header().is_empty());
}

#[test]
fn test_various_stop_characters() {
    let doc = parse("Is Tokyu a good railway company? Yes it is. In addition it is rich!");
    let texts: Vec<_> = doc.sentences().map(|s| s.content()).collect();
    assert_eq!(
        texts,
        ["Is Tokyu a good railway company?", " Yes it is.", " In addition it is rich!"]
    );
}

#[test]
fn test_no_content() {
    let doc = parse("");
    assert_eq!(doc.root().paragraphs().len(), 1);
    assert_eq!(sentence_count(&doc), 0);
}

#[test]
fn test_first_sentence_flags() {
    let doc = parse("One. Two.\n\nThree. Four.\n");
    for paragraph in doc.root().paragraphs() {
        let flags: Vec<_> = paragraph.sentences().iter().map(|s| s.is_first_sentence()).collect();
        assert_eq!(flags, [true, false]);
    }
}

#[test]
fn test_wrapped_sentence_offsets() {
    let doc = parse("This is\n a pen. Next");
    let texts: Vec<_> = doc.sentences().map(|s| s.content()).collect();
    assert_eq!(texts, ["This is a pen.", " Next"]);

    let first = &doc.root().paragraphs()[0].sentences()[0];
    assert_eq!(first.offset(7), Some(LineOffset::new(2, 0)));
    let last = &doc.root().paragraphs()[0].sentences()[1];
    assert_eq!(last.line_number(), 2);
}

#[test]
fn test_blank_line_flushes_remainder() {
    let doc = parse("no terminal here\n\nNext one.\n");
    let paragraphs = doc.root().paragraphs();
    assert_eq!(paragraphs.len(), 2);
    assert_eq!(paragraphs[0].sentences()[0].content(), "no terminal here");
    assert_eq!(paragraphs[1].sentences()[0].content(), "Next one.");
}

#[test]
fn test_parser_kind_dispatch() {
    let extractor = SentenceExtractor::new(&SymbolConfig::default()).unwrap();
    let doc = ParserKind::Plain
        .parser()
        .parse_str("h1. Still plain.", &extractor)
        .unwrap();
    assert_eq!(doc.len(), 1);
}

#[test]
fn test_invalid_utf8_is_fatal() {
    let extractor = SentenceExtractor::new(&SymbolConfig::default()).unwrap();
    let mut input: &[u8] = b"Fine line.\n\xc3\x28 broken\n";
    let result = PlainTextParser.parse(&mut input, &extractor);
    assert!(matches!(result, Err(quill_core::Error::Encoding { line: 2 })));
}
