//! Wiki parser behaviour on complete documents

use quill_core::parser::{DocumentParser, WikiParser};
use quill_core::{Language, SentenceExtractor, SymbolConfig};
use quill_model::{Document, LineOffset};

fn parse(text: &str) -> Document {
    parse_with(text, SymbolConfig::default())
}

fn parse_with(text: &str, config: SymbolConfig) -> Document {
    let extractor = SentenceExtractor::new(&config).unwrap();
    WikiParser.parse_str(text, &extractor).unwrap()
}

fn offsets(line: usize, columns: std::ops::Range<usize>) -> Vec<LineOffset> {
    columns.map(|c| LineOffset::new(line, c)).collect()
}

#[test]
fn test_basic_document() {
    let text = "h1. About Gekioko.\n\
                Gekioko pun pun maru means very very angry.\n\
                \n\
                The word also have posive meaning.\n\
                h2. About Gunma.\n\
                \n\
                Gunma is located at west of Saitama.\n\
                - Features\n\
                -- Main City: Gumma City\n\
                -- Capical: 200 Millon\n\
                - Location\n\
                -- Japan\n\
                \n\
                The word also have posive meaning. Hower it is a bit wired.";

    let doc = parse(text);
    assert_eq!(doc.len(), 3);

    let root = doc.root();
    assert!(root.header().is_empty());
    assert!(root.list_blocks().is_empty());
    assert!(root.paragraphs().is_empty());
    assert_eq!(root.subsection_ids().len(), 1);

    let second = &doc.sections()[1];
    assert_eq!(second.header()[0].content(), "About Gekioko.");
    assert!(second.list_blocks().is_empty());
    assert_eq!(second.paragraphs().len(), 2);
    assert_eq!(second.subsection_ids().len(), 1);
    assert_eq!(second.parent_id(), Some(doc.root_id()));
    assert_eq!(second.paragraphs()[0].len(), 1);
    assert!(second.paragraphs()[0].sentences()[0].is_first_sentence());
    assert_eq!(second.paragraphs()[1].len(), 1);
    assert!(second.paragraphs()[1].sentences()[0].is_first_sentence());

    let last = doc.last_section();
    assert_eq!(last.header()[0].content(), "About Gunma.");
    assert_eq!(last.list_blocks().len(), 1);
    assert_eq!(last.list_blocks()[0].len(), 5);
    assert_eq!(last.paragraphs().len(), 2);
    assert!(last.subsection_ids().is_empty());
    assert_eq!(doc.parent(doc.last_section_id()), Some(second));

    assert_eq!(last.paragraphs()[0].len(), 1);
    assert_eq!(last.paragraphs()[1].len(), 2);
    assert!(last.paragraphs()[1].sentences()[0].is_first_sentence());
    assert!(!last.paragraphs()[1].sentences()[1].is_first_sentence());
}

#[test]
fn test_list() {
    let text = "Threre are several railway companies in Japan as follows.\n\
                - Tokyu\n\
                -- Toyoko Line\n\
                -- Denentoshi Line\n\
                - Keio\n\
                - Odakyu\n";
    let doc = parse(text);
    let block = &doc.root().list_blocks()[0];

    let items: Vec<_> = block
        .elements()
        .iter()
        .map(|e| (e.level(), e.sentences()[0].content()))
        .collect();
    assert_eq!(
        items,
        [
            (1, "Tokyu"),
            (2, "Toyoko Line"),
            (2, "Denentoshi Line"),
            (1, "Keio"),
            (1, "Odakyu"),
        ]
    );
}

#[test]
fn test_numbered_list() {
    let text = "Threre are several railway companies in Japan as follows.\n\
                # Tokyu\n\
                ## Toyoko Line\n\
                ## Denentoshi Line\n\
                # Keio\n";
    let doc = parse(text);
    let block = &doc.root().list_blocks()[0];
    assert_eq!(block.len(), 4);
    assert_eq!(block.elements()[1].level(), 2);
    assert_eq!(block.elements()[1].sentences()[0].content(), "Toyoko Line");
}

#[test]
fn test_list_item_offsets() {
    let doc = parse("-- Toyoko Line\n");
    let sentence = &doc.root().list_blocks()[0].elements()[0].sentences()[0];
    assert_eq!(sentence.offset_map(), offsets(1, 3..14).as_slice());
}

#[test]
fn test_list_after_text_starts_new_block() {
    let doc = parse("- a\n- b\nText between.\n- c\n");
    let blocks = doc.root().list_blocks();
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].len(), 2);
    assert_eq!(blocks[1].len(), 1);
}

#[test]
fn test_multiple_sentences_in_one_line() {
    let doc = parse("Is Tokyu a good railway company? The company is reliable. In addition it is rich!\n");
    let paragraph = &doc.root().paragraphs()[0];
    assert_eq!(paragraph.len(), 3);

    let s = paragraph.sentences();
    assert_eq!(s[0].content(), "Is Tokyu a good railway company?");
    assert_eq!(s[0].offset_map(), offsets(1, 0..32).as_slice());
    assert_eq!(s[1].content(), " The company is reliable.");
    assert_eq!(s[1].offset_map(), offsets(1, 32..57).as_slice());
    assert_eq!(s[2].content(), " In addition it is rich!");
    assert_eq!(s[2].offset_map(), offsets(1, 57..81).as_slice());
}

#[test]
fn test_sentence_across_lines() {
    let doc = parse("OK! Saitama\n is located at the nor\nth. OK!");
    let paragraph = &doc.root().paragraphs()[0];
    let s = paragraph.sentences();
    assert_eq!(s.len(), 3);

    assert_eq!(s[0].content(), "OK!");
    assert_eq!(s[1].content(), " Saitama is located at the north.");
    assert_eq!(s[1].line_number(), 1);

    let mut expected = offsets(1, 3..11);
    expected.extend(offsets(2, 0..22));
    expected.extend(offsets(3, 0..3));
    assert_eq!(s[1].offset_map(), expected.as_slice());

    assert_eq!(s[2].content(), " OK!");
    assert_eq!(s[2].offset_map(), offsets(3, 3..7).as_slice());
}

#[test]
fn test_void_document() {
    let doc = parse("");
    assert_eq!(doc.len(), 1);
    assert!(doc.root().paragraphs().is_empty());
}

#[test]
fn test_period_in_succession() {
    let doc = parse("...");
    let paragraph = &doc.root().paragraphs()[0];
    assert_eq!(paragraph.len(), 1);
    assert_eq!(paragraph.sentences()[0].content(), "...");
}

#[test]
fn test_multiple_sections() {
    let text = "h1. Prefectures in Japan.\n\
                There are 47 prefectures in Japan.\n\
                \n\
                Each prefectures has its features.\n\
                h2. Gunma \n\
                Gumma is very beautiful";
    let doc = parse(text);
    assert_eq!(doc.len(), 3);

    let ids: Vec<_> = doc.section_ids().collect();
    let (root, h1, h2) = (&doc.sections()[0], &doc.sections()[1], &doc.sections()[2]);
    assert_eq!((root.level(), h1.level(), h2.level()), (0, 1, 2));
    assert_eq!(root.subsection_ids(), [ids[1]]);
    assert_eq!(h1.parent_id(), Some(ids[0]));
    assert_eq!(h2.parent_id(), Some(ids[1]));
    assert_eq!(root.parent_id(), None);
    assert!(root.paragraphs().is_empty());

    assert_eq!(h1.header()[0].offset_map(), offsets(1, 4..25).as_slice());
    assert!(h1.header()[0].is_first_sentence());
    assert_eq!(h1.paragraphs().len(), 2);
    assert_eq!(h1.paragraphs()[0].sentences()[0].line_number(), 2);
    assert_eq!(h1.paragraphs()[1].sentences()[0].line_number(), 4);

    assert_eq!(h2.header()[0].content(), "Gunma ");
    assert_eq!(h2.header()[0].offset_map(), offsets(5, 4..10).as_slice());
    assert_eq!(h2.paragraphs().len(), 1);
    assert_eq!(h2.paragraphs()[0].sentences()[0].line_number(), 6);
}

#[test]
fn test_header_with_several_sentences() {
    let doc = parse("h1. About Gunma. About Saitama.\n");
    let header = doc.sections()[1].header();
    assert_eq!(header.len(), 2);
    assert_eq!(header[0].content(), "About Gunma.");
    assert!(header[0].is_first_sentence());
    assert_eq!(header[1].content(), " About Saitama.");
    assert!(!header[1].is_first_sentence());
    assert_eq!(doc.sections()[1].joined_header().content(), "About Gunma.  About Saitama.");
}

#[test]
fn test_document_without_last_period() {
    let doc = parse("h1. Prefectures in Japan.\nThere are 47 prefectures in Japan\n");
    assert_eq!(doc.len(), 2);
    let h1 = &doc.sections()[1];
    assert_eq!(h1.header()[0].line_number(), 1);
    assert_eq!(h1.paragraphs().len(), 1);
    let sentence = &h1.paragraphs()[0].sentences()[0];
    assert_eq!(sentence.content(), "There are 47 prefectures in Japan");
    assert_eq!(sentence.line_number(), 2);
}

#[test]
fn test_skipped_header_level() {
    let doc = parse("h1. One\nh3. Three\nh2. Two\n");
    let ids: Vec<_> = doc.section_ids().collect();
    assert_eq!(doc.sections()[2].parent_id(), Some(ids[1]));
    assert_eq!(doc.sections()[3].parent_id(), Some(ids[1]));
    assert_eq!(doc.subsections(ids[1]).count(), 2);
}

#[test]
fn test_link_in_body() {
    let doc = parse("this is not a [[Google|http://google.com]].\n");
    let sentence = &doc.root().paragraphs()[0].sentences()[0];
    assert_eq!(sentence.content(), "this is not a Google.");
    assert_eq!(sentence.links(), ["http://google.com"]);
}

#[test]
fn test_link_without_label() {
    let doc = parse("this is not a [[http://google.com]].\n");
    let sentence = &doc.root().paragraphs()[0].sentences()[0];
    assert_eq!(sentence.content(), "this is not a http://google.com.");
    assert_eq!(sentence.links(), ["http://google.com"]);
}

#[test]
fn test_void_link() {
    let doc = parse("this is not a [[]] pen.\n");
    let sentence = &doc.root().paragraphs()[0].sentences()[0];
    assert_eq!(sentence.content(), "this is not a  pen.");
    assert_eq!(sentence.links(), [""]);
}

#[test]
fn test_link_in_header_and_list() {
    let doc = parse("h1. See [[Home|/index]]\n- [[Google|http://google.com]] search\n");
    let section = &doc.sections()[1];
    assert_eq!(section.header()[0].content(), "See Home");
    assert_eq!(section.header()[0].links(), ["/index"]);

    let item = &section.list_blocks()[0].elements()[0].sentences()[0];
    assert_eq!(item.content(), "Google search");
    assert_eq!(item.links(), ["http://google.com"]);
}

#[test]
fn test_style_tags_removed() {
    let doc = parse("This is a //good// day. It is **very** __nice__ --bad--.\n");
    let texts: Vec<_> = doc.sentences().map(|s| s.content()).collect();
    assert_eq!(texts, ["This is a good day.", " It is very nice bad."]);
}

#[test]
fn test_comments() {
    let text = "Before.\n\
                [!--\n\
                h1. Not a header\n\
                - not a list\n\
                --]\n\
                After.\n";
    let doc = parse(text);
    assert_eq!(doc.len(), 1);
    assert!(doc.root().list_blocks().is_empty());
    let texts: Vec<_> = doc.sentences().map(|s| s.content()).collect();
    assert_eq!(texts, ["Before.", "After."]);
}

#[test]
fn test_japanese_document() {
    let doc = parse_with(
        "埼玉は東京の北に存在する。大きなベッドタウンであり、多くの人が住んでいる。",
        SymbolConfig::for_language(Language::Japanese),
    );
    assert_eq!(doc.root().paragraphs()[0].len(), 2);
}

#[test]
fn test_crlf_line_endings() {
    let doc = parse("h1. Title\r\nBody text.\r\n");
    assert_eq!(doc.sections()[1].header()[0].content(), "Title");
    assert_eq!(doc.sections()[1].paragraphs()[0].sentences()[0].content(), "Body text.");
}

#[test]
fn test_parse_file_sets_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("guide.wiki");
    std::fs::write(&path, "h1. Guide\nRead me.\n").unwrap();

    let extractor = SentenceExtractor::new(&SymbolConfig::default()).unwrap();
    let doc = WikiParser.parse_file(&path, &extractor).unwrap();
    assert_eq!(doc.file_name(), Some("guide.wiki"));
    assert_eq!(doc.len(), 2);
}

#[test]
fn test_parse_missing_file_fails() {
    let extractor = SentenceExtractor::new(&SymbolConfig::default()).unwrap();
    let result = WikiParser.parse_file(std::path::Path::new("no_such_file.wiki"), &extractor);
    assert!(matches!(result, Err(quill_core::Error::Io(_))));
}
