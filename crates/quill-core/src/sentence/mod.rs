//! Sentence segmentation
//!
//! - [`EndOfSentenceDetector`] finds where the first complete sentence ends
//! - [`SentenceExtractor`] cuts buffered text into [`quill_model::Sentence`]s
//! - [`TextBuffer`] carries unterminated text across physical lines

pub mod buffer;
pub mod detector;
pub mod extractor;

pub use buffer::TextBuffer;
pub use detector::EndOfSentenceDetector;
pub use extractor::SentenceExtractor;
