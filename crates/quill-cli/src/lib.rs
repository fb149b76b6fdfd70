//! quill CLI - Command-line interface library
//!
//! - Parse: print the section outline (or the JSON model) of each document
//! - Check: run the built-in validators over a set of documents
//!
//! # Library Usage
//!
//! ```ignore
//! use quill_cli::{parse_command, InputOptions};
//!
//! let options = InputOptions::default();
//! parse_command(&[PathBuf::from("notes.wiki")], &options, false)?;
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # Outline of a wiki document
//! quill parse notes.wiki
//!
//! # Japanese plain text, dumped as JSON
//! quill parse --format plain --lang ja --json memo.txt
//!
//! # Validate several files
//! quill check docs/*.wiki
//! ```

pub mod app;

pub use app::{check_command, load_documents, outline, parse_command, run_cli};
pub use app::{InputFormat, InputOptions, Lang, LoadedDocuments};
