//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use quill_core::{Diagnostics, Language, ParserKind, SentenceExtractor, SymbolConfig};
use quill_model::{Document, DocumentCollection, Section, SectionId};
use quill_validate::ValidationEngine;

/// Input markup of the documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// Wiki markup (h1. headers, - lists, # numbered lists)
    Wiki,
    /// Plain text, paragraphs separated by blank lines
    Plain,
}

impl From<InputFormat> for ParserKind {
    fn from(format: InputFormat) -> Self {
        match format {
            InputFormat::Wiki => ParserKind::Wiki,
            InputFormat::Plain => ParserKind::Plain,
        }
    }
}

/// Language selecting the default symbol table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Lang {
    /// English punctuation and abbreviations
    #[default]
    En,
    /// Japanese full-width punctuation
    Ja,
}

impl From<Lang> for Language {
    fn from(lang: Lang) -> Self {
        match lang {
            Lang::En => Language::English,
            Lang::Ja => Language::Japanese,
        }
    }
}

/// Options shared by every command that reads documents
#[derive(Debug, Clone, Default, Args)]
pub struct InputOptions {
    /// Input format (detected from the file extension when omitted)
    #[arg(short, long, value_enum)]
    pub format: Option<InputFormat>,

    /// Language of the default symbol table
    #[arg(short, long, value_enum, default_value = "en")]
    pub lang: Lang,

    /// TOML file overriding terminals, closing quotes and whitelist
    #[arg(short, long)]
    pub symbols: Option<PathBuf>,
}

#[derive(Parser)]
#[command(name = "quill")]
#[command(author, version, about = "Sentences and sections out of lightweight markup", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the section outline of each document
    Parse {
        /// Input files
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        input: InputOptions,

        /// Dump the full structural model as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the built-in validators
    Check {
        /// Input files
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        input: InputOptions,

        /// Print diagnostics as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Run the CLI application
///
/// Parses arguments and dispatches to the appropriate command. The exit code
/// is non-zero when a file could not be read or a check reported errors.
pub fn run_cli() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let success = match cli.command {
        Commands::Parse { files, input, json } => parse_command(&files, &input, json)?,
        Commands::Check { files, input, json } => check_command(&files, &input, json)?,
    };

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// `RUST_LOG` when set, `info` otherwise
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Documents read by one command, plus the number of files that were skipped
#[derive(Debug, Default)]
pub struct LoadedDocuments {
    pub documents: DocumentCollection,
    pub failures: usize,
}

/// Resolve the symbol table from `--symbols` or `--lang`
fn load_symbols(options: &InputOptions) -> Result<SymbolConfig> {
    match &options.symbols {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read symbol table: {}", path.display()))?;
            SymbolConfig::from_toml_str(&content)
                .with_context(|| format!("Invalid symbol table: {}", path.display()))
        }
        None => Ok(SymbolConfig::for_language(options.lang.into())),
    }
}

fn parser_kind(path: &Path, options: &InputOptions) -> ParserKind {
    if let Some(format) = options.format {
        return format.into();
    }
    ParserKind::from_path(path).unwrap_or_else(|_| {
        debug!(file = %path.display(), "unknown extension, reading as plain text");
        ParserKind::default()
    })
}

/// Parse every file; unreadable ones are reported on stderr and skipped
///
/// Fails only when the symbol configuration itself is unusable.
pub fn load_documents(files: &[PathBuf], options: &InputOptions) -> Result<LoadedDocuments> {
    let symbols = load_symbols(options)?;
    let extractor = SentenceExtractor::new(&symbols).context("Failed to build sentence pattern")?;

    let mut loaded = LoadedDocuments::default();
    for path in files {
        let kind = parser_kind(path, options);
        match kind.parser().parse_file(path, &extractor) {
            Ok(doc) => {
                debug!(
                    file = %path.display(),
                    parser = kind.as_str(),
                    sections = doc.len(),
                    "parsed document"
                );
                loaded.documents.push(doc);
            }
            Err(err) => {
                warn!(file = %path.display(), error = %err, "skipping document");
                eprintln!("error: {}: {}", path.display(), err);
                loaded.failures += 1;
            }
        }
    }

    Ok(loaded)
}

/// Execute the parse command
pub fn parse_command(files: &[PathBuf], options: &InputOptions, json: bool) -> Result<bool> {
    let loaded = load_documents(files, options)?;

    if json {
        let json = serde_json::to_string_pretty(&loaded.documents)
            .context("Failed to serialize documents to JSON")?;
        println!("{}", json);
    } else {
        for doc in &loaded.documents {
            print!("{}", outline(doc));
        }
    }

    Ok(loaded.failures == 0)
}

/// Execute the check command
pub fn check_command(files: &[PathBuf], options: &InputOptions, json: bool) -> Result<bool> {
    let loaded = load_documents(files, options)?;

    let engine = ValidationEngine::with_defaults();
    let mut diagnostics: Diagnostics = engine
        .validate_collection(&loaded.documents)
        .into_iter()
        .collect();
    diagnostics.sort();

    if json {
        let json = serde_json::to_string_pretty(&diagnostics)
            .context("Failed to serialize diagnostics to JSON")?;
        println!("{}", json);
    } else if diagnostics.is_empty() {
        println!(
            "✓ No issues found in {} document(s)",
            loaded.documents.len()
        );
    } else {
        for diag in diagnostics.iter() {
            println!("{}", diag);
            println!();
        }
        println!(
            "Found {} error(s) and {} warning(s)",
            diagnostics.error_count(),
            diagnostics.warning_count()
        );
    }

    Ok(!diagnostics.has_errors() && loaded.failures == 0)
}

/// Indented section tree of a document
///
/// Sections that could not be linked are listed after the tree, each with
/// whatever was linked beneath them, and marked `(unlinked)`.
pub fn outline(doc: &Document) -> String {
    let mut output = String::new();
    output.push_str(doc.file_name().unwrap_or("<input>"));
    output.push('\n');

    let orphans = doc.section_ids().filter(|id| doc.is_orphan(*id));
    for root in std::iter::once(doc.root_id()).chain(orphans) {
        let mut stack: Vec<(SectionId, usize)> = vec![(root, 1)];
        while let Some((id, depth)) = stack.pop() {
            let Some(section) = doc.section(id) else {
                continue;
            };
            output.push_str(&describe(section, depth, id == root && doc.is_orphan(id)));
            for child in section.subsection_ids().iter().rev() {
                stack.push((*child, depth + 1));
            }
        }
    }

    output
}

fn describe(section: &Section, depth: usize, unlinked: bool) -> String {
    let title = if section.level() == 0 && section.header().is_empty() {
        "(root)".to_string()
    } else {
        format!(
            "h{} {}",
            section.level(),
            section.joined_header().content().trim()
        )
    };
    let sentences: usize = section.paragraphs().iter().map(|p| p.len()).sum();
    let items: usize = section.list_blocks().iter().map(|b| b.len()).sum();

    format!(
        "{}{} [{} paragraph(s), {} sentence(s), {} list(s), {} item(s)]{}\n",
        "  ".repeat(depth),
        title,
        section.paragraphs().len(),
        sentences,
        section.list_blocks().len(),
        items,
        if unlinked { " (unlinked)" } else { "" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use quill_model::{DocumentBuilder, Sentence};

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_arguments() {
        let cli = Cli::try_parse_from([
            "quill", "parse", "--format", "plain", "--lang", "ja", "--json", "a.txt", "b.txt",
        ])
        .unwrap();
        match cli.command {
            Commands::Parse { files, input, json } => {
                assert_eq!(files.len(), 2);
                assert_eq!(input.format, Some(InputFormat::Plain));
                assert_eq!(input.lang, Lang::Ja);
                assert!(json);
            }
            Commands::Check { .. } => panic!("expected parse"),
        }
    }

    #[test]
    fn test_log_filter_defaults_to_info() {
        // RUST_LOG is not set by the test harness
        if std::env::var_os("RUST_LOG").is_none() {
            assert_eq!(log_filter().to_string(), "info");
        }
    }

    #[test]
    fn test_files_required() {
        assert!(Cli::try_parse_from(["quill", "check"]).is_err());
    }

    #[test]
    fn test_parser_kind_selection() {
        let options = InputOptions::default();
        assert_eq!(parser_kind(Path::new("a.wiki"), &options), ParserKind::Wiki);
        assert_eq!(parser_kind(Path::new("a.md"), &options), ParserKind::Plain);

        let forced = InputOptions {
            format: Some(InputFormat::Wiki),
            ..InputOptions::default()
        };
        assert_eq!(parser_kind(Path::new("a.txt"), &forced), ParserKind::Wiki);
    }

    #[test]
    fn test_outline() {
        let mut builder = DocumentBuilder::new().file_name("doc.wiki");
        builder.add_sentence(Sentence::new("Intro.", 1));
        builder.add_section(1, vec![Sentence::new("Chapter", 2)]);
        builder.add_section(2, vec![Sentence::new("Part", 3)]);
        builder.add_list_element(1, vec![Sentence::new("item", 4)]);

        assert_eq!(
            outline(&builder.build()),
            "doc.wiki\n\
             \x20 (root) [1 paragraph(s), 1 sentence(s), 0 list(s), 0 item(s)]\n\
             \x20   h1 Chapter [0 paragraph(s), 0 sentence(s), 0 list(s), 0 item(s)]\n\
             \x20     h2 Part [0 paragraph(s), 0 sentence(s), 1 list(s), 1 item(s)]\n"
        );
    }

    #[test]
    fn test_outline_marks_unlinked() {
        let mut builder = DocumentBuilder::new();
        builder.add_section(0, vec![Sentence::new("Stray", 1)]);
        let text = outline(&builder.build());
        assert!(text.starts_with("<input>\n"));
        assert!(text.contains("h0 Stray"));
        assert!(text.trim_end().ends_with("(unlinked)"));
    }
}
