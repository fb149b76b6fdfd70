//! Diagnostics reported against a parsed document
//!
//! Validators report problems as [`Diagnostic`]s that point back into the
//! source through a sentence's offset map.

use quill_model::{LineOffset, Sentence};
use serde::{Deserialize, Serialize};

/// A problem found in a document
///
/// # Example
///
/// ```
/// use quill_core::diagnostics::{Diagnostic, Span};
/// use quill_model::LineOffset;
///
/// let diag = Diagnostic::warning("Heading level jumps from 1 to 3")
///     .with_code("DOC101")
///     .with_span(Span::from_offset(LineOffset::new(4, 0)))
///     .with_file("guide.wiki");
///
/// assert_eq!(
///     diag.to_string(),
///     "warning[DOC101]: Heading level jumps from 1 to 3\n  --> guide.wiki:4:1"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity level
    pub severity: Severity,

    /// Human-readable message
    pub message: String,

    /// Validator code (e.g. "DOC101", "SEN101")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Source location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,

    /// File the document was read from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Suggested fix
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,

    /// Additional notes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

/// Severity level of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Stylistic suggestion
    Hint,
    /// Informational message
    Info,
    /// Likely problem
    Warning,
    /// Definite problem
    Error,
}

/// Location in the source, as character columns on a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Line number (1-indexed)
    pub line: usize,

    /// Column number (1-indexed)
    pub column: usize,

    /// Length in characters, when the span covers a range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            code: None,
            span: None,
            file: None,
            help: None,
            notes: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Create an info diagnostic
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    /// Create a hint diagnostic
    pub fn hint(message: impl Into<String>) -> Self {
        Self::new(Severity::Hint, message)
    }

    /// Set the validator code
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Set the source span
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Point the diagnostic at the start of a sentence
    pub fn at_sentence(self, sentence: &Sentence) -> Self {
        let span = Span::from_sentence(sentence);
        self.with_span(span)
    }

    /// Set the file name
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Set help text
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Add a note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Check if this is an error
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Check if this is a warning
    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

impl Span {
    /// Span at a 1-indexed line and column
    pub fn new(line: usize, column: usize) -> Self {
        Self {
            line,
            column,
            length: None,
        }
    }

    /// Span at a character's source position
    ///
    /// Offsets use 0-indexed columns; spans are 1-indexed.
    pub fn from_offset(offset: LineOffset) -> Self {
        Self::new(offset.line_number, offset.offset + 1)
    }

    /// Span at the first character of a sentence, covering its length
    ///
    /// An empty sentence maps to column 1 of its line.
    pub fn from_sentence(sentence: &Sentence) -> Self {
        let start = sentence
            .offset(0)
            .map(Self::from_offset)
            .unwrap_or_else(|| Self::new(sentence.line_number(), 1));
        start.with_length(sentence.len())
    }

    /// Set the length
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Hint => write!(f, "hint"),
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // severity[code]: message
        write!(f, "{}", self.severity)?;
        if let Some(ref code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)?;

        match (&self.file, &self.span) {
            (Some(file), Some(span)) => write!(f, "\n  --> {}:{}:{}", file, span.line, span.column)?,
            (Some(file), None) => write!(f, "\n  --> {}", file)?,
            (None, Some(span)) => write!(f, "\n  --> line {}:{}", span.line, span.column)?,
            (None, None) => {}
        }

        if let Some(ref help) = self.help {
            write!(f, "\n  = help: {}", help)?;
        }
        for note in &self.notes {
            write!(f, "\n  = note: {}", note)?;
        }

        Ok(())
    }
}

/// A collection of diagnostics
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Diagnostics {
    diagnostics: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.is_error())
    }

    /// Number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    /// Number of warnings
    pub fn warning_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_warning()).count()
    }

    /// Iterate over the diagnostics
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Sort by file, then line, then column
    pub fn sort(&mut self) {
        self.diagnostics.sort_by(|a, b| {
            let key = |d: &Diagnostic| (d.file.clone(), d.span.map(|s| (s.line, s.column)));
            key(a).cmp(&key(b))
        });
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Number of diagnostics
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }
}

impl Extend<Diagnostic> for Diagnostics {
    fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
        self.diagnostics.extend(iter);
    }
}

impl FromIterator<Diagnostic> for Diagnostics {
    fn from_iter<I: IntoIterator<Item = Diagnostic>>(iter: I) -> Self {
        Self {
            diagnostics: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.into_iter()
    }
}
