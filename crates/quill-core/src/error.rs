//! Error types for parsing and configuration.

use thiserror::Error;

/// Result type for quill-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or running a parser
#[derive(Debug, Error)]
pub enum Error {
    /// IO error while reading the input stream
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input is not valid UTF-8
    #[error("Invalid UTF-8 in input at line {line}")]
    Encoding {
        /// Line on which decoding failed (1-indexed)
        line: usize,
    },

    /// Invalid symbol configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Malformed TOML configuration
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Terminal marker pattern failed to compile
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Unknown parser name or file extension
    #[error("Unknown parser: {0}")]
    UnknownParser(String),
}
