//! Errors raised when a model is rebuilt from serialized data

use thiserror::Error;

/// A deserialized model that breaks a structural invariant
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("offset map has {offsets} entries for {chars} characters")]
    OffsetMapLength { chars: usize, offsets: usize },

    #[error("document has no root section")]
    MissingRoot,

    #[error("root section must have level 0 and no parent, found level {level}")]
    InvalidRoot { level: usize },

    #[error("section {section} refers to section {target}, which does not exist")]
    UnknownSection { section: usize, target: usize },

    #[error("section {section} has parent {parent}, which does not come before it")]
    ParentOrder { section: usize, parent: usize },

    #[error("section {section} (level {level}) has parent {parent} at level {parent_level}")]
    ParentLevel {
        section: usize,
        level: usize,
        parent: usize,
        parent_level: usize,
    },

    #[error("sections {parent} and {child} disagree about their parent link")]
    InconsistentLink { parent: usize, child: usize },
}
