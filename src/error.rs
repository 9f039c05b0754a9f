//! Library error type.
//!
//! Validation findings are never errors: they are collected as
//! [`ReportItem`](crate::report::ReportItem)s. This type covers what stops an
//! operation: unreadable or malformed files, and contract violations by the
//! caller.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The file to load does not exist.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// A line that is neither blank, a comment nor a `key SEP value` pair.
    #[error("{file}:{line}: syntax error: {message}")]
    Syntax {
        file: String,
        line: usize,
        message: String,
    },

    /// A translation appended programmatically with a key already present.
    #[error("Duplicated key: \"{0}\"")]
    DuplicateKey(String),

    /// `save()` called without a path on a document that was not loaded from disk.
    #[error("No file path given and the document has no source file")]
    NoPath,

    /// Item construction with data that violates the item invariants.
    #[error("Invalid item: {0}")]
    InvalidItem(String),

    /// Integration bug, e.g. a two-file check invoked without a reference.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid regular expression: {0}")]
    Regex(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True for errors raised while parsing file content.
    pub fn is_syntax(&self) -> bool {
        matches!(self, Error::Syntax { .. })
    }
}
