//! Error types for anagram chain operations.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;
use std::io;

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for anagram chain operations.
///
/// Displays as the kind, followed by the context when one is attached:
/// `io error: ... (in words.txt)`.
#[derive(Debug, Error)]
#[error("{kind}{}", context_suffix(.context.as_ref()))]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an empty dictionary error.
    #[must_use]
    pub fn empty_dictionary() -> Self {
        Self::new(ErrorKind::EmptyDictionary)
    }

    /// Creates an invalid root index error.
    #[must_use]
    pub fn invalid_root_index(index: usize, roots: usize) -> Self {
        Self::new(ErrorKind::InvalidRootIndex { index, roots })
    }

    /// Creates an unknown root word error.
    #[must_use]
    pub fn unknown_root(word: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownRoot(word.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }

    /// Returns true if this error refers to a root selection that does not exist.
    ///
    /// Both an out-of-range root position and an unknown root word count.
    #[must_use]
    pub fn is_invalid_root(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::InvalidRootIndex { .. } | ErrorKind::UnknownRoot(_)
        )
    }
}

fn context_suffix(context: Option<&ErrorContext>) -> String {
    match context {
        Some(ErrorContext { source: Some(source) }) => format!(" (in {source})"),
        _ => String::new(),
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::new(ErrorKind::Io(err))
    }
}

/// Categorized error kinds for pattern matching.
///
/// There is no "malformed word" kind: any string is accepted as a word.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The dictionary contained no words.
    #[error("empty dictionary: no words supplied")]
    EmptyDictionary,

    /// A root position outside the root set was requested.
    #[error("invalid root index: {index} (root count {roots})")]
    InvalidRootIndex {
        /// The requested position in the root set.
        index: usize,
        /// Number of roots in the root set.
        roots: usize,
    },

    /// A root was requested by text, but no root word has that text.
    #[error("unknown root word: {0}")]
    UnknownRoot(String),

    /// Reading the dictionary failed.
    #[error("io error: {0}")]
    Io(#[source] io::Error),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file or dictionary name.
    pub source: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source name.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "in {source}"),
            None => Ok(()),
        }
    }
}
