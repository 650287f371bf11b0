//! Dictionary file loading.
//!
//! A dictionary is UTF-8 text with one word per line. Words are kept exactly
//! as written; only the line separator is removed (`\n`, or `\r\n`), and a
//! final newline ends the last word rather than starting an empty one.

use std::fs;
use std::path::Path;

use anagram_chain_foundation::{Error, ErrorContext, Result};
use anagram_chain_graph::{GraphConfig, GraphHandle};
use tracing::{debug, instrument};

/// Dictionary file read when no path is given.
pub const DEFAULT_WORDS_FILE: &str = "words.txt";

/// Options controlling which lines of a dictionary file become words.
#[derive(Clone, Debug, Default)]
pub struct LoaderOptions {
    /// Skip lines that are empty or contain only whitespace.
    pub skip_blank_lines: bool,

    /// Skip lines whose first non-whitespace character is this prefix.
    pub comment_prefix: Option<char>,
}

impl LoaderOptions {
    /// Creates options that keep every line.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to enable/disable blank-line skipping.
    #[must_use]
    pub fn with_skip_blank_lines(mut self, skip: bool) -> Self {
        self.skip_blank_lines = skip;
        self
    }

    /// Builder method to set the comment prefix.
    #[must_use]
    pub fn with_comment_prefix(mut self, prefix: Option<char>) -> Self {
        self.comment_prefix = prefix;
        self
    }

    fn keeps(&self, line: &str) -> bool {
        if self.skip_blank_lines && line.trim().is_empty() {
            return false;
        }
        match self.comment_prefix {
            Some(prefix) => !line.trim_start().starts_with(prefix),
            None => true,
        }
    }
}

/// Splits dictionary text into words.
///
/// This differs from a plain `split('\n')` in one place: the empty record
/// after a final newline is dropped, so a file that ends with a newline does
/// not gain an empty word that could derive into one-letter words. Every
/// other line, including empty ones, is a word unless `options` filter it
/// out. A trailing `\r` is removed from each line.
#[must_use]
pub fn parse_words(source: &str, options: &LoaderOptions) -> Vec<String> {
    let mut records: Vec<&str> = source.split('\n').collect();
    if records.last() == Some(&"") {
        records.pop();
    }
    records
        .into_iter()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| options.keeps(line))
        .map(String::from)
        .collect()
}

/// Reads a dictionary file into words.
///
/// # Errors
///
/// Returns an `Io` error, with the path as context, if the file cannot be read.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn read_words(path: impl AsRef<Path>, options: &LoaderOptions) -> Result<Vec<String>> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|e| {
        Error::from(e).with_context(ErrorContext::new().with_source(path.display().to_string()))
    })?;
    let words = parse_words(&source, options);
    debug!(words = words.len(), "dictionary read");
    Ok(words)
}

/// Reads a dictionary file and builds its graph.
///
/// # Errors
///
/// Returns an `Io` error if the file cannot be read, or `EmptyDictionary`
/// if it yields no words. Both carry the path as context.
pub fn load_graph(
    path: impl AsRef<Path>,
    options: &LoaderOptions,
    config: GraphConfig,
) -> Result<GraphHandle> {
    let path = path.as_ref();
    let words = read_words(path, options)?;
    GraphHandle::load_with_config(words, config)
        .map_err(|e| e.with_context(ErrorContext::new().with_source(path.display().to_string())))
}
