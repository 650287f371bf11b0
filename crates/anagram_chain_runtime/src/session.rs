//! Session state: a loaded dictionary plus root selection and formatting.

use std::path::{Path, PathBuf};

use anagram_chain_foundation::{Error, Result};
use anagram_chain_graph::{GraphConfig, GraphHandle};

use crate::loader::{LoaderOptions, load_graph};

/// Separator placed between the words of a chain.
const CHAIN_SEPARATOR: &str = " -> ";

/// Formats a chain as `"w1 -> w2 -> w3"`. An empty chain formats as `""`.
#[must_use]
pub fn format_chain<S: AsRef<str>>(chain: &[S]) -> String {
    chain
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(CHAIN_SEPARATOR)
}

/// Formats words as `"w1, w2, w3."`. An empty list formats as `""`.
#[must_use]
pub fn format_word_list<S: AsRef<str>>(words: &[S]) -> String {
    if words.is_empty() {
        return String::new();
    }
    let mut out = words
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ");
    out.push('.');
    out
}

/// A loaded dictionary and where it came from.
#[derive(Clone, Debug)]
pub struct Session {
    /// The dictionary and its graph.
    handle: GraphHandle,

    /// File the dictionary was read from, if any.
    source: Option<PathBuf>,
}

impl Session {
    /// Creates a session over an already-built handle.
    #[must_use]
    pub const fn new(handle: GraphHandle) -> Self {
        Self {
            handle,
            source: None,
        }
    }

    /// Reads a dictionary file and builds a session over it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or yields no words.
    pub fn from_file(
        path: impl AsRef<Path>,
        options: &LoaderOptions,
        config: GraphConfig,
    ) -> Result<Self> {
        let path = path.as_ref();
        let handle = load_graph(path, options, config)?;
        Ok(Self {
            handle,
            source: Some(path.to_path_buf()),
        })
    }

    /// The loaded dictionary and graph.
    #[must_use]
    pub const fn handle(&self) -> &GraphHandle {
        &self.handle
    }

    /// File the dictionary was read from, if any.
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Resolves a root selector to a position in the root set.
    ///
    /// A selector matching a root word selects that root (the first one, if
    /// the word appears more than once). Otherwise a number selects by
    /// position.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRootIndex` for an out-of-range number and
    /// `UnknownRoot` for anything else that is not a root word.
    pub fn resolve_root(&self, selector: &str) -> Result<usize> {
        if let Some(position) = self.handle.root_position(selector) {
            return Ok(position);
        }
        match selector.parse::<usize>() {
            Ok(position) => {
                self.handle.root_index(position)?;
                Ok(position)
            }
            Err(_) => Err(Error::unknown_root(selector)),
        }
    }

    /// The longest chain for a root selector.
    ///
    /// # Errors
    ///
    /// Returns an error if the selector does not name a root.
    pub fn chain(&self, selector: &str) -> Result<Vec<&str>> {
        let position = self.resolve_root(selector)?;
        self.handle.longest_chain_for(position)
    }

    /// The chain for a root selector as shown to a user: the formatted chain,
    /// or `(no chain for ROOT)` when the root derives nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the selector does not name a root.
    pub fn chain_text(&self, selector: &str) -> Result<String> {
        let position = self.resolve_root(selector)?;
        let chain = self.handle.longest_chain_for(position)?;
        if chain.is_empty() {
            let root = self.handle.root_index(position)?;
            Ok(format!("(no chain for {})", self.handle.table()[root].text()))
        } else {
            Ok(format_chain(&chain))
        }
    }

    /// One `root: chain` line per root, in dictionary order. Roots without a
    /// chain show `(no chain)`.
    #[must_use]
    pub fn chain_summary(&self) -> Vec<String> {
        self.handle
            .list_roots()
            .into_iter()
            .enumerate()
            .map(|(position, root)| {
                let chain = self.handle.longest_chain_for(position).unwrap_or_default();
                if chain.is_empty() {
                    format!("{root}: (no chain)")
                } else {
                    format!("{root}: {}", format_chain(&chain))
                }
            })
            .collect()
    }

    /// Numbered root words, in dictionary order.
    #[must_use]
    pub fn roots(&self) -> Vec<(usize, &str)> {
        self.handle.list_roots().into_iter().enumerate().collect()
    }

    /// Every dictionary word as `"w1, w2, w3."`.
    #[must_use]
    pub fn word_list(&self) -> String {
        let words: Vec<&str> = self
            .handle
            .table()
            .as_slice()
            .iter()
            .map(|w| w.text())
            .collect();
        format_word_list(&words)
    }
}
