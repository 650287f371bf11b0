//! A loaded dictionary together with its derivation graph.
//!
//! Roots are addressed by their position in the root set (the order in which
//! root words appear in the dictionary), not by word index.

use anagram_chain_foundation::{Error, Result, Word, WordIndex, WordTable};
use tracing::{debug, info};

use crate::builder::{DerivationGraph, DerivationGraphBuilder, GraphStats};
use crate::chain::ChainFinder;
use crate::config::GraphConfig;

/// An immutable dictionary and the graph built from it.
#[derive(Clone, Debug)]
pub struct GraphHandle {
    table: WordTable,
    graph: DerivationGraph,
}

impl GraphHandle {
    /// Loads words with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns `EmptyDictionary` if `words` yields nothing.
    pub fn load<I>(words: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Word>,
    {
        Self::load_with_config(words, GraphConfig::default())
    }

    /// Loads words with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `EmptyDictionary` if `words` yields nothing.
    pub fn load_with_config<I>(words: I, config: GraphConfig) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Word>,
    {
        Self::from_table(WordTable::new(words), config)
    }

    /// Builds the graph for an existing table.
    ///
    /// # Errors
    ///
    /// Returns `EmptyDictionary` if the table is empty.
    pub fn from_table(table: WordTable, config: GraphConfig) -> Result<Self> {
        if table.is_empty() {
            return Err(Error::empty_dictionary());
        }
        let graph = DerivationGraphBuilder::new(&table)
            .with_config(config)
            .build();
        let stats = graph.stats();
        info!(
            words = stats.words,
            roots = stats.roots,
            linked = stats.linked,
            "dictionary loaded"
        );
        Ok(Self { table, graph })
    }

    /// The dictionary.
    #[must_use]
    pub const fn table(&self) -> &WordTable {
        &self.table
    }

    /// The derivation graph.
    #[must_use]
    pub const fn graph(&self) -> &DerivationGraph {
        &self.graph
    }

    /// Build statistics.
    #[must_use]
    pub const fn stats(&self) -> &GraphStats {
        self.graph.stats()
    }

    /// Number of roots.
    #[must_use]
    pub fn root_count(&self) -> usize {
        self.graph.roots().len()
    }

    /// Root words in dictionary order.
    #[must_use]
    pub fn list_roots(&self) -> Vec<&str> {
        self.graph
            .roots()
            .iter()
            .map(|&root| self.table[root].text())
            .collect()
    }

    /// Position in the root set of the first root whose text is `word`.
    #[must_use]
    pub fn root_position(&self, word: &str) -> Option<usize> {
        self.graph
            .roots()
            .iter()
            .position(|&root| self.table[root].text() == word)
    }

    /// Word index of the root at `position`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRootIndex` if `position` is outside the root set.
    pub fn root_index(&self, position: usize) -> Result<WordIndex> {
        self.graph
            .root(position)
            .ok_or_else(|| Error::invalid_root_index(position, self.root_count()))
    }

    /// Last word of the longest chain from the root at `position`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRootIndex` if `position` is outside the root set.
    pub fn longest_chain_end_for(&self, position: usize) -> Result<Option<WordIndex>> {
        let root = self.root_index(position)?;
        Ok(ChainFinder::new(&self.graph).longest_chain_end(root))
    }

    /// Word indices of the longest chain from the root at `position`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRootIndex` if `position` is outside the root set.
    pub fn chain_indices_for(&self, position: usize) -> Result<Vec<WordIndex>> {
        let root = self.root_index(position)?;
        let chain = ChainFinder::new(&self.graph).longest_chain(root);
        debug!(position, ?root, length = chain.len(), "chain query");
        Ok(chain)
    }

    /// The longest chain from the root at `position`, as words.
    ///
    /// An empty vector means the root exists but nothing derives back to it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRootIndex` if `position` is outside the root set.
    pub fn longest_chain_for(&self, position: usize) -> Result<Vec<&str>> {
        Ok(self
            .chain_indices_for(position)?
            .into_iter()
            .map(|i| self.table[i].text())
            .collect())
    }
}

/// Builds a [`GraphHandle`] from words in dictionary order.
///
/// # Errors
///
/// Returns `EmptyDictionary` if `words` yields nothing.
pub fn load_dictionary<I>(words: I) -> Result<GraphHandle>
where
    I: IntoIterator,
    I::Item: Into<Word>,
{
    GraphHandle::load(words)
}

/// Root words of `handle` in dictionary order.
#[must_use]
pub fn list_roots(handle: &GraphHandle) -> Vec<&str> {
    handle.list_roots()
}

/// The longest chain from the root at `root_index` in the root set.
///
/// # Errors
///
/// Returns `InvalidRootIndex` if `root_index` is outside the root set.
pub fn longest_chain_for(handle: &GraphHandle, root_index: usize) -> Result<Vec<&str>> {
    handle.longest_chain_for(root_index)
}
