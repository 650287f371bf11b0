//! Parent-link construction.
//!
//! For every word `i` in dictionary order the builder first marks `i` as a
//! root if it has the root length, then writes `Parent(i)` into every word
//! one letter longer that derives from it. Writes are unconditional: when
//! several shorter words derive into the same longer word, the one latest in
//! dictionary order wins. The same applies to root markers, which a later
//! shorter word overwrites like any other link.

use anagram_chain_foundation::{ParentLink, WordIndex, WordTable};
use tracing::{debug, instrument};

use crate::config::{BuildStrategy, GraphConfig};
use crate::predicate::LetterCounts;

// =============================================================================
// Derivation Graph
// =============================================================================

/// Parent links and root set for one dictionary.
///
/// Exactly one link per word. Links are only written during construction.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DerivationGraph {
    links: Box<[ParentLink]>,
    roots: Box<[WordIndex]>,
    stats: GraphStats,
}

impl DerivationGraph {
    /// Number of words (and links) in the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Returns true for a graph over an empty dictionary.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Returns the link of the word at `index`, or `None` if out of range.
    #[must_use]
    pub fn link(&self, index: WordIndex) -> Option<ParentLink> {
        self.links.get(index.index()).copied()
    }

    /// All links, indexed by dictionary position.
    #[must_use]
    pub fn links(&self) -> &[ParentLink] {
        &self.links
    }

    /// Every word of root length, in dictionary order.
    ///
    /// Fixed at construction, even if a root's own marker was later overwritten.
    #[must_use]
    pub fn roots(&self) -> &[WordIndex] {
        &self.roots
    }

    /// Returns the word index of the root at `position` in the root set.
    #[must_use]
    pub fn root(&self, position: usize) -> Option<WordIndex> {
        self.roots.get(position).copied()
    }

    /// Statistics gathered while building.
    #[must_use]
    pub const fn stats(&self) -> &GraphStats {
        &self.stats
    }
}

/// Counters gathered while building a graph.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GraphStats {
    /// Words in the dictionary.
    pub words: usize,
    /// Members of the root set.
    pub roots: usize,
    /// Words whose final link is `Parent`.
    pub linked: usize,
    /// Words whose final link is `Unlinked`.
    pub unlinked: usize,
    /// Derivation predicate evaluations.
    pub comparisons: u64,
}

// =============================================================================
// Builder
// =============================================================================

/// Builds a [`DerivationGraph`] from a [`WordTable`].
pub struct DerivationGraphBuilder<'t> {
    table: &'t WordTable,
    config: GraphConfig,
}

impl<'t> DerivationGraphBuilder<'t> {
    /// Creates a builder with the default configuration.
    #[must_use]
    pub fn new(table: &'t WordTable) -> Self {
        Self {
            table,
            config: GraphConfig::default(),
        }
    }

    /// Sets the configuration.
    #[must_use]
    pub fn with_config(mut self, config: GraphConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds the graph.
    #[must_use]
    #[instrument(skip_all, fields(words = self.table.len(), strategy = ?self.config.strategy))]
    pub fn build(self) -> DerivationGraph {
        let table = self.table;
        let root_length = self.config.root_length;
        let counts: Vec<LetterCounts> = table
            .as_slice()
            .iter()
            .map(|word| LetterCounts::of(word.text()))
            .collect();
        let buckets = match self.config.strategy {
            BuildStrategy::Bucketed => Some(LengthBuckets::new(table)),
            BuildStrategy::Pairwise => None,
        };

        let mut links = vec![ParentLink::Unlinked; table.len()].into_boxed_slice();
        let mut roots = Vec::new();
        let mut comparisons = 0u64;

        for (i, word) in table.iter() {
            if word.len() == root_length {
                links[i.index()] = ParentLink::Root;
                roots.push(i);
            }

            let source = &counts[i.index()];
            let mut try_link = |j: WordIndex| {
                comparisons += 1;
                if source.derives_into(&counts[j.index()]) {
                    links[j.index()] = ParentLink::Parent(i);
                }
            };

            let target_len = word.len() + 1;
            match &buckets {
                Some(buckets) => buckets.of_length(target_len).iter().copied().for_each(try_link),
                None => table
                    .iter()
                    .filter(|(_, candidate)| candidate.len() == target_len)
                    .for_each(|(j, _)| try_link(j)),
            }
        }

        let stats = GraphStats {
            words: table.len(),
            roots: roots.len(),
            linked: links.iter().filter(|l| l.parent().is_some()).count(),
            unlinked: links.iter().filter(|l| l.is_unlinked()).count(),
            comparisons,
        };
        debug!(
            roots = stats.roots,
            linked = stats.linked,
            unlinked = stats.unlinked,
            comparisons = stats.comparisons,
            "derivation graph built"
        );

        DerivationGraph {
            links,
            roots: roots.into_boxed_slice(),
            stats,
        }
    }
}

/// Word indices grouped by letter length, each group in dictionary order.
struct LengthBuckets {
    buckets: Vec<Vec<WordIndex>>,
}

impl LengthBuckets {
    fn new(table: &WordTable) -> Self {
        let mut buckets = vec![Vec::new(); table.max_len() + 1];
        for (i, word) in table.iter() {
            buckets[word.len()].push(i);
        }
        Self { buckets }
    }

    fn of_length(&self, len: usize) -> &[WordIndex] {
        match self.buckets.get(len) {
            Some(bucket) => bucket,
            None => &[],
        }
    }
}
