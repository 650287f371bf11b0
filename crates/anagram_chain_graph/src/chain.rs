//! Longest-chain search over parent links.
//!
//! Every word climbs its own parent links back to a terminal. The longest
//! climb ending at the requested root wins; ties go to the word earliest in
//! dictionary order.

use anagram_chain_foundation::{ParentLink, WordIndex};
use tracing::trace;

use crate::builder::DerivationGraph;

/// Outcome of climbing parent links from one word.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Walk {
    /// Number of `Parent` links followed.
    pub depth: usize,
    /// The word whose link is `Root`, or `None` if the climb hit `Unlinked`.
    pub terminal: Option<WordIndex>,
}

/// Answers chain queries against a [`DerivationGraph`].
#[derive(Copy, Clone, Debug)]
pub struct ChainFinder<'g> {
    graph: &'g DerivationGraph,
}

impl<'g> ChainFinder<'g> {
    /// Creates a finder over `graph`.
    #[must_use]
    pub const fn new(graph: &'g DerivationGraph) -> Self {
        Self { graph }
    }

    /// Climbs parent links from `start` until a root or unlinked word.
    ///
    /// Parent links always point at strictly shorter words, so the climb
    /// ends after at most one step per word. The step bound only guards
    /// against a corrupted graph.
    #[must_use]
    pub fn walk(&self, start: WordIndex) -> Walk {
        let links = self.graph.links();
        let mut current = start;
        let mut depth = 0;
        loop {
            match links.get(current.index()) {
                Some(ParentLink::Root) => {
                    return Walk {
                        depth,
                        terminal: Some(current),
                    };
                }
                Some(ParentLink::Parent(parent)) if depth < links.len() => {
                    depth += 1;
                    current = *parent;
                }
                _ => {
                    return Walk {
                        depth,
                        terminal: None,
                    };
                }
            }
        }
    }

    /// Finds the last word of the longest chain that starts at `root`.
    ///
    /// `root` is a word index (normally a member of the root set). The root
    /// itself, at depth 0, never counts as a chain, so `None` means no word
    /// derives back to `root`.
    #[must_use]
    pub fn longest_chain_end(&self, root: WordIndex) -> Option<WordIndex> {
        let mut best = None;
        let mut best_depth = 0;
        for i in (0..self.graph.len()).map(WordIndex::new) {
            let walk = self.walk(i);
            if walk.terminal == Some(root) && walk.depth > best_depth {
                best_depth = walk.depth;
                best = Some(i);
            }
        }
        trace!(?root, ?best, depth = best_depth, "longest chain end");
        best
    }

    /// Rebuilds the chain ending at `leaf`, ordered root first.
    ///
    /// Only real word indices appear; the root marker itself is not emitted.
    #[must_use]
    pub fn reconstruct_chain(&self, leaf: WordIndex) -> Vec<WordIndex> {
        let mut chain = vec![leaf];
        let mut current = leaf;
        while let Some(parent) = self.graph.link(current).and_then(ParentLink::parent) {
            if chain.len() > self.graph.len() {
                break;
            }
            chain.push(parent);
            current = parent;
        }
        chain.reverse();
        chain
    }

    /// The longest chain starting at `root`, or an empty chain if there is none.
    #[must_use]
    pub fn longest_chain(&self, root: WordIndex) -> Vec<WordIndex> {
        self.longest_chain_end(root)
            .map(|leaf| self.reconstruct_chain(leaf))
            .unwrap_or_default()
    }
}
