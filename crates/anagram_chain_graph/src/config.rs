//! Configuration for derivation graph construction.

/// Length of a root word unless configured otherwise.
pub const DEFAULT_ROOT_LENGTH: usize = 3;

/// How candidate derivation targets are enumerated during construction.
///
/// Both strategies perform the same link writes in the same order, so they
/// always produce identical graphs.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum BuildStrategy {
    /// Compare every word against every other word in dictionary order.
    Pairwise,
    /// Group words by length first and compare only against the bucket one
    /// letter longer, still in dictionary order.
    #[default]
    Bucketed,
}

/// Configuration for [`DerivationGraphBuilder`](crate::DerivationGraphBuilder).
#[derive(Clone, Debug)]
pub struct GraphConfig {
    /// Words with exactly this many letters become roots.
    pub root_length: usize,

    /// Candidate enumeration strategy.
    pub strategy: BuildStrategy,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            root_length: DEFAULT_ROOT_LENGTH,
            strategy: BuildStrategy::default(),
        }
    }
}

impl GraphConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the root word length.
    #[must_use]
    pub fn with_root_length(mut self, root_length: usize) -> Self {
        self.root_length = root_length;
        self
    }

    /// Builder method to set the build strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: BuildStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}
