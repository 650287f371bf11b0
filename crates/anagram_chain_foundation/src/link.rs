//! Per-word derivation links.

use std::fmt;

use crate::word::WordIndex;

/// The single recorded predecessor of a word in the derivation graph.
///
/// A `Parent` link always points at a word exactly one letter shorter.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ParentLink {
    /// The word is a root (an origin of derivation chains).
    Root,
    /// No shorter word derives into this one.
    #[default]
    Unlinked,
    /// The word derives from the word at this index.
    Parent(WordIndex),
}

impl ParentLink {
    /// Returns the parent index, if this is a `Parent` link.
    #[must_use]
    pub const fn parent(self) -> Option<WordIndex> {
        match self {
            Self::Parent(index) => Some(index),
            Self::Root | Self::Unlinked => None,
        }
    }

    /// Returns true for an unlinked marker.
    #[must_use]
    pub const fn is_unlinked(self) -> bool {
        matches!(self, Self::Unlinked)
    }
}

impl fmt::Display for ParentLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => f.write_str("root"),
            Self::Unlinked => f.write_str("unlinked"),
            Self::Parent(index) => write!(f, "parent {index}"),
        }
    }
}
