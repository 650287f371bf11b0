//! Derivation graph construction and longest-chain search.
//!
//! A word `W'` derives from `W` when it has exactly one more letter and the
//! letters of `W` form a sub-multiset of the letters of `W'`. This crate provides:
//! - [`derives`] / [`LetterCounts`] - The derivation predicate
//! - [`DerivationGraphBuilder`] - One parent link per word, plus the root set
//! - [`ChainFinder`] - Longest chain search and chain reconstruction
//! - [`GraphHandle`] - A loaded dictionary and its graph, ready for queries
//!
//! # Example
//!
//! ```
//! use anagram_chain_graph::load_dictionary;
//!
//! let handle = load_dictionary(["cat", "act", "tab", "bat", "cats", "tabs"]).unwrap();
//! assert_eq!(handle.list_roots(), vec!["cat", "act", "tab", "bat"]);
//! assert_eq!(handle.longest_chain_for(1).unwrap(), vec!["act", "cats"]);
//! assert!(handle.longest_chain_for(0).unwrap().is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod builder;
pub mod chain;
pub mod config;
pub mod handle;
pub mod predicate;

pub use builder::{DerivationGraph, DerivationGraphBuilder, GraphStats};
pub use chain::{ChainFinder, Walk};
pub use config::{BuildStrategy, DEFAULT_ROOT_LENGTH, GraphConfig};
pub use handle::{GraphHandle, list_roots, load_dictionary, longest_chain_for};
pub use predicate::{LetterCounts, derives};
