//! anagram_chain - longest anagram-derivation chains in a word list
//!
//! This crate re-exports all layers of the system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: anagram_chain_runtime    — Word-file loading, REPL, CLI
//! Layer 1: anagram_chain_graph      — Derivation predicate, graph builder, chain search
//! Layer 0: anagram_chain_foundation — Core types (WordTable, ParentLink, Error)
//! ```

pub use anagram_chain_foundation as foundation;
pub use anagram_chain_graph as graph;
pub use anagram_chain_runtime as runtime;
