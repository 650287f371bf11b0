//! Core types for anagram derivation chains.
//!
//! This crate provides:
//! - [`WordIndex`] - Stable 0-based dictionary positions
//! - [`Word`] - A dictionary entry and its letter length
//! - [`WordTable`] - The ordered, immutable dictionary
//! - [`ParentLink`] - Per-word derivation link (root, unlinked, or parent)
//! - [`Error`] - Error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod link;
pub mod word;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use link::ParentLink;
pub use word::{Word, WordIndex, WordTable};
