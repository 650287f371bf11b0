//! Word-file loading, REPL, and CLI for anagram derivation chains.
//!
//! This crate provides:
//! - [`read_words`] / [`parse_words`] - Dictionary file loading
//! - [`Session`] - A loaded dictionary plus root selection and formatting
//! - [`Repl`] - Interactive root selection and chain display

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod loader;
pub mod repl;
pub mod session;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use loader::{DEFAULT_WORDS_FILE, LoaderOptions, load_graph, parse_words, read_words};
pub use repl::{Outcome, Repl};
pub use session::{Session, format_chain, format_word_list};
