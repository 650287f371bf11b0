//! Words, their dictionary positions, and the ordered word table.

use std::fmt;
use std::ops::Index;

/// Position of a word in the dictionary (0-based, stable for the life of the table).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct WordIndex(usize);

impl WordIndex {
    /// Creates a word index from a raw dictionary position.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw dictionary position.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for WordIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WordIndex({})", self.0)
    }
}

impl fmt::Display for WordIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<usize> for WordIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// A single dictionary entry.
///
/// The text is kept exactly as supplied: no case folding, no trimming.
/// Length is counted in `char`s, so `"été"` has length 3.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Word {
    text: Box<str>,
    length: usize,
}

impl Word {
    /// Creates a word from its text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text: Box<str> = text.into().into_boxed_str();
        let length = text.chars().count();
        Self { text, length }
    }

    /// Returns the word's text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the number of letters in the word.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns true for the empty word.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for Word {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Word {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// The ordered dictionary.
///
/// Sized once at construction and never reallocated. Positions handed out as
/// [`WordIndex`] stay valid for as long as the table lives.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct WordTable {
    words: Box<[Word]>,
}

impl WordTable {
    /// Creates a table from words in dictionary order.
    pub fn new<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Word>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the table holds no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the word at `index`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, index: WordIndex) -> Option<&Word> {
        self.words.get(index.0)
    }

    /// Returns the text of the word at `index`, or `None` if out of range.
    #[must_use]
    pub fn text(&self, index: WordIndex) -> Option<&str> {
        self.get(index).map(Word::text)
    }

    /// Iterates over `(index, word)` pairs in dictionary order.
    pub fn iter(&self) -> impl Iterator<Item = (WordIndex, &Word)> + '_ {
        self.words
            .iter()
            .enumerate()
            .map(|(i, word)| (WordIndex(i), word))
    }

    /// Iterates over every index in dictionary order.
    pub fn indices(&self) -> impl Iterator<Item = WordIndex> + use<> {
        (0..self.words.len()).map(WordIndex)
    }

    /// Returns the words as a slice, in dictionary order.
    #[must_use]
    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }

    /// Returns the length of the longest word (0 for an empty table).
    #[must_use]
    pub fn max_len(&self) -> usize {
        self.words.iter().map(Word::len).max().unwrap_or(0)
    }
}

impl Index<WordIndex> for WordTable {
    type Output = Word;

    fn index(&self, index: WordIndex) -> &Word {
        &self.words[index.0]
    }
}

impl<W: Into<Word>> FromIterator<W> for WordTable {
    fn from_iter<I: IntoIterator<Item = W>>(iter: I) -> Self {
        Self::new(iter)
    }
}
