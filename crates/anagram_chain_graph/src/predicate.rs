//! The derivation predicate.
//!
//! `derives(shorter, longer)` holds when `longer` has exactly one more letter
//! than `shorter` and every letter of `shorter` can be matched to a distinct
//! letter of `longer`. Letters compare by raw `char` equality.

use std::collections::HashMap;

/// Letter-frequency counts of a single word.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LetterCounts {
    counts: HashMap<char, usize>,
    len: usize,
}

impl LetterCounts {
    /// Counts the letters of `word`.
    #[must_use]
    pub fn of(word: &str) -> Self {
        let mut counts = HashMap::new();
        let mut len = 0;
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
            len += 1;
        }
        Self { counts, len }
    }

    /// Number of letters counted.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no letters were counted.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn count(&self, ch: char) -> usize {
        self.counts.get(&ch).copied().unwrap_or(0)
    }

    /// Returns true if every letter count here is at most the count in `other`.
    #[must_use]
    pub fn is_sub_multiset_of(&self, other: &Self) -> bool {
        self.counts.iter().all(|(&ch, &n)| other.count(ch) >= n)
    }

    /// The derivation predicate on precomputed counts.
    ///
    /// False whenever `longer` is not exactly one letter longer.
    #[must_use]
    pub fn derives_into(&self, longer: &Self) -> bool {
        longer.len == self.len + 1 && self.is_sub_multiset_of(longer)
    }
}

/// Returns true if `longer` derives from `shorter`.
///
/// ```
/// use anagram_chain_graph::derives;
///
/// assert!(derives("cat", "cats"));
/// assert!(derives("too", "toot"));
/// assert!(!derives("too", "tao"));
/// assert!(!derives("cat", "tabs"));
/// ```
#[must_use]
pub fn derives(shorter: &str, longer: &str) -> bool {
    LetterCounts::of(shorter).derives_into(&LetterCounts::of(longer))
}
