//! Integration tests for parent-link construction

use anagram_chain_foundation::{ParentLink, WordIndex, WordTable};
use anagram_chain_graph::{BuildStrategy, DerivationGraph, DerivationGraphBuilder, GraphConfig};
use proptest::prelude::*;

fn idx(i: usize) -> WordIndex {
    WordIndex::new(i)
}

fn build(words: &[&str]) -> DerivationGraph {
    DerivationGraphBuilder::new(&WordTable::new(words.iter().copied())).build()
}

// =============================================================================
// Overwrite Precedence
// =============================================================================

#[test]
fn later_dictionary_match_wins() {
    let graph = build(&["cat", "act", "cats"]);
    assert_eq!(graph.link(idx(2)), Some(ParentLink::Parent(idx(1))));
}

#[test]
fn reordering_changes_the_winner() {
    let graph = build(&["act", "cat", "cats"]);
    assert_eq!(graph.link(idx(2)), Some(ParentLink::Parent(idx(1))));
    let graph = build(&["cats", "act", "cat"]);
    assert_eq!(graph.link(idx(0)), Some(ParentLink::Parent(idx(2))));
}

#[test]
fn duplicate_words_link_to_the_last_copy() {
    let graph = build(&["ate", "ate", "tear"]);
    assert_eq!(graph.roots(), &[idx(0), idx(1)]);
    assert_eq!(graph.link(idx(2)), Some(ParentLink::Parent(idx(1))));
}

// =============================================================================
// Roots and Unlinked Words
// =============================================================================

#[test]
fn root_set_is_every_three_letter_word() {
    let graph = build(&["a", "ab", "abc", "abcd", "xyz"]);
    assert_eq!(graph.roots(), &[idx(2), idx(4)]);
}

#[test]
fn short_words_never_reach_a_root() {
    let graph = build(&["a", "ab", "abc"]);
    assert_eq!(graph.link(idx(0)), Some(ParentLink::Unlinked));
    assert_eq!(graph.link(idx(1)), Some(ParentLink::Parent(idx(0))));
    // "ab" comes before "abc", so the root marker survives.
    assert_eq!(graph.link(idx(2)), Some(ParentLink::Root));
}

#[test]
fn empty_word_is_accepted() {
    let graph = build(&["", "a", "cat"]);
    assert_eq!(graph.link(idx(1)), Some(ParentLink::Parent(idx(0))));
    assert_eq!(graph.stats().words, 3);
}

#[test]
fn strategy_does_not_change_the_graph() {
    let words = ["ate", "eat", "tea", "tear", "rate", "rates", "aster", "taster"];
    let table = WordTable::new(words);
    let pairwise = DerivationGraphBuilder::new(&table)
        .with_config(GraphConfig::new().with_strategy(BuildStrategy::Pairwise))
        .build();
    let bucketed = DerivationGraphBuilder::new(&table)
        .with_config(GraphConfig::new().with_strategy(BuildStrategy::Bucketed))
        .build();
    assert_eq!(pairwise, bucketed);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn climbing_terminates_within_length_minus_three(
        words in prop::collection::vec("[aest]{3,7}", 1..40)
    ) {
        let table = WordTable::new(words.iter().map(String::as_str));
        let graph = DerivationGraphBuilder::new(&table).build();
        for (i, word) in table.iter() {
            let mut steps = 0;
            let mut current = i;
            while let Some(parent) = graph.link(current).and_then(ParentLink::parent) {
                steps += 1;
                prop_assert!(steps <= word.len() - 3);
                current = parent;
            }
        }
    }

    #[test]
    fn rebuilding_is_identical(words in prop::collection::vec("[aest]{1,6}", 0..40)) {
        let table = WordTable::new(words.iter().map(String::as_str));
        let first = DerivationGraphBuilder::new(&table).build();
        let second = DerivationGraphBuilder::new(&table).build();
        prop_assert_eq!(first.links(), second.links());
        prop_assert_eq!(first.roots(), second.roots());
    }
}
