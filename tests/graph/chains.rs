//! Integration tests for longest-chain search and reconstruction

use anagram_chain_foundation::{ParentLink, WordIndex, WordTable};
use anagram_chain_graph::{ChainFinder, DerivationGraphBuilder, GraphHandle, Walk, derives};
use proptest::prelude::*;

fn idx(i: usize) -> WordIndex {
    WordIndex::new(i)
}

// =============================================================================
// Chain Search
// =============================================================================

#[test]
fn long_chain_through_several_lengths() {
    let handle = GraphHandle::load(["ate", "tear", "rates", "taster", "retreats"]).unwrap();
    assert_eq!(
        handle.longest_chain_for(0).unwrap(),
        vec!["ate", "tear", "rates", "taster"]
    );
}

#[test]
fn deeper_chain_beats_earlier_shallow_one() {
    let handle = GraphHandle::load(["ate", "eats", "tear", "rates"]).unwrap();
    // "eats" (depth 1) is found first, "rates" (depth 2) is deeper.
    assert_eq!(
        handle.longest_chain_for(0).unwrap(),
        vec!["ate", "tear", "rates"]
    );
}

#[test]
fn equal_depth_keeps_first_found() {
    let handle = GraphHandle::load(["ate", "eats", "tear"]).unwrap();
    assert_eq!(handle.longest_chain_for(0).unwrap(), vec!["ate", "eats"]);
}

#[test]
fn chains_of_different_roots_are_independent() {
    let handle = GraphHandle::load(["ate", "dog", "tear", "gods"]).unwrap();
    assert_eq!(handle.longest_chain_for(0).unwrap(), vec!["ate", "tear"]);
    assert_eq!(handle.longest_chain_for(1).unwrap(), vec!["dog", "gods"]);
}

#[test]
fn root_overwritten_by_two_letter_word_has_no_chain() {
    let handle = GraphHandle::load(["cat", "cats", "at"]).unwrap();
    let graph = handle.graph();
    assert_eq!(graph.link(idx(0)), Some(ParentLink::Parent(idx(2))));
    assert!(handle.longest_chain_for(0).unwrap().is_empty());
    let walk = ChainFinder::new(graph).walk(idx(1));
    assert_eq!(walk, Walk { depth: 2, terminal: None });
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn chains_are_valid_derivations(words in prop::collection::vec("[aerst]{3,6}", 1..40)) {
        let handle = GraphHandle::load(words.iter().map(String::as_str)).unwrap();
        let roots: Vec<&str> = handle.list_roots();
        for position in 0..handle.root_count() {
            let chain = handle.longest_chain_for(position).unwrap();
            if chain.is_empty() {
                continue;
            }
            prop_assert_eq!(chain[0], roots[position]);
            prop_assert!(chain.len() >= 2);
            for pair in chain.windows(2) {
                prop_assert!(derives(pair[0], pair[1]));
                prop_assert_eq!(pair[0].chars().count() + 1, pair[1].chars().count());
            }
        }
    }

    #[test]
    fn chain_ends_at_deepest_word_for_its_root(
        words in prop::collection::vec("[aerst]{3,6}", 1..40)
    ) {
        let table = WordTable::new(words.iter().map(String::as_str));
        let graph = DerivationGraphBuilder::new(&table).build();
        let finder = ChainFinder::new(&graph);
        for &root in graph.roots() {
            let deepest = table
                .indices()
                .map(|i| (i, finder.walk(i)))
                .filter(|(_, walk)| walk.terminal == Some(root))
                .map(|(_, walk)| walk.depth)
                .max()
                .unwrap_or(0);
            match finder.longest_chain_end(root) {
                Some(leaf) => {
                    prop_assert_eq!(finder.walk(leaf).depth, deepest);
                    prop_assert_eq!(finder.reconstruct_chain(leaf).len(), deepest + 1);
                }
                None => prop_assert_eq!(deepest, 0),
            }
        }
    }
}
