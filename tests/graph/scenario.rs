//! End-to-end scenario over a small dictionary

use anagram_chain_foundation::{ErrorKind, ParentLink, WordIndex};
use anagram_chain_graph::{list_roots, load_dictionary, longest_chain_for};

const WORDS: [&str; 6] = ["cat", "act", "tab", "bat", "cats", "tabs"];

#[test]
fn root_set() {
    let handle = load_dictionary(WORDS).unwrap();
    assert_eq!(list_roots(&handle), vec!["cat", "act", "tab", "bat"]);
    let roots: Vec<usize> = handle.graph().roots().iter().map(|r| r.index()).collect();
    assert_eq!(roots, vec![0, 1, 2, 3]);
}

#[test]
fn parent_links() {
    let handle = load_dictionary(WORDS).unwrap();
    let graph = handle.graph();
    assert_eq!(
        graph.link(WordIndex::new(4)),
        Some(ParentLink::Parent(WordIndex::new(1)))
    );
    assert_eq!(
        graph.link(WordIndex::new(5)),
        Some(ParentLink::Parent(WordIndex::new(3)))
    );
}

#[test]
fn chains() {
    let handle = load_dictionary(WORDS).unwrap();
    let act = handle.root_position("act").unwrap();
    let cat = handle.root_position("cat").unwrap();
    assert_eq!(longest_chain_for(&handle, act).unwrap(), vec!["act", "cats"]);
    assert!(longest_chain_for(&handle, cat).unwrap().is_empty());
}

#[test]
fn invalid_root_is_reported_distinctly() {
    let handle = load_dictionary(WORDS).unwrap();
    let err = longest_chain_for(&handle, 99).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidRootIndex { index: 99, .. }));
}

#[test]
fn empty_dictionary_is_rejected() {
    let err = load_dictionary(Vec::<&str>::new()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::EmptyDictionary));
}
