//! Integration tests for words, word tables, and parent links

use anagram_chain_foundation::{ParentLink, Word, WordIndex, WordTable};

// =============================================================================
// Words
// =============================================================================

#[test]
fn word_keeps_exact_text() {
    for text in ["Cat", "cat ", "", "naïve", "a-b"] {
        let word = Word::new(text);
        assert_eq!(word.text(), text);
        assert_eq!(word.len(), text.chars().count());
    }
}

#[test]
fn words_compare_by_text() {
    assert_eq!(Word::from("cat"), Word::from("cat".to_string()));
    assert_ne!(Word::from("cat"), Word::from("Cat"));
}

// =============================================================================
// Word Table
// =============================================================================

#[test]
fn table_keeps_dictionary_order_and_duplicates() {
    let table = WordTable::new(["tab", "bat", "tab"]);
    assert_eq!(table.len(), 3);
    assert_eq!(table.text(WordIndex::new(0)), Some("tab"));
    assert_eq!(table.text(WordIndex::new(2)), Some("tab"));
}

#[test]
fn table_out_of_range_access_is_none() {
    let table = WordTable::new(["tab"]);
    assert!(table.get(WordIndex::new(1)).is_none());
    assert!(table.text(WordIndex::new(100)).is_none());
}

#[test]
fn table_from_owned_strings() {
    let words = vec!["cat".to_string(), "cats".to_string()];
    let table: WordTable = words.into_iter().collect();
    assert_eq!(table.max_len(), 4);
    assert_eq!(
        table.iter().map(|(i, w)| (i.index(), w.len())).collect::<Vec<_>>(),
        vec![(0, 3), (1, 4)]
    );
}

// =============================================================================
// Parent Links
// =============================================================================

#[test]
fn parent_link_variants() {
    let parent = ParentLink::Parent(WordIndex::new(2));
    assert_eq!(parent.parent().map(WordIndex::index), Some(2));
    assert_eq!(ParentLink::Root.parent(), None);
    assert!(ParentLink::Unlinked.is_unlinked());
    assert_eq!(ParentLink::default(), ParentLink::Unlinked);
}
