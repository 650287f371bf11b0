//! Integration tests for dictionary file loading

use std::io::Write;

use anagram_chain_foundation::ErrorKind;
use anagram_chain_graph::{BuildStrategy, GraphConfig};
use anagram_chain_runtime::{LoaderOptions, load_graph, read_words};
use tempfile::NamedTempFile;

fn dictionary(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn reads_one_word_per_line() {
    let file = dictionary("cat\nact\ncats\n");
    let words = read_words(file.path(), &LoaderOptions::new()).unwrap();
    assert_eq!(words, vec!["cat", "act", "cats"]);
}

#[test]
fn crlf_file_reads_like_lf_file() {
    let lf = dictionary("cat\nact\ncats\n");
    let crlf = dictionary("cat\r\nact\r\ncats\r\n");
    let options = LoaderOptions::new();
    assert_eq!(
        read_words(lf.path(), &options).unwrap(),
        read_words(crlf.path(), &options).unwrap()
    );
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.txt");
    let err = read_words(&path, &LoaderOptions::new()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Io(_)));
    assert!(err.context.unwrap().source.unwrap().ends_with("words.txt"));
}

#[test]
fn empty_file_is_empty_dictionary() {
    let file = dictionary("");
    let err = load_graph(file.path(), &LoaderOptions::new(), GraphConfig::default()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::EmptyDictionary));
    assert!(err.context.is_some());
}

#[test]
fn file_of_only_comments_is_empty_dictionary() {
    let file = dictionary("# nothing here\n# at all\n");
    let options = LoaderOptions::new().with_comment_prefix(Some('#'));
    let err = load_graph(file.path(), &options, GraphConfig::default()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::EmptyDictionary));
}

#[test]
fn loads_graph_from_file() {
    let file = dictionary("cat\nact\ntab\nbat\ncats\ntabs\n");
    let config = GraphConfig::new().with_strategy(BuildStrategy::Pairwise);
    let handle = load_graph(file.path(), &LoaderOptions::new(), config).unwrap();
    assert_eq!(handle.longest_chain_for(1).unwrap(), vec!["act", "cats"]);
}
