//! Unit tests for the prefix index.

use crate::data_structures::prefix_index::{Entry, InsertOutcome, PrefixIndex};

#[test]
fn test_index_basic_operations() {
    let mut index = PrefixIndex::new();

    // Test initial state
    assert!(index.is_empty());
    assert_eq!(index.len(), 0);
    assert_eq!(index.node_count(), 1);

    // Test insertion
    assert_eq!(index.insert("lol", "laugh out loud"), InsertOutcome::Created);
    assert_eq!(index.len(), 1);
    assert!(!index.is_empty());

    // Test retrieval
    assert_eq!(index.search("lol"), Some("laugh out loud"));
    assert!(index.contains("lol"));
    assert_eq!(index.search("nonexistent"), None);
    assert!(!index.contains("nonexistent"));

    // Test update
    assert_eq!(index.insert("lol", "laugh really hard"), InsertOutcome::Updated);
    assert_eq!(index.search("lol"), Some("laugh really hard"));
    assert_eq!(index.len(), 1);
}

#[test]
fn test_example_session() {
    let mut index = PrefixIndex::new();

    assert_eq!(index.insert("lol", "laugh out loud"), InsertOutcome::Created);
    assert_eq!(
        index.insert("lmao", "laughing my ass off"),
        InsertOutcome::Created
    );

    assert_eq!(
        index.prefix_search("l"),
        vec![
            Entry::new("lmao", "laughing my ass off"),
            Entry::new("lol", "laugh out loud"),
        ]
    );
    assert_eq!(index.search("xyz"), None);

    assert_eq!(
        index.insert("lol", "laugh really hard"),
        InsertOutcome::Updated
    );
    assert_eq!(index.search("lol"), Some("laugh really hard"));
}

#[test]
fn test_prefix_of_stored_term_is_not_found() {
    let mut index = PrefixIndex::new();
    index.insert("lmao", "laughing my ass off");

    assert_eq!(index.search("lma"), None);
    assert_eq!(index.search("lmaoo"), None);
}

#[test]
fn test_prefix_search_includes_exact_term() {
    let mut index = PrefixIndex::new();
    index.insert("gg", "good game everyone");
    index.insert("ggwp", "good game well played");
    index.insert("gl", "good luck friend");

    let results = index.prefix_search("gg");
    assert_eq!(
        results,
        vec![
            Entry::new("gg", "good game everyone"),
            Entry::new("ggwp", "good game well played"),
        ]
    );
}

#[test]
fn test_prefix_search_unknown_prefix() {
    let mut index = PrefixIndex::new();
    index.insert("brb", "be right back");

    assert!(index.prefix_search("x").is_empty());
    assert!(index.prefix_search("brbx").is_empty());
}

#[test]
fn test_all_entries_sorted_regardless_of_insert_order() {
    let mut index = PrefixIndex::new();
    for term in ["yolo", "afk", "smh", "idk", "af", "tbh", "Zzz"] {
        index.insert(term, format!("meaning of {term}"));
    }

    let terms: Vec<String> = index.all_entries().into_iter().map(|e| e.term).collect();
    assert_eq!(terms, vec!["Zzz", "af", "afk", "idk", "smh", "tbh", "yolo"]);
}

#[test]
fn test_empty_index_listing() {
    let index = PrefixIndex::new();
    assert!(index.all_entries().is_empty());
    assert!(index.prefix_search("a").is_empty());
}

#[test]
fn test_shared_prefix_reuses_nodes() {
    let mut index = PrefixIndex::new();
    index.insert("abc", "first test term");
    assert_eq!(index.node_count(), 4);

    // Only the trailing 'd' is new
    index.insert("abcd", "second test term");
    assert_eq!(index.node_count(), 5);

    // Updating allocates nothing
    index.insert("abc", "changed test term");
    assert_eq!(index.node_count(), 5);
}

#[test]
fn test_multibyte_terms_round_trip() {
    let mut index = PrefixIndex::new();
    index.insert("café", "coffee shop place");
    index.insert("cafe", "plain ascii spelling");

    assert_eq!(index.search("café"), Some("coffee shop place"));
    assert_eq!(
        index.prefix_search("caf"),
        vec![
            Entry::new("cafe", "plain ascii spelling"),
            Entry::new("café", "coffee shop place"),
        ]
    );
}

#[test]
fn test_description_is_opaque() {
    let mut index = PrefixIndex::new();
    index.insert("x1", "");
    index.insert("x2", "   ");

    assert_eq!(index.search("x1"), Some(""));
    assert_eq!(index.search("x2"), Some("   "));
    assert_eq!(index.len(), 2);
}

#[test]
fn test_very_long_term() {
    let term = "a".repeat(200_000);
    let mut index = PrefixIndex::new();
    assert_eq!(index.insert(&term, "one very long word"), InsertOutcome::Created);
    index.insert("ab", "short neighbour term");

    assert_eq!(index.search(&term), Some("one very long word"));
    assert!(index.contains(&term));
    assert_eq!(index.node_count(), 200_002);

    let all = index.all_entries();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].term, term);
    assert_eq!(all[1].term, "ab");

    let deep = index.prefix_search(&term[..150_000]);
    assert_eq!(deep, vec![Entry::new(term.as_str(), "one very long word")]);

    drop(index);
}
