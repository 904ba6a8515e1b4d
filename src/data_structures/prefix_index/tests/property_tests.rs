//! Property-based tests for the prefix index.

use proptest::prelude::*;
use std::collections::BTreeMap;

use crate::data_structures::prefix_index::{InsertOutcome, PrefixIndex};

// Strategy for generating terms; a small alphabet forces shared prefixes
fn term_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-e]{1,8}").unwrap()
}

// Strategy for generating descriptions
fn description_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,10} [a-z]{1,10}").unwrap()
}

// Strategy for generating a batch of insertions
fn entries_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((term_strategy(), description_strategy()), 0..40)
}

fn build_index(entries: &[(String, String)]) -> PrefixIndex {
    let mut index = PrefixIndex::new();
    for (term, description) in entries {
        index.insert(term, description.as_str());
    }
    index
}

proptest! {
    // Property: whatever was inserted last for a term is what search returns
    #[test]
    fn prop_insert_then_search(term in term_strategy(), description in description_strategy()) {
        let mut index = PrefixIndex::new();
        index.insert(&term, description.as_str());
        prop_assert_eq!(index.search(&term), Some(description.as_str()));
    }

    // Property: the second insert of a term overwrites and reports Updated
    #[test]
    fn prop_update_overwrites(
        term in term_strategy(),
        first in description_strategy(),
        second in description_strategy()
    ) {
        let mut index = PrefixIndex::new();
        prop_assert_eq!(index.insert(&term, first.as_str()), InsertOutcome::Created);
        prop_assert_eq!(index.insert(&term, second.as_str()), InsertOutcome::Updated);
        prop_assert_eq!(index.search(&term), Some(second.as_str()));
        prop_assert_eq!(index.len(), 1);
    }

    // Property: the index agrees with a map fed the same insertions
    #[test]
    fn prop_matches_reference_map(entries in entries_strategy(), probe in term_strategy()) {
        let index = build_index(&entries);
        let reference: BTreeMap<&str, &str> = entries
            .iter()
            .map(|(t, d)| (t.as_str(), d.as_str()))
            .collect();

        prop_assert_eq!(index.len(), reference.len());
        prop_assert_eq!(index.search(&probe), reference.get(probe.as_str()).copied());

        let listed: Vec<(String, String)> = index
            .all_entries()
            .into_iter()
            .map(|e| (e.term, e.description))
            .collect();
        let expected: Vec<(String, String)> = reference
            .iter()
            .map(|(t, d)| (t.to_string(), d.to_string()))
            .collect();
        prop_assert_eq!(listed, expected);
    }

    // Property: prefix results are exactly the matching subset of all entries
    #[test]
    fn prop_prefix_search_is_filtered_listing(
        entries in entries_strategy(),
        prefix in prop::string::string_regex("[a-e]{0,3}").unwrap()
    ) {
        let index = build_index(&entries);
        let expected: Vec<_> = index
            .all_entries()
            .into_iter()
            .filter(|e| e.term.starts_with(&prefix))
            .collect();
        prop_assert_eq!(index.prefix_search(&prefix), expected);
    }

    // Property: listings are sorted for any insertion order
    #[test]
    fn prop_results_are_sorted(entries in entries_strategy(), prefix in term_strategy()) {
        let index = build_index(&entries);
        for results in [index.all_entries(), index.prefix_search(&prefix)] {
            prop_assert!(results.windows(2).all(|w| w[0].term <= w[1].term));
        }
    }

    // Property: an empty prefix lists everything
    #[test]
    fn prop_empty_prefix_equals_all_entries(entries in entries_strategy()) {
        let index = build_index(&entries);
        prop_assert_eq!(index.prefix_search(""), index.all_entries());
    }
}
