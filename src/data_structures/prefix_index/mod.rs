//! Prefix Index Implementation
//!
//! This module provides a trie that stores slang terms byte by byte together
//! with their descriptions. It supports update-in-place inserts, exact
//! lookups and sorted prefix enumeration.

mod entry;
mod node;

#[cfg(test)]
mod tests;

pub use entry::{Entry, InsertOutcome};
use node::TrieNode;

/// Prefix Index is a trie keyed by single bytes.
///
/// Key features:
/// * Terms sharing a prefix share the nodes for that prefix
/// * Re-inserting a term overwrites its description instead of duplicating it
/// * Prefix enumeration always returns entries sorted by term
///
/// The index never validates its input. Callers are expected to pass
/// non-empty terms; what counts as a well-formed term or description is
/// decided by the session layer.
#[derive(Debug, Default)]
pub struct PrefixIndex {
    /// The root node of the trie
    root: TrieNode,

    /// Number of stored terms
    len: usize,
}

impl PrefixIndex {
    /// Creates a new empty `PrefixIndex`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a term with its description.
    ///
    /// Missing nodes along the path of `term` are created. If the term is
    /// already stored its description is replaced.
    ///
    /// # Returns
    ///
    /// * `InsertOutcome::Created` - if the term was not stored before.
    /// * `InsertOutcome::Updated` - if an existing description was overwritten.
    pub fn insert<D>(&mut self, term: &str, description: D) -> InsertOutcome
    where
        D: Into<String>,
    {
        let mut node = &mut self.root;
        for byte in term.bytes() {
            node = node.children.entry(byte).or_default();
        }

        match node.description.replace(description.into()) {
            Some(_) => InsertOutcome::Updated,
            None => {
                self.len += 1;
                InsertOutcome::Created
            }
        }
    }

    /// Looks up the description stored for `term`.
    ///
    /// Returns `None` when the term was never inserted, including when
    /// `term` is only a prefix of stored terms.
    pub fn search(&self, term: &str) -> Option<&str> {
        self.find_node(term)?.description.as_deref()
    }

    /// Checks if a term is stored in the index.
    pub fn contains(&self, term: &str) -> bool {
        self.find_node(term).is_some_and(TrieNode::is_terminal)
    }

    /// Finds all entries whose term starts with `prefix`.
    ///
    /// The node reached by `prefix` is included, so a stored term equal to
    /// the prefix is part of the result. The result is sorted by term; an
    /// unknown prefix yields an empty vector.
    pub fn prefix_search(&self, prefix: &str) -> Vec<Entry> {
        let mut result = Vec::new();
        let Some(start) = self.find_node(prefix) else {
            return result;
        };

        let mut path = prefix.as_bytes().to_vec();
        collect_entries(start, &mut path, &mut result);

        // Child maps are unordered
        result.sort_unstable_by(|a, b| a.term.cmp(&b.term));
        result
    }

    /// Returns every stored entry sorted by term.
    pub fn all_entries(&self) -> Vec<Entry> {
        self.prefix_search("")
    }

    /// Returns the number of stored terms.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if the index holds no terms.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of allocated nodes, the root included.
    ///
    /// This walks the whole tree, so it's an O(n) operation.
    pub fn node_count(&self) -> usize {
        self.root.subtree_size()
    }

    /// Walks from the root along `key`, stopping at the first missing child.
    fn find_node(&self, key: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for byte in key.bytes() {
            node = node.children.get(&byte)?;
        }
        Some(node)
    }
}

/// Pushes an entry for every terminal node in the subtree rooted at `start`.
///
/// `path` holds the bytes from the root to `start`. Depth equals term
/// length, so the walk keeps its own stack. Each frame records the path
/// length of its parent and the byte leading to the node, which lets all
/// frames share one path buffer.
fn collect_entries(start: &TrieNode, path: &mut Vec<u8>, result: &mut Vec<Entry>) {
    let mut stack: Vec<(usize, Option<u8>, &TrieNode)> = vec![(path.len(), None, start)];

    while let Some((parent_len, byte, node)) = stack.pop() {
        path.truncate(parent_len);
        path.extend(byte);

        if let Some(description) = &node.description {
            // Terminal paths are always the bytes of an inserted &str
            let term = String::from_utf8_lossy(path).into_owned();
            result.push(Entry::new(term, description.as_str()));
        }

        let len = path.len();
        stack.extend(
            node.children
                .iter()
                .map(|(&child_byte, child)| (len, Some(child_byte), child)),
        );
    }
}
