//! Node implementation for the prefix index.
//!
//! Each node owns its children outright, so the index is a plain tree:
//! no sharing, no cycles, and every node is dropped with its parent.

use fnv::FnvHashMap;

/// A node in the prefix index.
///
/// Each node represents one byte along the path of one or more terms. A node
/// that ends a stored term carries that term's description.
#[derive(Debug, Default)]
pub struct TrieNode {
    /// Map of bytes to child nodes
    pub children: FnvHashMap<u8, TrieNode>,

    /// Description of the term ending here, `None` if no term ends here
    pub description: Option<String>,
}

impl TrieNode {
    /// Whether the path to this node spells a stored term.
    pub fn is_terminal(&self) -> bool {
        self.description.is_some()
    }

    /// Number of nodes in the subtree rooted here, this node included.
    pub fn subtree_size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.values());
        }
        count
    }
}

impl Drop for TrieNode {
    // Tree depth equals term length, so children are freed from a heap stack
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode> = self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}
