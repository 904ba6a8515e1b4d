//! Data structures for the slang dictionary.
//!
//! This module contains the in-memory index the dictionary is built on.

pub mod prefix_index;

// Re-export common data structures
pub use prefix_index::{Entry, InsertOutcome, PrefixIndex};
