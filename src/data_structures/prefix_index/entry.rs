//! Result types returned by the prefix index.

use std::fmt;

use serde::Serialize;

/// A stored term paired with its description.
///
/// Entries are produced by prefix enumeration; they are snapshots and do not
/// borrow from the index.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Entry {
    /// The full term, reconstructed from the path in the index
    pub term: String,

    /// The description stored for the term
    pub description: String,
}

impl Entry {
    /// Creates a new entry.
    pub fn new<T, D>(term: T, description: D) -> Self
    where
        T: Into<String>,
        D: Into<String>,
    {
        Self {
            term: term.into(),
            description: description.into(),
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.term, self.description)
    }
}

/// Outcome of inserting a term into the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The term was not stored before and has been added.
    Created,

    /// The term already existed; its description was overwritten.
    Updated,
}

impl InsertOutcome {
    /// Returns `true` if the insert added a new term.
    pub fn is_created(self) -> bool {
        matches!(self, InsertOutcome::Created)
    }
}
