//! Input rejection errors.
//!
//! Raised by the session's input rules when a term or description typed at
//! the prompt does not meet the dictionary's requirements. They are shown to
//! the user and followed by a new prompt; they never end a session.

use thiserror::Error;

/// Reasons a typed value is refused before it reaches the index.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The term is shorter than the configured minimum.
    #[error("Must be more than {} characters", .min.saturating_sub(1))]
    TermTooShort {
        /// Minimum accepted length in bytes
        min: usize,
    },

    /// The term contains whitespace.
    #[error("Must contain no space")]
    TermHasWhitespace,

    /// The description has fewer words than the configured minimum.
    #[error("Must contain at least {min} words")]
    DescriptionTooShort {
        /// Minimum accepted number of words
        min: usize,
    },
}
