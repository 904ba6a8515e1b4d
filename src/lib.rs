//! Slang Dictionary Library
//!
//! This library contains the prefix index that stores slang words and their
//! descriptions, together with the interactive session, configuration and
//! error types used by the `slang_dict` binary.
//!
//! # Architecture
//!
//! - `data_structures::prefix_index` is the in-memory trie. It performs no
//!   validation and has no failure modes.
//! - `session` is the menu loop. It validates user input, calls the index
//!   and renders results.
//! - `config` and `error` are shared by the session and the binary.

pub mod config;
pub mod data_structures;
pub mod error;
pub mod session;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the slang dictionary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
