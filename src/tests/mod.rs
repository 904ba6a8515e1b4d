//! Test modules for the slang dictionary.
//!
//! Cross-module tests live here: configuration loading, error types, input
//! rules and full menu sessions driven from in-memory input. Tests for the
//! prefix index itself sit next to it in `data_structures::prefix_index`.


pub use test_utils::{run_script, run_script_with, TestFixture};
