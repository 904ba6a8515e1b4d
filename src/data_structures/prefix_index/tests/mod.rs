//! Unit and property-based tests for the prefix index.

mod property_tests;
mod unit_tests;
