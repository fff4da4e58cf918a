//! Cross-layer integration tests for argspec
//!
//! Tests that verify correct interaction between multiple crates.

mod concurrency;
