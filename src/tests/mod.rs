//! Test modules for the Olelo dictionary.
//!
//! This module contains crate-level testing infrastructure, including:
//! - Unit tests for configuration and error handling
//! - Property-based tests for the trie using proptest
//! - Test fixtures and utilities
//!
//! The test philosophy follows the project standards:
//! - Testing all error paths and edge cases
//! - Property-based testing for input validation


// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{invalid_word_strategy, word_strategy, TestFixture};
