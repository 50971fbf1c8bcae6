//! Data structures for the Olelo dictionary.
//!
//! This module contains the prefix tree that backs word lookup and
//! autocomplete suggestions.
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Fixed-size, index-addressed child storage
//! - No state shared between independent calls

pub mod lanai_trie;

// Re-export common data structures
pub use lanai_trie::{LanaiTrie, LanaiTrieError, LanaiTrieResult, Node, SharedTrie};
