//! Error types for the Lanai Trie.
//!
//! Only the strict insertion API surfaces these; the permissive operations
//! turn invalid input into a no-op or an empty result.

/// Errors that can occur in Lanai Trie operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LanaiTrieError {
    /// Error when an empty word is provided.
    #[error("Empty word not allowed")]
    EmptyInput,

    /// Error when a word contains a character outside `a`-`z` after case folding.
    #[error("Invalid character '{0}': only the letters a-z are supported")]
    InvalidCharacter(char),
}
