//! Olelo Dictionary Library
//!
//! This library contains the core components of the Olelo dictionary:
//! the prefix-tree word store, the typing session used by interactive front
//! ends, configuration loading, and error handling.
//! The library is designed to be used by the binary crate, but can also
//! be used as a dependency by other projects.
//!
//! # Architecture
//!
//! The dictionary is designed with the following principles in mind:
//! - Strict component boundaries
//! - Explicitly owned state, passed to whoever needs it
//! - Total operations on the public trie API
//! - Comprehensive error handling and propagation at the edges

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod session;
pub mod wordlist;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the Olelo dictionary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
