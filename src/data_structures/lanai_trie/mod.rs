//! Lanai Trie Implementation
//!
//! This module provides a 26-ary prefix tree over the lowercase ASCII
//! alphabet, used as the word dictionary behind autocomplete. Words are
//! case-folded on the way in; anything containing a non-letter is rejected.
//!
//! # Example
//!
//! ```
//! use olelo_dictionary_lib::data_structures::lanai_trie::LanaiTrie;
//!
//! let mut trie = LanaiTrie::new();
//! trie.insert("that");
//! trie.insert("than");
//! trie.insert("Then");
//!
//! assert!(trie.lookup("THE").is_some());
//! assert_eq!(trie.suggest("tha"), vec!["than", "that"]);
//! ```

mod error;
mod node;
mod shared;
mod suggest;

pub use error::LanaiTrieError;
pub use node::{index_of, Node, ALPHABET_SIZE};
pub use shared::SharedTrie;
pub use suggest::{enumerate_suffixes, give_suggestions};

use tracing::debug;

/// Result type for Lanai Trie operations
pub type LanaiTrieResult<T> = Result<T, LanaiTrieError>;

/// Validates `word` and converts it into the slot indices along its path.
fn letter_path(word: &str) -> LanaiTrieResult<Vec<usize>> {
    if word.is_empty() {
        return Err(LanaiTrieError::EmptyInput);
    }

    word.chars().map(index_of).collect()
}

/// Lanai Trie is the autocomplete dictionary: a strict tree of [`Node`]s
/// anchored at a value-less root.
///
/// Key features:
/// * Case-insensitive insertion and lookup over `a`-`z`
/// * O(1) child access through fixed 26-slot arrays
/// * Suggestions ordered by length, alphabetical within equal lengths
#[derive(Debug, Default)]
pub struct LanaiTrie {
    /// The root node of the trie
    root: Node,

    /// Number of distinct complete words stored
    word_count: usize,
}

impl LanaiTrie {
    /// Creates a new empty `LanaiTrie`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the root anchor node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Inserts a word, silently ignoring invalid input.
    ///
    /// Empty words and words containing anything other than ASCII letters
    /// leave the trie untouched. Re-inserting a stored word is a no-op.
    pub fn insert<W: AsRef<str>>(&mut self, word: W) {
        let word = word.as_ref();
        if let Err(error) = self.try_insert(word) {
            debug!(word, %error, "Ignoring invalid dictionary word");
        }
    }

    /// Inserts a word, reporting invalid input.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The word was newly stored.
    /// * `Ok(false)` - The word was already stored.
    /// * `Err(LanaiTrieError)` - The word is empty or contains a non-letter.
    pub fn try_insert<W: AsRef<str>>(&mut self, word: W) -> LanaiTrieResult<bool> {
        let path = letter_path(word.as_ref())?;

        let mut node = &mut self.root;
        for index in path {
            node = node.child_or_insert(index);
        }

        let is_new = !node.is_end_of_word;
        node.is_end_of_word = true;
        if is_new {
            self.word_count += 1;
        }

        Ok(is_new)
    }

    /// Follows `word` from the root and returns the node it ends on.
    ///
    /// This is a prefix match: the returned node need not be end-of-word.
    /// Returns `None` for empty or invalid input, or when the path breaks.
    pub fn lookup<W: AsRef<str>>(&self, word: W) -> Option<&Node> {
        let path = letter_path(word.as_ref()).ok()?;

        let mut node = &self.root;
        for index in path {
            node = node.children[index].as_deref()?;
        }
        Some(node)
    }

    /// Checks whether `word` was inserted as a complete word.
    pub fn contains_word<W: AsRef<str>>(&self, word: W) -> bool {
        self.lookup(word).is_some_and(Node::is_end_of_word)
    }

    /// Returns every completion of `prefix`.
    ///
    /// Each suggestion is the case-folded prefix followed by a non-empty
    /// suffix, so the prefix itself is never suggested even when it is a
    /// stored word. Results are ordered by length, alphabetically within
    /// equal lengths. Invalid or unknown prefixes yield an empty list.
    pub fn suggest<P: AsRef<str>>(&self, prefix: P) -> Vec<String> {
        let prefix = prefix.as_ref();
        let Some(node) = self.lookup(prefix) else {
            return Vec::new();
        };

        let prefix = prefix.to_ascii_lowercase();
        give_suggestions(node)
            .into_iter()
            .map(|suffix| format!("{prefix}{suffix}"))
            .collect()
    }

    /// Returns all stored words in alphabetical order.
    pub fn words(&self) -> Vec<String> {
        enumerate_suffixes(&self.root)
    }

    /// Returns the number of stored words.
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Checks if the trie holds no words.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Removes every word from the trie.
    pub fn clear(&mut self) {
        self.root = Node::root();
        self.word_count = 0;
    }
}

impl<S: AsRef<str>> Extend<S> for LanaiTrie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        for word in words {
            self.insert(word);
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for LanaiTrie {
    fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
        let mut trie = Self::new();
        trie.extend(words);
        trie
    }
}
