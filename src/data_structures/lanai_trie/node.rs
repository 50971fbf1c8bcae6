//! Node implementation for the Lanai Trie.
//!
//! Each node owns a fixed array of 26 child slots, one per lowercase ASCII
//! letter, so child access is a single index operation.

use super::{LanaiTrieError, LanaiTrieResult};

/// Number of symbols in the trie alphabet (`a` through `z`).
pub const ALPHABET_SIZE: usize = 26;

/// Maps a letter to its child slot index.
///
/// The letter is case-folded first, so `'A'` and `'a'` both map to `0`.
/// Fails with [`LanaiTrieError::InvalidCharacter`] for anything outside the
/// 26-letter ASCII alphabet.
pub fn index_of(letter: char) -> LanaiTrieResult<usize> {
    let folded = letter.to_ascii_lowercase();
    if folded.is_ascii_lowercase() {
        Ok((folded as u8 - b'a') as usize)
    } else {
        Err(LanaiTrieError::InvalidCharacter(letter))
    }
}

/// Inverse of [`index_of`] for a valid slot index.
pub(crate) fn letter_at(index: usize) -> char {
    debug_assert!(index < ALPHABET_SIZE);
    (b'a' + index as u8) as char
}

/// A vertex in the Lanai Trie.
///
/// The path of letters from the root to a node spells a prefix; the node is
/// marked end-of-word when that prefix was inserted as a complete word.
#[derive(Debug)]
pub struct Node {
    /// The letter used to reach this node from its parent (`None` at the root)
    pub(crate) value: Option<char>,

    /// One optional owned child per alphabet letter, indexed by [`index_of`]
    pub(crate) children: [Option<Box<Node>>; ALPHABET_SIZE],

    /// Whether the path to this node spells an inserted word
    pub(crate) is_end_of_word: bool,
}

impl Node {
    /// Creates the value-less anchor node used as the trie root.
    pub fn root() -> Self {
        Self {
            value: None,
            children: [const { None }; ALPHABET_SIZE],
            is_end_of_word: false,
        }
    }

    /// Creates a node labelled with `letter`.
    pub(crate) fn with_value(letter: char) -> Self {
        Self {
            value: Some(letter),
            ..Self::root()
        }
    }

    /// The letter this node was indexed by, or `None` for the root.
    pub fn value(&self) -> Option<char> {
        self.value
    }

    /// Whether the path to this node spells a stored word.
    pub fn is_end_of_word(&self) -> bool {
        self.is_end_of_word
    }

    /// Returns the child reached by `letter`, if any.
    pub fn child(&self, letter: char) -> Option<&Node> {
        let index = index_of(letter).ok()?;
        self.children[index].as_deref()
    }

    /// Iterates over occupied child slots in alphabetical order.
    pub fn children(&self) -> impl Iterator<Item = &Node> + '_ {
        self.children.iter().filter_map(|slot| slot.as_deref())
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }

    /// Returns the child at `index`, creating it when the slot is empty.
    pub(crate) fn child_or_insert(&mut self, index: usize) -> &mut Node {
        self.children[index].get_or_insert_with(|| Box::new(Node::with_value(letter_at(index))))
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::root()
    }
}
