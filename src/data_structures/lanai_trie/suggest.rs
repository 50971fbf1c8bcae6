//! Suffix enumeration for autocomplete suggestions.
//!
//! The walk is an explicit-stack pre-order DFS over child slots in index
//! order. A single suffix buffer is shared across the walk: a letter is
//! pushed when a child frame is entered and popped when that frame is
//! exhausted. The buffer and the result list are locals, so nothing
//! survives between calls.

use super::node::{letter_at, Node, ALPHABET_SIZE};

/// Collects the suffix of every end-of-word node strictly below `start`,
/// in alphabetical pre-order.
///
/// `start`'s own end-of-word flag is not examined, so the empty suffix is
/// never produced.
pub fn enumerate_suffixes(start: &Node) -> Vec<String> {
    let mut suffixes = Vec::new();
    let mut suffix = String::new();

    // Each frame holds a node and the next child slot to examine.
    let mut stack: Vec<(&Node, usize)> = vec![(start, 0)];

    while let Some(frame) = stack.last_mut() {
        let node = frame.0;
        let next = (frame.1..ALPHABET_SIZE)
            .find_map(|index| node.children[index].as_deref().map(|child| (index, child)));

        match next {
            Some((index, child)) => {
                frame.1 = index + 1;
                suffix.push(letter_at(index));
                if child.is_end_of_word {
                    suffixes.push(suffix.clone());
                }
                stack.push((child, 0));
            }
            None => {
                stack.pop();
                // The start frame contributed no letter; popping an empty buffer is a no-op.
                suffix.pop();
            }
        }
    }

    suffixes
}

/// Enumerates the suffixes below `start` ordered by length.
///
/// The sort is stable, so suffixes of equal length keep their alphabetical
/// traversal order.
pub fn give_suggestions(start: &Node) -> Vec<String> {
    let mut suffixes = enumerate_suffixes(start);
    suffixes.sort_by_key(String::len);
    suffixes
}
