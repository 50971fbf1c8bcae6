//! Typing session for interactive autocomplete front ends.
//!
//! A front end forwards raw key events to [`TypingSession::record`] and
//! asks for [`TypingSession::suggestions`] whenever it redraws its list.
//! The session only buffers text; the dictionary is borrowed per call.

use crate::data_structures::LanaiTrie;
use tracing::trace;

/// Key symbol name that deletes the last typed letter.
pub const BACKSPACE_KEYSYM: &str = "BackSpace";

/// A key event as seen by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keystroke {
    /// An alphabetic character to append
    Letter(char),
    /// Delete the last character
    Backspace,
    /// Any other key (modifiers, digits, punctuation)
    Ignored,
}

impl Keystroke {
    /// Classifies a key symbol name such as `"a"`, `"T"` or `"BackSpace"`.
    pub fn parse(keysym: &str) -> Self {
        let mut chars = keysym.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => Self::Letter(c),
            _ if keysym == BACKSPACE_KEYSYM => Self::Backspace,
            _ => Self::Ignored,
        }
    }
}

/// The text typed so far and the suggestion limit applied to it.
#[derive(Debug, Clone, Default)]
pub struct TypingSession {
    text: String,
    max_suggestions: Option<usize>,
}

impl TypingSession {
    /// Creates an empty session with no suggestion limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the number of suggestions returned per request.
    pub fn with_max_suggestions(mut self, max_suggestions: Option<usize>) -> Self {
        self.max_suggestions = max_suggestions;
        self
    }

    /// Applies a keystroke and returns the current text.
    pub fn record(&mut self, keystroke: Keystroke) -> &str {
        match keystroke {
            Keystroke::Letter(c) => self.text.push(c),
            Keystroke::Backspace => {
                self.text.pop();
            }
            Keystroke::Ignored => {}
        }
        trace!(?keystroke, text = %self.text, "Recorded keystroke");
        &self.text
    }

    /// The text typed so far, as entered (not case-folded).
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Discards the typed text.
    pub fn reset(&mut self) {
        self.text.clear();
    }

    /// Suggestions for the current text, truncated to the configured limit.
    pub fn suggestions(&self, trie: &LanaiTrie) -> Vec<String> {
        let mut suggestions = trie.suggest(&self.text);
        if let Some(max) = self.max_suggestions {
            suggestions.truncate(max);
        }
        suggestions
    }
}
