//! Thread-safe handle around a [`LanaiTrie`].
//!
//! Every operation takes one exclusive lock for its whole duration, so a
//! suggestion walk never observes a half-applied insertion.

use std::sync::Arc;

use parking_lot::Mutex;

use super::{LanaiTrie, LanaiTrieResult};

/// Cloneable, lock-protected handle to a shared [`LanaiTrie`].
#[derive(Debug, Clone, Default)]
pub struct SharedTrie {
    inner: Arc<Mutex<LanaiTrie>>,
}

impl SharedTrie {
    /// Wraps an existing trie.
    pub fn new(trie: LanaiTrie) -> Self {
        Self {
            inner: Arc::new(Mutex::new(trie)),
        }
    }

    /// See [`LanaiTrie::insert`].
    pub fn insert<W: AsRef<str>>(&self, word: W) {
        self.inner.lock().insert(word);
    }

    /// See [`LanaiTrie::try_insert`].
    pub fn try_insert<W: AsRef<str>>(&self, word: W) -> LanaiTrieResult<bool> {
        self.inner.lock().try_insert(word)
    }

    /// Whether `word` is a path in the trie.
    ///
    /// Node references cannot outlive the lock, so this reports presence
    /// instead of returning the node.
    pub fn has_prefix<W: AsRef<str>>(&self, word: W) -> bool {
        self.inner.lock().lookup(word).is_some()
    }

    /// See [`LanaiTrie::contains_word`].
    pub fn contains_word<W: AsRef<str>>(&self, word: W) -> bool {
        self.inner.lock().contains_word(word)
    }

    /// See [`LanaiTrie::suggest`].
    pub fn suggest<P: AsRef<str>>(&self, prefix: P) -> Vec<String> {
        self.inner.lock().suggest(prefix)
    }

    /// See [`LanaiTrie::len`].
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// See [`LanaiTrie::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Runs `f` with shared access to the trie while holding the lock.
    pub fn with_trie<R>(&self, f: impl FnOnce(&LanaiTrie) -> R) -> R {
        f(&*self.inner.lock())
    }
}

impl From<LanaiTrie> for SharedTrie {
    fn from(trie: LanaiTrie) -> Self {
        Self::new(trie)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    /// Tests concurrent insertion and suggestion from several threads.
    #[test]
    fn test_shared_trie_concurrency() {
        const THREAD_COUNT: usize = 8;

        let trie = SharedTrie::default();
        let start_barrier = Arc::new(std::sync::Barrier::new(THREAD_COUNT));

        let handles: Vec<_> = (0..THREAD_COUNT)
            .map(|thread_id| {
                let trie = trie.clone();
                let barrier = Arc::clone(&start_barrier);
                thread::spawn(move || {
                    barrier.wait();
                    // Each thread owns one second letter under the shared 'w' prefix.
                    let second = (b'a' + thread_id as u8) as char;
                    for third in 'a'..='z' {
                        trie.insert(format!("w{second}{third}"));
                        let _ = trie.suggest("w");
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().expect("worker thread panicked");
        }

        assert_eq!(trie.len(), THREAD_COUNT * 26);
        assert_eq!(trie.suggest("wa").len(), 26);
        assert!(trie.has_prefix("wh"));
        assert!(trie.contains_word("wha"));
        assert!(!trie.has_prefix("wz"));
    }

    #[test]
    fn test_with_trie_reads_under_lock() {
        let trie = SharedTrie::new(["one", "two"].into_iter().collect());
        assert_eq!(trie.try_insert("three"), Ok(true));
        let words = trie.with_trie(LanaiTrie::words);
        assert_eq!(words, vec!["one", "three", "two"]);
        assert!(!trie.is_empty());
    }
}
