//! Integration tests for the Lanai Trie and the typing session.
//! Exercises the public library API the way a front end would.

use std::sync::{Arc, Barrier};
use std::thread;

use olelo_dictionary_lib::config::dictionary::DictionaryConfig;
use olelo_dictionary_lib::data_structures::lanai_trie::{LanaiTrie, LanaiTrieError, SharedTrie};
use olelo_dictionary_lib::session::{Keystroke, TypingSession};
use olelo_dictionary_lib::wordlist;
use test_case::test_case;

fn seeded() -> LanaiTrie {
    wordlist::build_dictionary(&DictionaryConfig::default()).unwrap()
}

#[test_case("tha", &["than", "that"] ; "two equal length completions")]
#[test_case("thi", &["this", "thief"] ; "length before alphabet")]
#[test_case("THE", &["then", "their", "there"] ; "uppercase prefix folds")]
#[test_case("abc", &[] ; "complete word without extensions")]
#[test_case("xyz", &[] ; "unknown prefix")]
#[test_case("", &[] ; "empty prefix")]
#[test_case("th3", &[] ; "non alphabetic prefix")]
fn test_seeded_suggestions(prefix: &str, expected: &[&str]) {
    assert_eq!(seeded().suggest(prefix), expected);
}

#[test]
fn test_case_insensitive_workflow() {
    let mut trie = LanaiTrie::new();
    trie.insert("Abc");

    let lower = trie.lookup("abc").expect("lowercase lookup");
    let upper = trie.lookup("ABC").expect("uppercase lookup");
    assert!(lower.is_end_of_word());
    assert!(std::ptr::eq(lower, upper));
    assert_eq!(lower.value(), Some('c'));
}

#[test]
fn test_invalid_insert_then_lookup() {
    let mut trie = seeded();
    trie.insert("a1b");
    assert!(trie.lookup("a1b").is_none());
    assert_eq!(trie.len(), 9);
    assert_eq!(
        trie.try_insert("a1b"),
        Err(LanaiTrieError::InvalidCharacter('1'))
    );
}

#[test]
fn test_session_drives_suggestions() {
    let trie = seeded();
    let mut session = TypingSession::new();

    for keysym in ["t", "h", "e", "BackSpace", "a"] {
        session.record(Keystroke::parse(keysym));
    }

    assert_eq!(session.text(), "tha");
    assert_eq!(session.suggestions(&trie), vec!["than", "that"]);
}

#[test]
fn test_shared_trie_readers_and_writer() {
    let shared = SharedTrie::new(seeded());
    let barrier = Arc::new(Barrier::new(3));

    let writer = {
        let shared = shared.clone();
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            barrier.wait();
            for word in ["thane", "thaw", "thatch"] {
                shared.insert(word);
            }
        })
    };

    let readers: Vec<_> = (0..2)
        .map(|_| {
            let shared = shared.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..100 {
                    let suggestions = shared.suggest("tha");
                    // Whatever was visible, it is always correctly ordered
                    assert!(suggestions
                        .windows(2)
                        .all(|p| p[0].len() < p[1].len() || (p[0].len() == p[1].len() && p[0] < p[1])));
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }

    assert_eq!(
        shared.suggest("tha"),
        vec!["than", "that", "thaw", "thane", "thatch"]
    );
}
