//! Building a dictionary from configured word sources.

use std::io::BufRead;
use std::path::Path;

use tracing::{info, warn};

use crate::config::dictionary::DictionaryConfig;
use crate::data_structures::LanaiTrie;
use crate::error::OleloResult;

/// Inserts every whitespace-separated word from `reader`.
///
/// Invalid words are skipped. Returns how many words were read.
pub fn load_words<R: BufRead>(trie: &mut LanaiTrie, reader: R) -> OleloResult<usize> {
    let mut read = 0;
    for line in reader.lines() {
        for word in line?.split_whitespace() {
            trie.insert(word);
            read += 1;
        }
    }
    Ok(read)
}

/// Inserts the words of the file at `path`.
pub fn load_word_file(trie: &mut LanaiTrie, path: &Path) -> OleloResult<usize> {
    let file = std::fs::File::open(path)?;
    load_words(trie, std::io::BufReader::new(file))
}

/// Builds the dictionary described by `config`: seed words first, then the word file.
pub fn build_dictionary(config: &DictionaryConfig) -> OleloResult<LanaiTrie> {
    let mut trie: LanaiTrie = config.seed_words.iter().collect();

    if let Some(path) = &config.word_file {
        let read = load_word_file(&mut trie, path)?;
        if read == 0 {
            warn!(path = %path.display(), "Word file contained no words");
        }
    }

    info!(words = trie.len(), "Dictionary seeded");
    Ok(trie)
}
