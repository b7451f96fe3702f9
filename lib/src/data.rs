use crate::results::WordleError;
use crate::results::WORD_LENGTH;
use std::collections::HashSet;
use std::io::BufRead;
use std::ops::Deref;
use std::sync::Arc;

use tracing::debug;

/// Contains all the possible words for a linear-scan Wordle game.
///
/// Unlike [`crate::Trie`], the bank drops words of the wrong length while reading them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordBank {
    all_words: Vec<Arc<str>>,
}

impl WordBank {
    /// Constructs a new `WordBank` struct by reading words from the given reader.
    ///
    /// Words may be separated by any whitespace. Each word is converted to lower case, and words
    /// that do not have [`WORD_LENGTH`] letters are skipped.
    pub fn from_reader<R: BufRead>(word_reader: R) -> Result<Self, WordleError> {
        let mut words: Vec<String> = Vec::new();
        for line in word_reader.lines() {
            words.extend(line?.split_whitespace().map(str::to_string));
        }
        Ok(WordBank::from_iterator(words))
    }

    /// Constructs a new `WordBank` struct using the words from the given iterator.
    ///
    /// Each word is trimmed and converted to lower case. Empty words, words of the wrong length,
    /// and repeated words are skipped.
    pub fn from_iterator<S>(words: impl IntoIterator<Item = S>) -> Self
    where
        S: AsRef<str>,
    {
        let mut seen: HashSet<String> = HashSet::new();
        WordBank {
            all_words: words
                .into_iter()
                .filter_map(|word| {
                    let word = word.as_ref().trim().to_lowercase();
                    if word.is_empty() {
                        return None;
                    }
                    if word.chars().count() != WORD_LENGTH {
                        debug!(word = %word, "skipped word with the wrong length");
                        return None;
                    }
                    if !seen.insert(word.clone()) {
                        return None;
                    }
                    Some(Arc::from(word.as_str()))
                })
                .collect(),
        }
    }

    /// Returns the number of possible words.
    pub fn len(&self) -> usize {
        self.all_words.len()
    }

    /// Returns true iff this word bank is empty.
    pub fn is_empty(&self) -> bool {
        self.all_words.is_empty()
    }
}

impl Deref for WordBank {
    type Target = [Arc<str>];

    fn deref(&self) -> &Self::Target {
        &self.all_words
    }
}
