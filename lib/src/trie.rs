use crate::restrictions::WordRestrictions;
use crate::results::GuessResult;
use crate::results::WordleError;
use crate::results::WORD_LENGTH;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;
use std::io::BufRead;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Tallies the work done while filtering.
///
/// This is owned by the caller, so that several filters can accumulate into one tally.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FilterStats {
    /// The number of filters that were applied.
    pub filters_applied: u32,
    /// The number of candidate words that were checked against a filter.
    pub words_checked: u64,
    /// The number of candidate words that were removed by a filter.
    pub words_removed: u64,
}

/// One letter location shared by a set of words.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrieNode {
    children: BTreeMap<char, TrieNode>,
}

impl TrieNode {
    /// Creates a node with no children.
    pub fn new() -> TrieNode {
        TrieNode {
            children: BTreeMap::new(),
        }
    }

    /// The children of this node, keyed by their letter.
    pub fn children(&self) -> &BTreeMap<char, TrieNode> {
        &self.children
    }

    fn count_leaves(&self, depth: usize) -> usize {
        if depth == WORD_LENGTH {
            return 1;
        }
        self.children
            .values()
            .map(|child| child.count_leaves(depth + 1))
            .sum()
    }

    fn collect_words(&self, depth: usize, prefix: &mut String, words: &mut Vec<String>) {
        if depth == WORD_LENGTH {
            words.push(prefix.clone());
            return;
        }
        for (letter, child) in &self.children {
            prefix.push(*letter);
            child.collect_words(depth + 1, prefix, words);
            prefix.pop();
        }
    }

    /// Removes every word below this node that does not satisfy the restrictions.
    ///
    /// Returns `true` iff any word remains below this node.
    fn retain_matching(
        &mut self,
        depth: usize,
        prefix: &mut String,
        restrictions: &WordRestrictions,
        stats: &mut FilterStats,
    ) -> bool {
        if depth == WORD_LENGTH {
            stats.words_checked += 1;
            if restrictions.has_required_letters(prefix) {
                return true;
            }
            stats.words_removed += 1;
            return false;
        }
        self.children.retain(|letter, child| {
            if !restrictions.allows_letter_at(*letter, depth) {
                // Every word below this child fails on the same letter.
                let num_words = child.count_leaves(depth + 1) as u64;
                stats.words_checked += num_words;
                stats.words_removed += num_words;
                return false;
            }
            prefix.push(*letter);
            let keep = child.retain_matching(depth + 1, prefix, restrictions, stats);
            prefix.pop();
            keep
        });
        !self.children.is_empty()
    }
}

/// A trie of five-letter words that can be narrowed down with Wordle feedback.
///
/// Every word occupies one full path from the root to a node at depth [`WORD_LENGTH`]. Children
/// are kept in letter order, so traversals are sorted and [`Trie::first_word`] is the
/// alphabetically first word.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    /// Creates an empty Trie.
    pub fn new() -> Trie {
        Trie {
            root: TrieNode::new(),
        }
    }

    /// Constructs a trie from whitespace-separated words read from the given reader.
    ///
    /// Every word is offered to [`Trie::insert`], so words of the wrong length are skipped.
    pub fn from_reader<R: BufRead>(word_reader: R) -> Result<Trie, WordleError> {
        let mut trie = Trie::new();
        for line in word_reader.lines() {
            for word in line?.split_whitespace() {
                trie.insert(word);
            }
        }
        Ok(trie)
    }

    /// The node representing the empty prefix.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Inserts the given word into the trie.
    ///
    /// Returns `true` if the word was added, or `false` if it was already present or does not
    /// have exactly [`WORD_LENGTH`] letters.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.chars().count() != WORD_LENGTH {
            debug!(word, "rejected word with the wrong length");
            return false;
        }
        let mut node = &mut self.root;
        let mut added = false;
        for letter in word.chars() {
            node = match node.children.entry(letter) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => {
                    added = true;
                    entry.insert(TrieNode::new())
                }
            };
        }
        added
    }

    /// Returns `true` iff the given word is in the trie.
    pub fn contains(&self, word: &str) -> bool {
        if word.chars().count() != WORD_LENGTH {
            return false;
        }
        let mut node = &self.root;
        for letter in word.chars() {
            match node.children.get(&letter) {
                Some(child) => node = child,
                None => return false,
            }
        }
        true
    }

    /// Returns the number of words in the trie.
    pub fn size(&self) -> usize {
        self.root.count_leaves(0)
    }

    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// Returns the alphabetically first word, or `None` if the trie is empty.
    pub fn first_word(&self) -> Option<String> {
        let mut word = String::with_capacity(WORD_LENGTH);
        let mut node = &self.root;
        for _ in 0..WORD_LENGTH {
            let (letter, child) = node.children.iter().next()?;
            word.push(*letter);
            node = child;
        }
        Some(word)
    }

    /// Returns every word in the trie, in alphabetical order.
    pub fn all_words(&self) -> Vec<String> {
        let mut words = Vec::new();
        let mut prefix = String::with_capacity(WORD_LENGTH);
        self.root.collect_words(0, &mut prefix, &mut words);
        words
    }

    /// Removes every word that is inconsistent with the given guess and `g`/`y`/`b` pattern.
    ///
    /// Returns `false` without modifying the trie if the guess or pattern is invalid.
    pub fn filter(&mut self, guess: &str, pattern: &str) -> bool {
        self.filter_with_stats(guess, pattern, &mut FilterStats::default())
    }

    /// Like [`Trie::filter`], but also adds the work done to `stats`.
    pub fn filter_with_stats(
        &mut self,
        guess: &str,
        pattern: &str,
        stats: &mut FilterStats,
    ) -> bool {
        let result = match GuessResult::from_pattern(guess, pattern) {
            Ok(result) => result,
            Err(error) => {
                debug!(guess, pattern, %error, "rejected filter");
                return false;
            }
        };
        self.filter_by_result(&result, stats).is_ok()
    }

    /// Removes every word that is inconsistent with the given guess result.
    pub fn filter_by_result(
        &mut self,
        result: &GuessResult,
        stats: &mut FilterStats,
    ) -> Result<(), WordleError> {
        let restrictions = WordRestrictions::from_result(result)?;
        self.retain(&restrictions, stats);
        Ok(())
    }

    /// Removes every word that does not satisfy the given restrictions, pruning any branch that
    /// is left without words.
    pub fn retain(&mut self, restrictions: &WordRestrictions, stats: &mut FilterStats) {
        let removed_before = stats.words_removed;
        let mut prefix = String::with_capacity(WORD_LENGTH);
        self.root.retain_matching(0, &mut prefix, restrictions, stats);
        stats.filters_applied += 1;
        debug!(
            removed = stats.words_removed - removed_before,
            remaining = self.size(),
            "filtered trie"
        );
    }

    /// Prints every word in the trie to stdout, one per line.
    pub fn print(&self) {
        print!("{}", self);
    }
}

impl fmt::Display for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in self.all_words() {
            writeln!(f, "{}", word)?;
        }
        Ok(())
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        for word in words {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(words);
        trie
    }
}
