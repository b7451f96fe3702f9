//! Solves Wordle-style puzzles by narrowing down a trie of five-letter words.
//!
//! Each guess is scored with [`get_result_for_guess`], and the resulting `g`/`y`/`b` feedback is
//! used to prune every inconsistent word from a [`Trie`]. The alphabetically-first word left in
//! the trie becomes the next guess.

mod data;
mod engine;
mod restrictions;
mod results;
mod trie;

pub use data::WordBank;
pub use engine::*;
pub use restrictions::WordRestrictions;
pub use results::*;
pub use trie::FilterStats;
pub use trie::Trie;
pub use trie::TrieNode;
