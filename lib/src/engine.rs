use crate::data::WordBank;
use crate::restrictions::WordRestrictions;
use crate::results::*;
use crate::trie::FilterStats;
use crate::trie::Trie;
use dyn_clone::DynClone;
use rayon::prelude::*;
use std::sync::Arc;
use tracing::debug;
use tracing::trace;

/// Guesses words in order to solve a single Wordle.
///
/// Guessers can be cloned through a `Box<dyn Guesser>`, so that one fully-loaded guesser can be
/// reused as the starting point for many games.
pub trait Guesser: DynClone + Send + Sync {
    /// Removes every candidate that is inconsistent with the given result.
    fn update(&mut self, result: &GuessResult) -> Result<(), WordleError>;

    /// Selects the next word to guess, or `None` if no candidates are left.
    fn select_next_guess(&self) -> Option<String>;

    /// Returns the number of words that could still be the objective.
    fn num_candidates(&self) -> usize;

    /// Returns the number of candidate words checked so far.
    fn words_checked(&self) -> u64;
}

dyn_clone::clone_trait_object!(Guesser);

/// Guesses the alphabetically-first word left in a [`Trie`].
#[derive(Clone, Debug)]
pub struct TrieGuesser {
    trie: Trie,
    stats: FilterStats,
}

impl TrieGuesser {
    pub fn new(trie: Trie) -> TrieGuesser {
        TrieGuesser {
            trie,
            stats: FilterStats::default(),
        }
    }

    /// The words that could still be the objective.
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn stats(&self) -> &FilterStats {
        &self.stats
    }
}

impl Guesser for TrieGuesser {
    fn update(&mut self, result: &GuessResult) -> Result<(), WordleError> {
        self.trie.filter_by_result(result, &mut self.stats)
    }

    fn select_next_guess(&self) -> Option<String> {
        self.trie.first_word()
    }

    fn num_candidates(&self) -> usize {
        self.trie.size()
    }

    fn words_checked(&self) -> u64 {
        self.stats.words_checked
    }
}

/// Guesses the first word left in a list, checking every word in the list after each guess.
#[derive(Clone, Debug)]
pub struct ListGuesser {
    possible_words: Vec<Arc<str>>,
    words_checked: u64,
}

impl ListGuesser {
    pub fn new(bank: &WordBank) -> ListGuesser {
        ListGuesser {
            possible_words: bank.to_vec(),
            words_checked: 0,
        }
    }

    /// The words that could still be the objective, in word bank order.
    pub fn possible_words(&self) -> &[Arc<str>] {
        &self.possible_words
    }
}

impl Guesser for ListGuesser {
    fn update(&mut self, result: &GuessResult) -> Result<(), WordleError> {
        let restrictions = WordRestrictions::from_result(result)?;
        self.words_checked += self.possible_words.len() as u64;
        self.possible_words
            .retain(|word| restrictions.is_satisfied_by(word));
        Ok(())
    }

    fn select_next_guess(&self) -> Option<String> {
        self.possible_words.first().map(|word| word.to_string())
    }

    fn num_candidates(&self) -> usize {
        self.possible_words.len()
    }

    fn words_checked(&self) -> u64 {
        self.words_checked
    }
}

/// Attempts to guess the given word within the maximum number of guesses.
///
/// The first guess is always `first_guess`. Each later guess comes from the guesser, after it has
/// been updated with the result of the previous guess.
pub fn play_game<G>(
    word_to_guess: &str,
    first_guess: &str,
    max_num_guesses: u32,
    guesser: &mut G,
) -> Result<GameResult, WordleError>
where
    G: Guesser + ?Sized,
{
    if word_to_guess.chars().count() != WORD_LENGTH || first_guess.chars().count() != WORD_LENGTH {
        return Err(WordleError::WordLength(WORD_LENGTH));
    }
    let mut guesses: Vec<Box<str>> = Vec::new();
    let mut guess = first_guess.to_string();
    for round in 1..=max_num_guesses {
        if round > 1 {
            match guesser.select_next_guess() {
                Some(next_guess) => guess = next_guess,
                None => {
                    debug!(word_to_guess, round, "ran out of candidates");
                    return Ok(GameResult::UnknownWord);
                }
            }
        }
        let result = get_result_for_guess(word_to_guess, &guess)?;
        trace!(round, guess = %guess, pattern = %result.pattern(), "scored guess");
        guesses.push(Box::from(guess.as_str()));

        if result.is_correct() {
            return Ok(GameResult::Success(GameStats {
                guesses,
                words_checked: guesser.words_checked(),
            }));
        }
        guesser.update(&result)?;
    }
    Ok(GameResult::Failure(GameStats {
        guesses,
        words_checked: guesser.words_checked(),
    }))
}

/// Plays one game for each target word, each with its own clone of `guesser`.
///
/// Games are played in parallel. The results are returned in the same order as the targets.
pub fn play_all_games<G, S>(
    targets: &[S],
    first_guess: &str,
    max_num_guesses: u32,
    guesser: &G,
) -> Vec<Result<GameResult, WordleError>>
where
    G: Guesser + ?Sized,
    S: AsRef<str> + Sync,
{
    targets
        .par_iter()
        .map(|target| {
            let mut game_guesser = dyn_clone::clone_box(guesser);
            play_game(target.as_ref(), first_guess, max_num_guesses, &mut *game_guesser)
        })
        .collect()
}
