use std::collections::HashMap;
use std::io;
use std::iter::zip;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The number of letters in every word that can be guessed.
pub const WORD_LENGTH: usize = 5;

/// The result of a given letter at a specific location.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LetterResult {
    /// The letter is at this location in the objective (`g`).
    Correct,
    /// The letter is elsewhere in the objective (`y`).
    PresentNotHere,
    /// The letter cannot be matched to this location (`b`).
    NotPresent,
}

impl LetterResult {
    /// Parses a single feedback character: `g`, `y`, or `b`.
    pub fn from_char(value: char) -> Result<LetterResult, WordleError> {
        match value {
            'g' => Ok(LetterResult::Correct),
            'y' => Ok(LetterResult::PresentNotHere),
            'b' => Ok(LetterResult::NotPresent),
            other => Err(WordleError::InvalidPattern(other)),
        }
    }

    /// The feedback character for this result.
    pub fn as_char(self) -> char {
        match self {
            LetterResult::Correct => 'g',
            LetterResult::PresentNotHere => 'y',
            LetterResult::NotPresent => 'b',
        }
    }
}

/// Indicates that an error occurred while trying to guess the objective word.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum WordleError {
    /// A word or pattern did not have the required number of letters, given here.
    #[error("words and patterns must have exactly {0} letters")]
    WordLength(usize),
    /// A pattern contained a character other than `g`, `y`, or `b`.
    #[error("pattern character {0:?} must be one of 'g', 'y', or 'b'")]
    InvalidPattern(char),
    /// The given `GuessResult` is inconsistent with its guess.
    #[error("the guess results do not match the guess")]
    InvalidResults,
    /// Reading the words failed.
    #[error("failed to read words: {0}")]
    IoError(String),
}

impl From<io::Error> for WordleError {
    fn from(error: io::Error) -> Self {
        WordleError::IoError(error.to_string())
    }
}

/// The result of a single word guess.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct GuessResult<'a> {
    pub guess: &'a str,
    /// The result of each letter, provided in the same letter order as in the guess.
    pub results: Vec<LetterResult>,
}

impl<'a> GuessResult<'a> {
    /// Parses a feedback pattern such as `"gybbg"` for the given guess.
    ///
    /// Both the guess and the pattern must have [`WORD_LENGTH`] characters.
    pub fn from_pattern(guess: &'a str, pattern: &str) -> Result<GuessResult<'a>, WordleError> {
        if guess.chars().count() != WORD_LENGTH || pattern.chars().count() != WORD_LENGTH {
            return Err(WordleError::WordLength(WORD_LENGTH));
        }
        Ok(GuessResult {
            guess,
            results: pattern
                .chars()
                .map(LetterResult::from_char)
                .collect::<Result<Vec<LetterResult>, WordleError>>()?,
        })
    }

    /// Returns `true` iff every letter was correct.
    pub fn is_correct(&self) -> bool {
        self.results
            .iter()
            .all(|result| *result == LetterResult::Correct)
    }

    /// Formats the results as a `g`/`y`/`b` pattern.
    pub fn pattern(&self) -> String {
        self.results.iter().map(|result| result.as_char()).collect()
    }
}

/// Determines the result of the given `guess` when applied to the given `objective`.
///
/// Duplicate letters are handled the way Wordle does: exact matches are claimed first, then each
/// remaining guess letter (left to right) is marked as present only while the objective still has
/// an unclaimed copy of that letter.
pub fn get_result_for_guess<'a>(
    objective: &str,
    guess: &'a str,
) -> Result<GuessResult<'a>, WordleError> {
    let objective_letters: Vec<char> = objective.chars().collect();
    let guess_letters: Vec<char> = guess.chars().collect();
    if objective_letters.len() != WORD_LENGTH || guess_letters.len() != WORD_LENGTH {
        return Err(WordleError::WordLength(WORD_LENGTH));
    }

    let mut results = vec![LetterResult::NotPresent; WORD_LENGTH];
    let mut unclaimed: HashMap<char, u8> = HashMap::new();
    for (index, (objective_letter, guess_letter)) in
        zip(&objective_letters, &guess_letters).enumerate()
    {
        if objective_letter == guess_letter {
            results[index] = LetterResult::Correct;
        } else {
            *unclaimed.entry(*objective_letter).or_insert(0) += 1;
        }
    }
    for (index, letter) in guess_letters.iter().enumerate() {
        if results[index] == LetterResult::Correct {
            continue;
        }
        if let Some(count) = unclaimed.get_mut(letter) {
            if *count > 0 {
                *count -= 1;
                results[index] = LetterResult::PresentNotHere;
            }
        }
    }
    Ok(GuessResult { guess, results })
}

/// What happened over the course of one game.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameStats {
    /// Every guess that was made, in order.
    pub guesses: Vec<Box<str>>,
    /// The number of candidate words examined while filtering.
    pub words_checked: u64,
}

/// Whether the game was won or lost by the guesser.
#[derive(Debug, Eq, PartialEq, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameResult {
    /// Indicates that the guesser won the game.
    Success(GameStats),
    /// Indicates that the guesser ran out of guesses.
    Failure(GameStats),
    /// Indicates that the guesser ran out of candidates, so the word was not in its word list.
    UnknownWord,
}
