use crate::results::GuessResult;
use crate::results::LetterResult;
use crate::results::WordleError;
use crate::results::WORD_LENGTH;
use std::collections::HashMap;
use std::collections::HashSet;
use std::iter::zip;
use std::result::Result;

/// Defines the letter restrictions that a word must adhere to in order to be consistent with one
/// guess result.
///
/// The restrictions are computed once per guess, then checked either one location at a time
/// (see [`WordRestrictions::allows_letter_at`]) or for a whole word at once.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct WordRestrictions {
    /// Letters that must occur in specific locations in the word.
    must_be_here: [Option<char>; WORD_LENGTH],
    /// Letters that must not occur in specific locations in the word.
    must_not_be_here: [Vec<char>; WORD_LENGTH],
    /// Letters that must be somewhere in the word.
    must_contain: HashSet<char>,
    /// Letters that must not be anywhere in the word.
    must_not_contain: HashSet<char>,
}

impl WordRestrictions {
    /// Returns the restrictions imposed by the given result.
    ///
    /// A `NotPresent` letter only excludes the letter from the whole word if that letter was
    /// not also marked `Correct` or `PresentNotHere` somewhere in the same guess. Otherwise it
    /// only excludes the letter from its own location.
    pub fn from_result(result: &GuessResult) -> Result<WordRestrictions, WordleError> {
        let letters: Vec<char> = result.guess.chars().collect();
        if letters.len() != WORD_LENGTH {
            return Err(WordleError::WordLength(WORD_LENGTH));
        }
        if result.results.len() != WORD_LENGTH {
            return Err(WordleError::InvalidResults);
        }

        let claimed = WordRestrictions::count_claimed_letters(&letters, &result.results);
        let mut restrictions = WordRestrictions {
            must_be_here: [None; WORD_LENGTH],
            must_not_be_here: Default::default(),
            must_contain: HashSet::new(),
            must_not_contain: HashSet::new(),
        };
        for (index, (letter, letter_result)) in zip(letters, &result.results).enumerate() {
            match letter_result {
                LetterResult::Correct => {
                    restrictions.must_be_here[index] = Some(letter);
                }
                LetterResult::PresentNotHere => {
                    restrictions.must_not_be_here[index].push(letter);
                    restrictions.must_contain.insert(letter);
                }
                LetterResult::NotPresent => {
                    restrictions.must_not_be_here[index].push(letter);
                    if !claimed.contains_key(&letter) {
                        restrictions.must_not_contain.insert(letter);
                    }
                }
            }
        }
        Ok(restrictions)
    }

    /// Returns `true` iff a word with `letter` at `location` could still satisfy these
    /// restrictions.
    pub fn allows_letter_at(&self, letter: char, location: usize) -> bool {
        self.must_be_here[location].map_or(true, |required| required == letter)
            && !self.must_not_be_here[location].contains(&letter)
            && !self.must_not_contain.contains(&letter)
    }

    /// Returns `true` iff the word contains every letter that must be present.
    pub fn has_required_letters(&self, word: &str) -> bool {
        self.must_contain
            .iter()
            .all(|letter| word.contains(*letter))
    }

    /// Returns `true` iff the given word satisfies these restrictions.
    pub fn is_satisfied_by(&self, word: &str) -> bool {
        word.chars().count() == WORD_LENGTH
            && word
                .chars()
                .enumerate()
                .all(|(location, letter)| self.allows_letter_at(letter, location))
            && self.has_required_letters(word)
    }

    /// Counts how many times each letter was marked `Correct` or `PresentNotHere`.
    fn count_claimed_letters(letters: &[char], results: &[LetterResult]) -> HashMap<char, u8> {
        let mut claimed: HashMap<char, u8> = HashMap::new();
        for (letter, result) in zip(letters, results) {
            if *result != LetterResult::NotPresent {
                *claimed.entry(*letter).or_insert(0) += 1;
            }
        }
        claimed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restrictions_for(guess: &str, pattern: &str) -> Result<WordRestrictions, WordleError> {
        WordRestrictions::from_result(&GuessResult::from_pattern(guess, pattern)?)
    }

    #[test]
    fn correct_letter_must_be_here() -> Result<(), WordleError> {
        let restrictions = restrictions_for("abcde", "gbbbb")?;

        assert!(restrictions.allows_letter_at('a', 0));
        assert!(!restrictions.allows_letter_at('z', 0));
        assert!(restrictions.is_satisfied_by("azzzz"));
        assert!(!restrictions.is_satisfied_by("zazzz"));
        Ok(())
    }

    #[test]
    fn present_letter_must_be_elsewhere() -> Result<(), WordleError> {
        let restrictions = restrictions_for("abcde", "ybbbb")?;

        assert!(!restrictions.allows_letter_at('a', 0));
        assert!(restrictions.allows_letter_at('a', 1));
        assert!(restrictions.is_satisfied_by("zzzaz"));
        assert!(!restrictions.is_satisfied_by("azzzz"));
        assert!(!restrictions.is_satisfied_by("zzzzz"));
        Ok(())
    }

    #[test]
    fn not_present_letter_is_excluded_everywhere() -> Result<(), WordleError> {
        let restrictions = restrictions_for("abcde", "bbbbb")?;

        for location in 0..WORD_LENGTH {
            assert!(!restrictions.allows_letter_at('c', location));
        }
        assert!(restrictions.is_satisfied_by("zzzzz"));
        assert!(!restrictions.is_satisfied_by("zzzzc"));
        Ok(())
    }

    #[test]
    fn not_present_duplicate_of_claimed_letter_only_excludes_its_location() -> Result<(), WordleError>
    {
        // Objective "theme" scored against "eerie".
        let restrictions = restrictions_for("eerie", "ybbbg")?;

        assert!(!restrictions.allows_letter_at('e', 0));
        assert!(!restrictions.allows_letter_at('e', 1));
        assert!(restrictions.allows_letter_at('e', 2));
        assert!(restrictions.allows_letter_at('e', 4));
        assert!(!restrictions.allows_letter_at('r', 2));
        assert!(restrictions.is_satisfied_by("theme"));
        Ok(())
    }

    #[test]
    fn not_present_duplicate_of_present_letter_only_excludes_its_location() -> Result<(), WordleError>
    {
        let restrictions = restrictions_for("sassy", "yygbb")?;

        assert!(!restrictions.allows_letter_at('s', 3));
        assert!(restrictions.allows_letter_at('s', 4));
        assert!(restrictions.is_satisfied_by("mesas"));
        assert!(!restrictions.is_satisfied_by("sassy"));
        Ok(())
    }

    #[test]
    fn wrong_number_of_results_fails() {
        let result = GuessResult {
            guess: "abcde",
            results: vec![LetterResult::Correct; 4],
        };

        assert_eq!(
            WordRestrictions::from_result(&result),
            Err(WordleError::InvalidResults)
        );
    }

    #[test]
    fn wrong_word_length_fails() {
        let result = GuessResult {
            guess: "abcd",
            results: vec![LetterResult::Correct; 4],
        };

        assert_eq!(
            WordRestrictions::from_result(&result),
            Err(WordleError::WordLength(WORD_LENGTH))
        );
    }

    #[test]
    fn is_satisfied_by_rejects_wrong_length() -> Result<(), WordleError> {
        let restrictions = restrictions_for("abcde", "bbbbb")?;

        assert!(!restrictions.is_satisfied_by("zzzz"));
        assert!(!restrictions.is_satisfied_by("zzzzzz"));
        Ok(())
    }
}
