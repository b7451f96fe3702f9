#[macro_use]
extern crate assert_matches;

use wordle_trie::*;

use std::fs::File;
use std::io;
use std::result::Result;

fn create_word_bank() -> WordBank {
    WordBank::from_iterator(vec![
        "amicy", "amice", "opens", "opend", "moooi", "kmice", "bpens", "fpend", "toooi",
    ])
}

fn read_word_bank() -> Result<WordBank, WordleError> {
    WordBank::from_reader(io::BufReader::new(File::open("../data/words.txt")?))
}

#[test]
fn play_game_with_trie() -> Result<(), WordleError> {
    let bank = create_word_bank();
    let mut guesser = TrieGuesser::new(bank.iter().collect());

    let result = play_game("kmice", "baaaa", 10, &mut guesser)?;

    assert_matches!(result, GameResult::Success(_));
    if let GameResult::Success(stats) = result {
        assert_eq!(stats.guesses.first().map(|guess| &**guess), Some("baaaa"));
        assert_eq!(stats.guesses.last().map(|guess| &**guess), Some("kmice"));
        assert_eq!(stats.words_checked, guesser.words_checked());
    }
    assert!(guesser.trie().contains("kmice"));
    Ok(())
}

#[test]
fn play_game_first_guess_is_correct() -> Result<(), WordleError> {
    let mut guesser = TrieGuesser::new(create_word_bank().iter().collect());

    let result = play_game("opens", "opens", 10, &mut guesser)?;

    assert_eq!(
        result,
        GameResult::Success(GameStats {
            guesses: vec![Box::from("opens")],
            words_checked: 0,
        })
    );
    Ok(())
}

#[test]
fn play_game_unknown_word() -> Result<(), WordleError> {
    let mut guesser = TrieGuesser::new(create_word_bank().iter().collect());

    let result = play_game("other", "amice", 10, &mut guesser)?;

    assert_eq!(result, GameResult::UnknownWord);
    assert_eq!(guesser.num_candidates(), 0);
    Ok(())
}

#[test]
fn play_game_runs_out_of_guesses() -> Result<(), WordleError> {
    let mut guesser = ListGuesser::new(&create_word_bank());

    let result = play_game("toooi", "zzzzz", 1, &mut guesser)?;

    assert_eq!(
        result,
        GameResult::Failure(GameStats {
            guesses: vec![Box::from("zzzzz")],
            words_checked: 9,
        })
    );
    Ok(())
}

#[test]
fn play_game_wrong_length() {
    let mut guesser = ListGuesser::new(&create_word_bank());

    assert_matches!(
        play_game("toooi", "zzzz", 10, &mut guesser),
        Err(WordleError::WordLength(5))
    );
    assert_matches!(
        play_game("tooo", "zzzzz", 10, &mut guesser),
        Err(WordleError::WordLength(5))
    );
}

#[test]
fn play_game_solves_every_word() -> Result<(), WordleError> {
    let bank = read_word_bank()?;
    let guessers: Vec<Box<dyn Guesser>> = vec![
        Box::new(TrieGuesser::new(bank.iter().collect())),
        Box::new(ListGuesser::new(&bank)),
    ];

    for guesser in guessers.iter() {
        for first_guess in ["crane", "sassy", "zzzzz"] {
            let results = play_all_games(&bank[..], first_guess, bank.len() as u32 + 1, &**guesser);

            assert_eq!(results.len(), bank.len());
            for (word, result) in bank.iter().zip(results) {
                match result? {
                    GameResult::Success(stats) => {
                        assert_eq!(
                            stats.guesses.last().map(|guess| &**guess),
                            Some(&**word)
                        );
                    }
                    other => panic!("failed to solve {}: {:?}", word, other),
                }
            }
        }
    }
    Ok(())
}

#[test]
fn trie_and_list_agree_after_every_guess() -> Result<(), WordleError> {
    let bank = read_word_bank()?;

    for word in bank.iter().step_by(11) {
        let mut trie_guesser = TrieGuesser::new(bank.iter().collect());
        let mut list_guesser = ListGuesser::new(&bank);
        let mut guess = "crane".to_string();
        while guess.as_str() != &**word {
            let result = get_result_for_guess(word, &guess)?;
            trie_guesser.update(&result)?;
            list_guesser.update(&result)?;

            let mut list_words: Vec<String> = list_guesser
                .possible_words()
                .iter()
                .map(|word| word.to_string())
                .collect();
            list_words.sort();
            assert_eq!(trie_guesser.trie().all_words(), list_words);
            assert_eq!(trie_guesser.words_checked(), list_guesser.words_checked());

            guess = trie_guesser
                .select_next_guess()
                .expect("the objective should never be filtered out");
        }
    }
    Ok(())
}
