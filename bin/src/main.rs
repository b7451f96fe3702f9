use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use rand::seq::SliceRandom;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::io::BufRead;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, Level};
use wordle_trie::*;

/// Simple program to run a Wordle game in reverse, where the computer guesses the word by
/// narrowing down a trie of five-letter words.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a file that contains a list of possible words, separated by whitespace.
    #[arg(short = 'f', long)]
    words_file: PathBuf,

    /// Log each filter that is applied.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a single game with the given word, or a random word from the words file.
    Single {
        word: Option<String>,
        /// The first guess. Defaults to a random word from the words file.
        #[arg(long)]
        first_guess: Option<String>,
        #[arg(long, value_enum, default_value_t = Strategy::Trie)]
        strategy: Strategy,
    },
    /// Run the same game with both strategies and compare how many words each one checked.
    Compare {
        word: Option<String>,
        #[arg(long)]
        first_guess: Option<String>,
    },
    /// Benchmark the solver against every word in the given words file.
    Benchmark {
        #[arg(long)]
        first_guess: Option<String>,
        #[arg(long, value_enum, default_value_t = Strategy::Trie)]
        strategy: Strategy,
    },
    /// Run an interactive game against the solver.
    Interactive {
        #[arg(long)]
        first_guess: Option<String>,
    },
    /// Print every word in the trie.
    Print,
}

/// How the remaining candidate words are stored and filtered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Strategy {
    Trie,
    List,
}

impl Strategy {
    fn name(self) -> &'static str {
        match self {
            Strategy::Trie => "Trie",
            Strategy::List => "List",
        }
    }
}

/// The words file, read once and shared by both strategies.
struct Words {
    contents: String,
    bank: WordBank,
}

impl Words {
    fn read(path: &Path) -> anyhow::Result<Words> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
            .to_lowercase();
        let bank = WordBank::from_reader(contents.as_bytes())?;
        if bank.is_empty() {
            bail!("{} has no {}-letter words", path.display(), WORD_LENGTH);
        }
        Ok(Words { contents, bank })
    }

    fn trie(&self) -> anyhow::Result<Trie> {
        Ok(Trie::from_reader(self.contents.as_bytes())?)
    }

    fn guesser(&self, strategy: Strategy) -> anyhow::Result<Box<dyn Guesser>> {
        Ok(match strategy {
            Strategy::Trie => Box::new(TrieGuesser::new(self.trie()?)),
            Strategy::List => Box::new(ListGuesser::new(&self.bank)),
        })
    }

    /// Returns the given word, or a random word from the bank.
    fn choose(&self, word: Option<String>) -> String {
        word.map(|word| word.to_lowercase()).unwrap_or_else(|| {
            self.bank
                .choose(&mut rand::thread_rng())
                .map(|word| word.to_string())
                .unwrap_or_default()
        })
    }

    /// The most guesses any game could need: every wrong guess removes at least itself.
    fn max_num_guesses(&self) -> u32 {
        self.bank.len() as u32 + 1
    }
}

fn main() -> anyhow::Result<()> {
    let start_time = Instant::now();
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .with_writer(io::stderr)
        .init();

    let words = Words::read(&args.words_file)?;
    info!(
        file = %args.words_file.display(),
        num_words = words.bank.len(),
        "loaded words"
    );

    match args.command {
        Command::Single {
            word,
            first_guess,
            strategy,
        } => play_single_game(&words, word, first_guess, strategy)?,
        Command::Compare { word, first_guess } => compare_strategies(&words, word, first_guess)?,
        Command::Benchmark {
            first_guess,
            strategy,
        } => run_benchmark(&words, first_guess, strategy)?,
        Command::Interactive { first_guess } => play_interactive_game(&words, first_guess)?,
        Command::Print => {
            let trie = words.trie()?;
            trie.print();
            println!("{} words.", trie.size());
        }
    }

    info!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

fn play_single_game(
    words: &Words,
    word: Option<String>,
    first_guess: Option<String>,
    strategy: Strategy,
) -> anyhow::Result<()> {
    let word = words.choose(word);
    let first_guess = words.choose(first_guess);
    let mut guesser = words.guesser(strategy)?;
    let result = play_game(&word, &first_guess, words.max_num_guesses(), &mut *guesser)?;
    match result {
        GameResult::Success(stats) => {
            println!(
                "Using a {}, the program found the word \"{}\" in {} words.",
                strategy.name(),
                word,
                stats.words_checked
            );
            println!("It took {} guesses:", stats.guesses.len());
            for guess in stats.guesses.iter() {
                println!("\t{}", guess);
            }
        }
        GameResult::Failure(stats) => {
            println!(
                "I still couldn't solve it after {} guesses :(",
                stats.guesses.len()
            );
        }
        GameResult::UnknownWord => {
            bail!("\"{}\" is not in the word list.", word);
        }
    }
    Ok(())
}

fn compare_strategies(
    words: &Words,
    word: Option<String>,
    first_guess: Option<String>,
) -> anyhow::Result<()> {
    let word = words.choose(word);
    let first_guess = words.choose(first_guess);
    println!("Guessing \"{}\", starting from \"{}\".", word, first_guess);

    let mut list_guesser = ListGuesser::new(&words.bank);
    let result = play_game(&word, &first_guess, words.max_num_guesses(), &mut list_guesser)?;
    print_comparison(Strategy::List, &word, result)?;

    let mut trie_guesser = TrieGuesser::new(words.trie()?);
    let result = play_game(&word, &first_guess, words.max_num_guesses(), &mut trie_guesser)?;
    print_comparison(Strategy::Trie, &word, result)?;
    let stats = trie_guesser.stats();
    println!(
        "The Trie applied {} filters and removed {} words.",
        stats.filters_applied, stats.words_removed
    );
    Ok(())
}

fn print_comparison(strategy: Strategy, word: &str, result: GameResult) -> anyhow::Result<()> {
    match result {
        GameResult::Success(stats) => println!(
            "Using a {}, the program found the word \"{}\" in {} words ({} guesses).",
            strategy.name(),
            word,
            stats.words_checked,
            stats.guesses.len()
        ),
        GameResult::Failure(_) | GameResult::UnknownWord => {
            bail!("\"{}\" is not in the word list.", word)
        }
    }
    Ok(())
}

fn run_benchmark(
    words: &Words,
    first_guess: Option<String>,
    strategy: Strategy,
) -> anyhow::Result<()> {
    let first_guess = words.choose(first_guess);
    let guesser = words.guesser(strategy)?;
    let results = play_all_games(
        &words.bank[..],
        &first_guess,
        words.max_num_guesses(),
        &*guesser,
    );

    let mut num_guesses_per_game: Vec<u32> = Vec::new();
    let mut words_checked_per_game: Vec<u64> = Vec::new();
    for (word, result) in words.bank.iter().zip(results) {
        match result? {
            GameResult::Success(stats) => {
                num_guesses_per_game.push(stats.guesses.len() as u32);
                words_checked_per_game.push(stats.words_checked);
            }
            other => bail!("failed to solve \"{}\": {:?}", word, other),
        }
    }
    println!(
        "Solved {} words using a {}, starting from \"{}\". Results:",
        words.bank.len(),
        strategy.name(),
        first_guess
    );

    let mut num_games_per_round: HashMap<u32, u32> = HashMap::new();
    for num_guesses in num_guesses_per_game.iter() {
        *(num_games_per_round.entry(*num_guesses).or_insert(0)) += 1;
    }

    println!("|Num guesses|Num games|");
    println!("|-----------|---------|");
    let mut num_rounds = num_games_per_round.keys().copied().collect::<Vec<u32>>();
    num_rounds.sort_unstable();
    for num_round in num_rounds.iter() {
        println!("|{}|{}|", num_round, num_games_per_round[num_round]);
    }

    let average: f64 = num_guesses_per_game.iter().sum::<u32>() as f64
        / num_guesses_per_game.len() as f64;
    let std_dev: f64 = (num_guesses_per_game
        .iter()
        .map(|num_guesses| (*num_guesses as f64 - average).powi(2))
        .sum::<f64>()
        / num_guesses_per_game.len() as f64)
        .sqrt();
    let average_words_checked: f64 = words_checked_per_game.iter().sum::<u64>() as f64
        / words_checked_per_game.len() as f64;

    println!(
        "\n**Average number of guesses:** {:.2} +/- {:.2}",
        average, std_dev
    );
    println!(
        "**Average number of words checked:** {:.2}",
        average_words_checked
    );
    Ok(())
}

fn play_interactive_game(words: &Words, first_guess: Option<String>) -> anyhow::Result<()> {
    if let Some(guess) = &first_guess {
        if guess.chars().count() != WORD_LENGTH {
            bail!("the first guess must have {} letters", WORD_LENGTH);
        }
    }
    let mut guesser = TrieGuesser::new(words.trie()?);
    println!("Choose a word from the word-list. Press enter once you've chosen.");

    let mut input = io::stdin().lock();
    read_line(&mut input)?;

    println!(
        "I will now try to guess your word.\n\n\
         For each guess, enter the correctness of each letter as:\n\n\
           * 'b' = this letter is not in the word\n\
           * 'y' = this letter is in the word, but not in this location\n\
           * 'g' = this letter is in the word and in the right location.\n\n\
         For example, if your word was \"spade\" and the guess was \"soapy\", you would enter \"gbgyb\""
    );

    let mut next_guess = first_guess
        .map(|guess| guess.to_lowercase())
        .or_else(|| guesser.select_next_guess());
    let mut round = 1;
    while let Some(guess) = next_guess {
        println!("I'm guessing: {}. How did I do?", guess);

        let result = loop {
            let line = read_line(&mut input)?;
            match GuessResult::from_pattern(&guess, line.trim()) {
                Ok(result) => break result,
                Err(error) => println!("{} Try again.", error),
            }
        };

        if result.is_correct() {
            println!("I did it! It took me {} guesses.", round);
            return Ok(());
        }

        guesser.update(&result)?;
        info!(remaining = guesser.num_candidates(), "updated candidates");
        next_guess = guesser.select_next_guess();
        round += 1;
    }

    println!("I couldn't guess it :( Your word must not be in my word list.");

    Ok(())
}

/// Reads one line, failing once the input is closed.
fn read_line<R: BufRead>(input: &mut R) -> anyhow::Result<String> {
    let mut buffer = String::new();
    if input.read_line(&mut buffer)? == 0 {
        bail!("input closed before the game finished");
    }
    Ok(buffer)
}
