//! Absurdle - CLI
//!
//! Play Absurdle against the adversarial judge in a TUI or on the console,
//! or let a strategy play it for you.

use absurdle::{
    commands::{SolveConfig, analyze_word, run_benchmark, run_simple, solve_game},
    core::Word,
    judge::{CandidateSet, Game, GameConfig},
    output::{PatternStyle, print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{Solver, Strategy, StrategyType},
    wordlists::{DICTIONARY, load_from_file, prune_dictionary, words_from_slice},
};
use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io;

#[derive(Parser)]
#[command(
    name = "absurdle",
    about = "Adversarial Wordle: the judge keeps changing its mind",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default) or path to a whitespace-separated word file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Word length to play with
    #[arg(short = 'l', long, global = true, default_value_t = 5)]
    length: usize,

    /// End the game after this many rounds (default: unlimited)
    #[arg(long, global = true)]
    max_rounds: Option<usize>,

    /// Only accept dictionary words as guesses
    #[arg(long, global = true)]
    strict: bool,

    /// Pattern style: symbols (!*%) or emoji
    #[arg(long, global = true, default_value = "symbols")]
    style: PatternStyle,

    /// Strategy for automated play: minimax (default) or random
    #[arg(short, long, global = true, default_value = "minimax")]
    strategy: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Console mode: type guesses, read patterns
    Simple,

    /// Let the strategy play a full game
    Solve {
        /// Force the first guess
        #[arg(short = 'f', long)]
        first_word: Option<String>,

        /// Show candidate counts for each round
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show how a word splits the dictionary
    Analyze {
        /// Word to analyze
        word: String,

        /// Number of groups to show
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,
    },

    /// Play one automated game per opening word
    Benchmark {
        /// Number of dictionary words to use as openers
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },
}

/// Load the dictionary based on the -w flag
///
/// - "embedded": the compiled-in dictionary
/// - "<path>": a custom word file
fn load_words(wordlist: &str) -> Result<Vec<Word>> {
    match wordlist {
        "embedded" => Ok(words_from_slice(DICTIONARY)),
        path => load_from_file(path).with_context(|| format!("loading dictionary {path}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig::new(cli.length)
        .with_max_rounds(cli.max_rounds)
        .with_dictionary_guesses_only(cli.strict);
    config.validate()?;

    let words = load_words(&cli.wordlist)?;
    let dictionary = prune_dictionary(&words, cli.length)?;
    if dictionary.is_empty() {
        bail!(
            "no {}-letter words in dictionary '{}'",
            cli.length,
            cli.wordlist
        );
    }
    let guess_pool: Vec<Word> = dictionary.iter().cloned().collect();

    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(config, dictionary, &guess_pool, cli.style),
        Commands::Simple => run_simple_command(config, dictionary, cli.style),
        Commands::Solve {
            first_word,
            verbose,
        } => {
            let solver = Solver::new(StrategyType::from_name(&cli.strategy), &guess_pool);
            solve_command(config, dictionary, &solver, first_word, cli.style, verbose)
        }
        Commands::Analyze { word, top } => {
            let result = analyze_word(&word, &dictionary, top)?;
            print_analysis_result(&result, cli.style);
            Ok(())
        }
        Commands::Benchmark { count } => {
            let solver = Solver::new(StrategyType::from_name(&cli.strategy), &guess_pool);
            benchmark_command(&config, &dictionary, &solver, &guess_pool, count, &cli.strategy)
        }
    }
}

fn solve_command<S: Strategy>(
    config: GameConfig,
    dictionary: CandidateSet,
    solver: &Solver<S>,
    first_word: Option<String>,
    style: PatternStyle,
    verbose: bool,
) -> Result<()> {
    let mut game = Game::new(config, dictionary)?;
    let result = solve_game(SolveConfig::new(first_word), solver, &mut game)?;

    print_solve_result(&result, style, verbose);
    Ok(())
}

fn benchmark_command<S: Strategy>(
    config: &GameConfig,
    dictionary: &CandidateSet,
    solver: &Solver<S>,
    guess_pool: &[Word],
    count: usize,
    strategy_name: &str,
) -> Result<()> {
    let openers = &guess_pool[..count.min(guess_pool.len())];
    println!(
        "Running benchmark with {} openers ({} strategy, {} candidates)...",
        openers.len(),
        strategy_name.bright_yellow(),
        dictionary.len()
    );

    let result = run_benchmark(solver, config, dictionary, openers, true)?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_simple_command(
    config: GameConfig,
    dictionary: CandidateSet,
    style: PatternStyle,
) -> Result<()> {
    let mut game = Game::new(config, dictionary)?;
    let stdin = io::stdin();
    run_simple(&mut game, style, stdin.lock(), io::stdout())?;
    Ok(())
}

fn run_play_command(
    config: GameConfig,
    dictionary: CandidateSet,
    guess_pool: &[Word],
    style: PatternStyle,
) -> Result<()> {
    use absurdle::interactive::{App, run_tui};

    let game = Game::new(config, dictionary)?;
    let app = App::new(game, guess_pool, style);
    run_tui(app)
}
