//! Benchmark command
//!
//! Plays one automated game per opening word and reports how long the judge
//! holds out.

use crate::core::{Result, Word};
use crate::judge::{CandidateSet, Game, GameConfig, GameState};
use crate::solver::{Solver, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub won: usize,
    pub total_rounds: usize,
    pub average_rounds: f64,
    pub min_rounds: usize,
    pub max_rounds: usize,
    /// Rounds played -> number of games
    pub distribution: BTreeMap<usize, usize>,
    /// Opener that led to the shortest game
    pub best_opener: Option<(String, usize)>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Play a game for every opener
///
/// Each game starts from the full `dictionary` with the given config; the
/// solver picks every guess after the opener.
///
/// # Errors
///
/// Returns an error if a game cannot be created or the solver gets stuck.
///
/// # Panics
///
/// Panics if the progress bar template is invalid.
pub fn run_benchmark<S: Strategy>(
    solver: &Solver<S>,
    config: &GameConfig,
    dictionary: &CandidateSet,
    openers: &[Word],
    show_progress: bool,
) -> Result<BenchmarkResult> {
    let pb = if show_progress {
        ProgressBar::new(openers.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("valid progress template")
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut total_rounds = 0;
    let mut won = 0;
    let mut min_rounds = usize::MAX;
    let mut max_rounds = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut best_opener: Option<(String, usize)> = None;

    for opener in openers {
        pb.set_message(opener.text().to_uppercase());

        let mut game = Game::new(config.clone(), dictionary.clone())?;
        solver.play(&mut game, Some(opener))?;

        let rounds = game.rounds_played();
        if game.state() == GameState::Won {
            won += 1;
        }
        total_rounds += rounds;
        min_rounds = min_rounds.min(rounds);
        max_rounds = max_rounds.max(rounds);
        *distribution.entry(rounds).or_insert(0) += 1;
        if best_opener.as_ref().is_none_or(|(_, best)| rounds < *best) {
            best_opener = Some((opener.text().to_string(), rounds));
        }

        pb.inc(1);
    }
    pb.finish_and_clear();

    let duration = start.elapsed();
    let total_games = openers.len();

    Ok(BenchmarkResult {
        total_games,
        won,
        total_rounds,
        average_rounds: if total_games == 0 {
            0.0
        } else {
            total_rounds as f64 / total_games as f64
        },
        min_rounds: if total_games == 0 { 0 } else { min_rounds },
        max_rounds,
        distribution,
        best_opener,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{MinimaxStrategy, RandomStrategy};
    use crate::wordlists::{prune_dictionary, words_from_slice};

    const WORDS: [&str; 10] = [
        "crane", "crate", "trace", "slate", "plate", "grace", "brace", "irate", "stare", "adore",
    ];

    fn setup() -> (Vec<Word>, CandidateSet) {
        let pool = words_from_slice(&WORDS);
        let dictionary = prune_dictionary(&pool, 5).unwrap();
        (pool, dictionary)
    }

    #[test]
    fn benchmark_runs() {
        let (pool, dictionary) = setup();
        let solver = Solver::new(MinimaxStrategy, &pool);

        let result = run_benchmark(&solver, &GameConfig::new(5), &dictionary, &pool[..4], false)
            .unwrap();

        assert_eq!(result.total_games, 4);
        assert_eq!(result.won, 4);
        assert!(result.min_rounds >= 1);
        assert!(result.average_rounds >= result.min_rounds as f64);
        assert!(result.average_rounds <= result.max_rounds as f64);
        assert!(result.best_opener.is_some());
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let (pool, dictionary) = setup();
        let solver = Solver::new(RandomStrategy, &pool);

        let result =
            run_benchmark(&solver, &GameConfig::new(5), &dictionary, &pool, false).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.total_games);
        let rounds_sum: usize = result.distribution.iter().map(|(r, n)| r * n).sum();
        assert_eq!(rounds_sum, result.total_rounds);
    }

    #[test]
    fn benchmark_respects_round_cap() {
        let (pool, dictionary) = setup();
        let solver = Solver::new(MinimaxStrategy, &pool);
        let config = GameConfig::new(5).with_max_rounds(Some(1));
        let openers = words_from_slice(&["zzzzz"]);

        let result = run_benchmark(&solver, &config, &dictionary, &openers, false).unwrap();

        assert_eq!(result.won, 0);
        assert_eq!(result.max_rounds, 1);
    }

    #[test]
    fn benchmark_no_openers() {
        let (pool, dictionary) = setup();
        let solver = Solver::new(MinimaxStrategy, &pool);

        let result = run_benchmark(&solver, &GameConfig::new(5), &dictionary, &[], false).unwrap();

        assert_eq!(result.total_games, 0);
        assert_eq!(result.total_rounds, 0);
        assert_eq!(result.min_rounds, 0);
        assert!(result.best_opener.is_none());
    }
}
