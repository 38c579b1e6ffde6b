//! Automated game command
//!
//! Lets a strategy play a whole game against the judge and records each round.

use crate::core::{Result, Word};
use crate::judge::{Game, GameState, Round};
use crate::solver::{Solver, Strategy};

/// Configuration for an automated game
#[derive(Debug, Clone, Default)]
pub struct SolveConfig {
    /// Forced first guess
    pub opener: Option<String>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(opener: Option<String>) -> Self {
        Self { opener }
    }
}

/// Result of an automated game
pub struct SolveResult {
    pub state: GameState,
    pub rounds: Vec<Round>,
    pub max_rounds: Option<usize>,
}

impl SolveResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.state == GameState::Won
    }
}

/// Play `game` to the end with the solver
///
/// # Errors
///
/// Returns an error if:
/// - The opener is not a word or has the wrong length
/// - The solver cannot provide a valid guess
pub fn solve_game<S: Strategy>(
    config: SolveConfig,
    solver: &Solver<S>,
    game: &mut Game,
) -> Result<SolveResult> {
    let opener = config.opener.as_deref().map(Word::new).transpose()?;
    let rounds = solver.play(game, opener.as_ref())?;

    Ok(SolveResult {
        state: game.state(),
        rounds,
        max_rounds: game.config().max_rounds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AbsurdleError;
    use crate::judge::GameConfig;
    use crate::solver::{MinimaxStrategy, StrategyType};
    use crate::wordlists::{prune_dictionary, words_from_slice};

    const WORDS: [&str; 10] = [
        "crane", "crate", "trace", "slate", "plate", "grace", "brace", "irate", "stare", "adore",
    ];

    fn setup() -> (Vec<Word>, Game) {
        let pool = words_from_slice(&WORDS);
        let dictionary = prune_dictionary(&pool, 5).unwrap();
        let game = Game::new(GameConfig::new(5), dictionary).unwrap();
        (pool, game)
    }

    #[test]
    fn solve_wins() {
        let (pool, mut game) = setup();
        let solver = Solver::new(MinimaxStrategy, &pool);

        let result = solve_game(SolveConfig::default(), &solver, &mut game).unwrap();

        assert!(result.success());
        assert!(result.rounds.last().unwrap().pattern.is_win());
        assert_eq!(result.max_rounds, None);
    }

    #[test]
    fn solve_records_shrinking_rounds() {
        let (pool, mut game) = setup();
        let solver = Solver::new(StrategyType::from_name("random"), &pool);

        let result = solve_game(SolveConfig::default(), &solver, &mut game).unwrap();

        for pair in result.rounds.windows(2) {
            assert_eq!(pair[1].candidates_before, pair[0].candidates_after);
        }
        for step in &result.rounds {
            assert!(step.candidates_after <= step.candidates_before);
        }
    }

    #[test]
    fn solve_uses_opener() {
        let (pool, mut game) = setup();
        let solver = Solver::new(MinimaxStrategy, &pool);

        let config = SolveConfig::new(Some("ZZZZZ".to_string()));
        let result = solve_game(config, &solver, &mut game).unwrap();

        assert_eq!(result.rounds[0].guess.text(), "zzzzz");
        assert_eq!(result.rounds[0].candidates_after, WORDS.len());
        assert!(result.success());
    }

    #[test]
    fn solve_rejects_bad_opener() {
        let (pool, mut game) = setup();
        let solver = Solver::new(MinimaxStrategy, &pool);

        let result = solve_game(SolveConfig::new(Some("cat".to_string())), &solver, &mut game);
        assert!(matches!(result, Err(AbsurdleError::LengthMismatch { .. })));

        let result = solve_game(SolveConfig::new(Some("c4t".to_string())), &solver, &mut game);
        assert!(matches!(result, Err(AbsurdleError::InvalidWord(_))));
    }

    #[test]
    fn solve_with_round_cap() {
        let pool = words_from_slice(&WORDS);
        let dictionary = prune_dictionary(&pool, 5).unwrap();
        let mut game = Game::new(GameConfig::new(5).with_max_rounds(Some(2)), dictionary).unwrap();
        let solver = Solver::new(MinimaxStrategy, &pool);

        let config = SolveConfig::new(Some("zzzzz".to_string()));
        let result = solve_game(config, &solver, &mut game).unwrap();

        assert!(result.rounds.len() <= 2);
        assert_eq!(result.max_rounds, Some(2));
    }
}
