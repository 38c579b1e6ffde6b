//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use crate::core::Word;
use crate::judge::CandidateSet;

/// A strategy for choosing the next guess against the judge
pub trait Strategy {
    /// Select a guess from the guess pool given the current candidates
    ///
    /// Returns `None` if no guess in the pool can be played.
    fn select_guess<'a>(&self, guess_pool: &'a [Word], candidates: &CandidateSet)
    -> Option<&'a Word>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Smallest adversarial outcome (default)
    Minimax(MinimaxStrategy),
    /// Random surviving candidate
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a>(
        &self,
        guess_pool: &'a [Word],
        candidates: &CandidateSet,
    ) -> Option<&'a Word> {
        match self {
            Self::Minimax(s) => s.select_guess(guess_pool, candidates),
            Self::Random(s) => s.select_guess(guess_pool, candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "minimax", "random".
    /// Defaults to minimax if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy),
            _ => Self::Minimax(MinimaxStrategy),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Minimax(_) => "minimax",
            Self::Random(_) => "random",
        }
    }
}

/// Minimax strategy
///
/// Selects the guess that leaves the judge the fewest words. Gives up when
/// even the best guess would leave every candidate standing.
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn select_guess<'a>(
        &self,
        guess_pool: &'a [Word],
        candidates: &CandidateSet,
    ) -> Option<&'a Word> {
        super::minimax::select_best_guess(guess_pool, candidates)
            .filter(|&(best, remaining)| {
                remaining < candidates.len() || candidates.contains(best)
            })
            .map(|(best, _)| best)
    }
}

/// Random strategy
///
/// Randomly selects from the remaining candidates that are also in the pool,
/// or failing that from the pool words that still eliminate something.
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess<'a>(
        &self,
        guess_pool: &'a [Word],
        candidates: &CandidateSet,
    ) -> Option<&'a Word> {
        use super::minimax::adversarial_outcome;
        use rand::prelude::IndexedRandom;

        let mut rng = rand::rng();
        let valid_candidates: Vec<&Word> = guess_pool
            .iter()
            .filter(|g| candidates.contains(g))
            .collect();

        if let Some(&candidate) = valid_candidates.choose(&mut rng) {
            return Some(candidate);
        }

        let shrinking: Vec<&Word> = guess_pool
            .iter()
            .filter(|g| {
                adversarial_outcome(g, candidates)
                    .is_some_and(|(_, remaining)| remaining < candidates.len())
            })
            .collect();
        shrinking.choose(&mut rng).copied()
    }
}
