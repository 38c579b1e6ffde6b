//! Automated player for the judge

use super::strategy::Strategy;
use crate::core::{AbsurdleError, Result, Word};
use crate::judge::{CandidateSet, Game, Round};

/// Plays games against the judge using a strategy
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    guess_pool: &'a [Word],
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver
    ///
    /// # Parameters
    /// - `strategy`: The guess selection strategy to use
    /// - `guess_pool`: Every word the solver may guess
    pub const fn new(strategy: S, guess_pool: &'a [Word]) -> Self {
        Self {
            strategy,
            guess_pool,
        }
    }

    /// Next guess for the given candidates
    ///
    /// A lone candidate is guessed directly when the pool holds it.
    pub fn next_guess(&self, candidates: &CandidateSet) -> Option<&'a Word> {
        if candidates.len() == 1
            && let Some(only) = candidates.iter().next()
            && let Some(word) = self.guess_pool.iter().find(|&w| w == only)
        {
            return Some(word);
        }

        self.strategy.select_guess(self.guess_pool, candidates)
    }

    /// Play `game` to the end, optionally forcing the first guess
    ///
    /// Returns the rounds played by this call.
    ///
    /// # Errors
    /// Returns `AbsurdleError::InvalidState` if the strategy runs out of
    /// guesses or picks one that eliminates nothing, plus anything
    /// [`Game::play`] rejects.
    pub fn play(&self, game: &mut Game, opener: Option<&Word>) -> Result<Vec<Round>> {
        let mut rounds = Vec::new();

        if let Some(opener) = opener
            && !game.is_finished()
        {
            rounds.push(game.play(opener.clone())?.clone());
        }

        while !game.is_finished() {
            let guess = self.next_guess(game.candidates()).ok_or_else(|| {
                AbsurdleError::InvalidState("no usable guess in the guess pool".to_string())
            })?;
            let round = game.play(guess.clone())?.clone();
            if !game.is_finished() && round.candidates_after == round.candidates_before {
                return Err(AbsurdleError::InvalidState(format!(
                    "guess '{}' left all {} candidates standing",
                    round.guess, round.candidates_before
                )));
            }
            rounds.push(round);
        }

        Ok(rounds)
    }
}
