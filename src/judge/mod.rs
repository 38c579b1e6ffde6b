//! The adversarial judge
//!
//! Instead of committing to a secret word, the judge keeps a set of words
//! consistent with every answer so far. For each guess it groups the
//! candidates by the pattern they would produce and answers with the
//! pattern of the largest group, breaking ties by the smallest pattern.

mod candidates;
mod game;
mod partition;
mod selector;

pub use candidates::CandidateSet;
pub use game::{Game, GameConfig, GameState, Round};
pub use partition::{Partition, partition};
pub use selector::{select, selection_order};

use crate::core::{Pattern, Result, Word};

/// Judge one guess against `candidates`
///
/// Returns the pattern to show and the candidates that remain.
///
/// # Errors
/// Returns `AbsurdleError::InvalidState` if `candidates` is empty or the
/// guess length does not match.
pub fn respond(candidates: &CandidateSet, guess: &Word) -> Result<(Pattern, CandidateSet)> {
    select(partition(candidates, guess)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn respond_matches_manual_selection() {
        let mut candidates = CandidateSet::new(5).unwrap();
        for text in ["crane", "crate", "trace", "slate", "plate"] {
            candidates.insert(Word::new(text).unwrap()).unwrap();
        }
        let guess = Word::new("crane").unwrap();

        let (pattern, remaining) = respond(&candidates, &guess).unwrap();
        let ranked_first = partition(&candidates, &guess).unwrap().ranked()[0].0.clone();
        assert_eq!(pattern, ranked_first);
        assert_eq!(remaining.len(), 2);
    }
}
