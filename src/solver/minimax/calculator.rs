//! Adversarial outcome of a guess
//!
//! Predicts which group the judge would keep for a guess without building the
//! groups themselves.

use crate::core::{Pattern, Word, evaluate};
use crate::judge::{CandidateSet, selection_order};
use rustc_hash::FxHashMap;

/// The pattern the judge would answer `guess` with, and how many candidates
/// would survive
///
/// Returns `None` if `candidates` is empty or the guess length does not match.
///
/// # Examples
/// ```
/// use absurdle::core::Word;
/// use absurdle::judge::CandidateSet;
/// use absurdle::solver::minimax::adversarial_outcome;
///
/// let mut candidates = CandidateSet::new(5).unwrap();
/// for text in ["crane", "crate", "trace", "slate", "plate"] {
///     candidates.insert(Word::new(text).unwrap()).unwrap();
/// }
///
/// let (pattern, remaining) = adversarial_outcome(&Word::new("crane").unwrap(), &candidates).unwrap();
/// assert_eq!(pattern.to_string(), "%%!%!");
/// assert_eq!(remaining, 2);
/// ```
#[must_use]
pub fn adversarial_outcome(guess: &Word, candidates: &CandidateSet) -> Option<(Pattern, usize)> {
    if candidates.word_length() != guess.len() {
        return None;
    }

    group_sizes(guess, candidates)
        .into_iter()
        .reduce(|best, next| {
            if selection_order((&next.0, next.1), (&best.0, best.1)).is_lt() {
                next
            } else {
                best
            }
        })
}

/// Count how many candidates produce each pattern against the guess
fn group_sizes(guess: &Word, candidates: &CandidateSet) -> FxHashMap<Pattern, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        if let Ok(pattern) = evaluate(candidate, guess) {
            *counts.entry(pattern).or_insert(0) += 1;
        }
    }

    counts
}
