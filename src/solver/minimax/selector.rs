//! Minimax guess selection against the adversarial judge
//!
//! Picks the guess whose worst case, the group the judge keeps, is smallest.

use super::calculator::adversarial_outcome;
use crate::core::Word;
use crate::judge::CandidateSet;
use rayon::prelude::*;

/// Select the guess that leaves the judge the fewest words
///
/// Ties prefer guesses that are still candidates (they can win outright), then
/// alphabetical order. Guesses of the wrong length are ignored.
///
/// Returns the chosen guess and the number of candidates the judge would keep,
/// or `None` if no guess in the pool is usable.
///
/// # Examples
/// ```
/// use absurdle::core::Word;
/// use absurdle::judge::CandidateSet;
/// use absurdle::solver::minimax::select_best_guess;
///
/// let guesses = vec![Word::new("zzzzz").unwrap(), Word::new("crane").unwrap()];
/// let mut candidates = CandidateSet::new(5).unwrap();
/// for text in ["slate", "crate", "trace"] {
///     candidates.insert(Word::new(text).unwrap()).unwrap();
/// }
///
/// let (best, remaining) = select_best_guess(&guesses, &candidates).unwrap();
/// assert_eq!(best.text(), "crane");
/// assert_eq!(remaining, 1);
/// ```
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &'a [Word],
    candidates: &CandidateSet,
) -> Option<(&'a Word, usize)> {
    guess_pool
        .par_iter()
        .filter_map(|guess| {
            adversarial_outcome(guess, candidates).map(|(_, remaining)| (guess, remaining))
        })
        .min_by(|(a, a_remaining), (b, b_remaining)| {
            a_remaining
                .cmp(b_remaining)
                .then_with(|| candidates.contains(b).cmp(&candidates.contains(a)))
                .then_with(|| a.cmp(b))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    fn candidates(texts: &[&str]) -> CandidateSet {
        let mut set = CandidateSet::new(texts[0].len()).unwrap();
        for word in words(texts) {
            set.insert(word).unwrap();
        }
        set
    }

    #[test]
    fn selects_smallest_adversarial_outcome() {
        let guesses = words(&["zzzzz", "crane"]);
        let set = candidates(&["slate", "irate", "crate", "grate"]);

        let (best, remaining) = select_best_guess(&guesses, &set).unwrap();
        assert_eq!(best.text(), "crane");
        assert!(remaining < 4);
    }

    #[test]
    fn ties_prefer_candidates() {
        // Both guesses leave one word, only slate can win
        let guesses = words(&["aaaaa", "slate"]);
        let set = candidates(&["slate"]);

        let (best, remaining) = select_best_guess(&guesses, &set).unwrap();
        assert_eq!(best.text(), "slate");
        assert_eq!(remaining, 1);
    }

    #[test]
    fn remaining_ties_are_alphabetical() {
        let guesses = words(&["zzzzz", "yyyyy", "xxxxx"]);
        let set = candidates(&["aaaaa", "bbbbb"]);

        for _ in 0..5 {
            let (best, remaining) = select_best_guess(&guesses, &set).unwrap();
            assert_eq!(best.text(), "xxxxx");
            assert_eq!(remaining, 2);
        }
    }

    #[test]
    fn candidate_guess_always_makes_progress() {
        let set = candidates(&["crane", "crate", "trace", "slate", "plate", "grace"]);
        let pool: Vec<Word> = set.iter().cloned().collect();

        let (_, remaining) = select_best_guess(&pool, &set).unwrap();
        assert!(remaining < set.len());
    }

    #[test]
    fn returns_none_without_usable_guesses() {
        let set = candidates(&["slate"]);
        assert!(select_best_guess(&[], &set).is_none());
        assert!(select_best_guess(&words(&["cat"]), &set).is_none());
    }
}
