//! Adversarial group selection
//!
//! The judge keeps whichever group reveals the least: the one with the most
//! words. Among equally large groups it keeps the one with the smallest
//! pattern under `Hit < Present < Miss`.

use super::{CandidateSet, Partition};
use crate::core::{AbsurdleError, Pattern, Result};
use std::cmp::Ordering;

/// Order two groups by how much the judge prefers them
///
/// `Ordering::Less` means `a` is preferred: larger groups first, then smaller
/// patterns. Distinct patterns never compare equal, so the order is total.
#[must_use]
pub fn selection_order(a: (&Pattern, usize), b: (&Pattern, usize)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0))
}

/// Pick the least informative group of a partition
///
/// Returns the pattern the judge answers with and the words that remain.
/// The result does not depend on the partition's iteration order.
///
/// # Errors
/// Returns `AbsurdleError::InvalidState` if the partition has no groups.
///
/// # Examples
/// ```
/// use absurdle::core::Word;
/// use absurdle::judge::{CandidateSet, partition, select};
///
/// let mut candidates = CandidateSet::new(5).unwrap();
/// for text in ["crane", "crate", "trace", "slate", "plate"] {
///     candidates.insert(Word::new(text).unwrap()).unwrap();
/// }
///
/// let groups = partition(&candidates, &Word::new("crane").unwrap()).unwrap();
/// let (pattern, remaining) = select(groups).unwrap();
///
/// assert_eq!(pattern.to_string(), "%%!%!");
/// assert_eq!(remaining.len(), 2);
/// ```
pub fn select(partition: Partition) -> Result<(Pattern, CandidateSet)> {
    partition
        .into_groups()
        .reduce(|best, next| {
            if selection_order((&next.0, next.1.len()), (&best.0, best.1.len())).is_lt() {
                next
            } else {
                best
            }
        })
        .ok_or_else(|| AbsurdleError::InvalidState("no groups to select from".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Symbol::{Hit, Miss, Present};
    use crate::core::Word;
    use crate::judge::partition;

    fn candidates(words: &[&str]) -> CandidateSet {
        let mut set = CandidateSet::new(words[0].len()).unwrap();
        for text in words {
            set.insert(Word::new(text).unwrap()).unwrap();
        }
        set
    }

    fn judge(words: &[&str], guess: &str) -> (Pattern, CandidateSet) {
        let set = candidates(words);
        select(partition(&set, &Word::new(guess).unwrap()).unwrap()).unwrap()
    }

    #[test]
    fn keeps_largest_group() {
        let (pattern, remaining) = judge(&["crane", "crate", "trace", "slate", "plate"], "crane");

        assert_eq!(pattern.symbols(), &[Miss, Miss, Hit, Miss, Hit]);
        let texts: Vec<&str> = remaining.iter().map(Word::text).collect();
        assert_eq!(texts, ["plate", "slate"]);
    }

    #[test]
    fn tie_goes_to_smallest_pattern() {
        // !!!%! for crate beats *!!%! for trace
        let (pattern, remaining) = judge(&["crate", "trace"], "crane");

        assert_eq!(pattern.symbols(), &[Hit, Hit, Hit, Miss, Hit]);
        assert_eq!(remaining.len(), 1);
        assert!(remaining.contains(&Word::new("crate").unwrap()));
    }

    #[test]
    fn tie_between_all_hits_and_others_reveals_win() {
        // Every group is a singleton and all hits sorts first
        let (pattern, remaining) = judge(&["crane", "slate"], "crane");

        assert!(pattern.is_win());
        assert_eq!(remaining.len(), 1);
    }

    #[test]
    fn guess_outside_candidates_can_never_win() {
        let (pattern, remaining) = judge(&["abc", "abd", "xyz"], "abe");

        assert_eq!(pattern.symbols(), &[Hit, Hit, Miss]);
        assert_eq!(remaining.len(), 2);
    }

    #[test]
    fn present_beats_miss_on_ties() {
        let (pattern, remaining) = judge(&["bax", "xxc"], "abc");

        // bax -> **% and xxc -> %%!, both singletons
        assert_eq!(pattern.symbols(), &[Present, Present, Miss]);
        assert_eq!(remaining.iter().next().unwrap().text(), "bax");
    }

    #[test]
    fn selected_group_is_maximal_and_subset() {
        let words = [
            "crane", "crate", "trace", "slate", "plate", "grace", "brace", "stare", "adore",
            "arose", "raise", "snare",
        ];
        let set = candidates(&words);
        for guess in ["crane", "adieu", "zzzzz", "roate"] {
            let groups = partition(&set, &Word::new(guess).unwrap()).unwrap();
            let largest = groups.iter().map(|(_, g)| g.len()).max().unwrap();
            let (pattern, remaining) = select(groups.clone()).unwrap();

            assert_eq!(remaining.len(), largest);
            assert!(remaining.is_subset(&set));
            assert_eq!(groups.group(&pattern), Some(&remaining));
            for (other, group) in groups.iter() {
                if group.len() == largest {
                    assert!(pattern <= *other);
                }
            }
        }
    }

    #[test]
    fn selection_order_is_total() {
        let small: Pattern = "!!%".parse().unwrap();
        let large: Pattern = "%%%".parse().unwrap();

        assert_eq!(selection_order((&small, 3), (&large, 2)), Ordering::Less);
        assert_eq!(selection_order((&large, 3), (&small, 3)), Ordering::Greater);
        assert_eq!(selection_order((&small, 3), (&small, 3)), Ordering::Equal);
    }
}
