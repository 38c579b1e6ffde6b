//! Grouping of a candidate set by the pattern each word yields for a guess

use super::CandidateSet;
use super::selector::selection_order;
use crate::core::{AbsurdleError, Pattern, Result, Word, evaluate};
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;

/// Candidates grouped by the pattern they would produce against one guess
///
/// Groups are disjoint and together hold every candidate that was partitioned.
#[derive(Debug, Clone)]
pub struct Partition {
    guess: Word,
    groups: FxHashMap<Pattern, CandidateSet>,
}

/// Group every candidate by its pattern against `guess`
///
/// Each candidate is evaluated exactly once.
///
/// # Errors
/// Returns `AbsurdleError::InvalidState` if `candidates` is empty or its word
/// length differs from the guess length.
///
/// # Examples
/// ```
/// use absurdle::core::Word;
/// use absurdle::judge::{CandidateSet, partition};
///
/// let mut candidates = CandidateSet::new(5).unwrap();
/// for text in ["slate", "plate", "crate"] {
///     candidates.insert(Word::new(text).unwrap()).unwrap();
/// }
///
/// let groups = partition(&candidates, &Word::new("crane").unwrap()).unwrap();
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups.total_words(), 3);
/// ```
pub fn partition(candidates: &CandidateSet, guess: &Word) -> Result<Partition> {
    if candidates.is_empty() {
        return Err(AbsurdleError::InvalidState(
            "cannot partition an empty candidate set".to_string(),
        ));
    }
    if candidates.word_length() != guess.len() {
        return Err(AbsurdleError::InvalidState(format!(
            "candidates have {} letters but the guess has {}",
            candidates.word_length(),
            guess.len()
        )));
    }

    let mut groups: FxHashMap<Pattern, CandidateSet> = FxHashMap::default();
    for word in candidates {
        let pattern = evaluate(word, guess)?;
        let group = match groups.entry(pattern) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(CandidateSet::new(guess.len())?),
        };
        group.insert(word.clone())?;
    }

    Ok(Partition {
        guess: guess.clone(),
        groups,
    })
}

impl Partition {
    /// The guess the candidates were grouped by
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    /// Number of distinct patterns
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Words that produce `pattern`, if any
    #[must_use]
    pub fn group(&self, pattern: &Pattern) -> Option<&CandidateSet> {
        self.groups.get(pattern)
    }

    /// Total number of words across all groups
    #[must_use]
    pub fn total_words(&self) -> usize {
        self.groups.values().map(CandidateSet::len).sum()
    }

    /// Iterate groups in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&Pattern, &CandidateSet)> {
        self.groups.iter()
    }

    /// Groups ordered the way the judge prefers them: largest first, then by
    /// smallest pattern
    #[must_use]
    pub fn ranked(&self) -> Vec<(&Pattern, &CandidateSet)> {
        let mut ranked: Vec<_> = self.groups.iter().collect();
        ranked.sort_by(|a, b| selection_order((a.0, a.1.len()), (b.0, b.1.len())));
        ranked
    }

    pub(crate) fn into_groups(self) -> impl Iterator<Item = (Pattern, CandidateSet)> {
        self.groups.into_iter()
    }
}
