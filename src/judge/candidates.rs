//! The set of words still consistent with every answer given so far

use crate::core::{AbsurdleError, Result, Word};
use std::collections::BTreeSet;
use std::collections::btree_set;

/// A set of words that all share one length
///
/// Iteration is alphabetical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    word_length: usize,
    words: BTreeSet<Word>,
}

impl CandidateSet {
    /// Create an empty set for words of `word_length` letters
    ///
    /// # Errors
    /// Returns `AbsurdleError::InvalidConfiguration` if `word_length` is 0.
    pub fn new(word_length: usize) -> Result<Self> {
        if word_length < 1 {
            return Err(AbsurdleError::InvalidConfiguration(
                "word length must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            word_length,
            words: BTreeSet::new(),
        })
    }

    /// Add a word, returning whether it was new
    ///
    /// # Errors
    /// Returns `AbsurdleError::LengthMismatch` if the word has the wrong length.
    pub fn insert(&mut self, word: Word) -> Result<bool> {
        if word.len() != self.word_length {
            return Err(AbsurdleError::LengthMismatch {
                expected: self.word_length,
                actual: word.len(),
            });
        }
        Ok(self.words.insert(word))
    }

    /// Length shared by every word in the set
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Number of words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Iterate words in alphabetical order
    pub fn iter(&self) -> btree_set::Iter<'_, Word> {
        self.words.iter()
    }

    /// Check that every word here is also in `other`
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.word_length == other.word_length && self.words.is_subset(&other.words)
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Word;
    type IntoIter = btree_set::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

impl IntoIterator for CandidateSet {
    type Item = Word;
    type IntoIter = btree_set::IntoIter<Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}
