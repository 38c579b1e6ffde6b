//! Absurdle word representation
//!
//! A Word stores a lower-cased word of any length along with its letters for
//! position-wise comparison.

use super::{AbsurdleError, Result};
use rustc_hash::FxHashMap;
use std::fmt;

/// A dictionary word or a guess
///
/// Words are ordered alphabetically by their text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
    letters: Vec<char>,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and the word is lower-cased.
    ///
    /// # Errors
    /// Returns `AbsurdleError::InvalidWord` if the text is empty or contains
    /// anything other than alphabetic characters that lower-case to a single
    /// letter.
    ///
    /// # Examples
    /// ```
    /// use absurdle::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("cr4ne").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self> {
        let raw = text.as_ref().trim();
        let invalid = || AbsurdleError::InvalidWord(raw.to_string());

        if raw.is_empty() {
            return Err(invalid());
        }

        let letters: Vec<char> = raw
            .chars()
            .map(|c| lowercase_letter(c).ok_or_else(invalid))
            .collect::<Result<_>>()?;
        let text = letters.iter().collect();

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters of the word in order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false: words are never empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Count occurrences of each letter
    #[must_use]
    pub fn letter_counts(&self) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for &letter in &self.letters {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

/// Lower-case `c`, as long as it stays a single alphabetic char
///
/// Letters such as 'İ' lower-case to more than one char and are rejected.
#[must_use]
pub fn lowercase_letter(c: char) -> Option<char> {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(letter), None) if letter.is_alphabetic() => Some(letter),
        _ => None,
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
