//! Absurdle feedback pattern calculation and representation
//!
//! A pattern holds one [`Symbol`] per guess position:
//! - `Hit`: letter correct and in the correct position
//! - `Present`: letter occurs elsewhere in the word
//! - `Miss`: letter does not occur (after Hits and Presents are accounted for)
//!
//! Symbols are ordered `Hit < Present < Miss` and patterns compare
//! lexicographically, position by position. The judge's tie-break relies on
//! this ordering.

use super::{AbsurdleError, Result, Word};
use std::fmt;

/// Feedback for a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    Hit,
    Present,
    Miss,
}

impl Symbol {
    /// Classic Absurdle glyph: `!` hit, `*` present, `%` miss
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Hit => '!',
            Self::Present => '*',
            Self::Miss => '%',
        }
    }

    /// Colored square for sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Hit => '🟩',
            Self::Present => '🟨',
            Self::Miss => '⬜',
        }
    }

    /// Parse a single feedback character
    ///
    /// Accepts glyphs (`!*%`), letters (`G`/`Y`/`-`) and emoji squares.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '!' | 'G' | 'g' | '🟩' => Some(Self::Hit),
            '*' | 'Y' | 'y' | '🟨' => Some(Self::Present),
            '%' | '-' | '_' | '⬜' | '⬛' => Some(Self::Miss),
            _ => None,
        }
    }
}

/// Feedback pattern for one guess, one symbol per position
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pattern(Vec<Symbol>);

impl Pattern {
    /// Create a pattern from its symbols
    #[must_use]
    pub const fn new(symbols: Vec<Symbol>) -> Self {
        Self(symbols)
    }

    /// The winning pattern for a word length
    #[must_use]
    pub fn all_hits(len: usize) -> Self {
        Self(vec![Symbol::Hit; len])
    }

    /// Symbols in guess order
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True only for the pattern of an empty guess
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is a hit
    ///
    /// An empty pattern is never a win.
    #[must_use]
    pub fn is_win(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&symbol| symbol == Symbol::Hit)
    }

    /// Count the positions holding `symbol`
    #[must_use]
    pub fn count(&self, symbol: Symbol) -> usize {
        self.0.iter().filter(|&&s| s == symbol).count()
    }
}

/// Calculate the pattern `guess` earns when `word` is the secret
///
/// Duplicate letters are handled the standard way:
/// 1. Hit pass: exact position matches consume both letters
/// 2. Present pass: left to right over the remaining guess positions, each
///    letter consumes the first unconsumed occurrence in `word`, if any
/// 3. Miss pass: everything left over
///
/// # Errors
/// Returns `AbsurdleError::LengthMismatch` if the lengths differ.
///
/// # Examples
/// ```
/// use absurdle::core::{Symbol, Word, evaluate};
///
/// let word = Word::new("crate").unwrap();
/// let guess = Word::new("crane").unwrap();
/// let pattern = evaluate(&word, &guess).unwrap();
///
/// use Symbol::{Hit, Miss};
/// assert_eq!(pattern.symbols(), &[Hit, Hit, Hit, Miss, Hit]);
/// assert_eq!(pattern.to_string(), "!!!%!");
/// ```
pub fn evaluate(word: &Word, guess: &Word) -> Result<Pattern> {
    if word.len() != guess.len() {
        return Err(AbsurdleError::LengthMismatch {
            expected: word.len(),
            actual: guess.len(),
        });
    }

    let mut marks: Vec<Option<Symbol>> = vec![None; guess.len()];
    let mut pool: Vec<Option<char>> = word.letters().iter().copied().map(Some).collect();

    // Hit pass
    for ((mark, slot), &letter) in marks.iter_mut().zip(pool.iter_mut()).zip(guess.letters()) {
        if *slot == Some(letter) {
            *mark = Some(Symbol::Hit);
            *slot = None;
        }
    }

    // Present pass
    for (mark, &letter) in marks.iter_mut().zip(guess.letters()) {
        if mark.is_some() {
            continue;
        }
        if let Some(slot) = pool.iter_mut().find(|slot| **slot == Some(letter)) {
            *slot = None;
            *mark = Some(Symbol::Present);
        }
    }

    // Miss pass
    Ok(Pattern(
        marks
            .into_iter()
            .map(|mark| mark.unwrap_or(Symbol::Miss))
            .collect(),
    ))
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            write!(f, "{}", symbol.glyph())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    /// Parse a pattern such as `"!*%%!"`, `"GY--G"` or `"🟩🟨⬜⬜🟩"`
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let symbols = s
            .trim()
            .chars()
            .map(Symbol::from_char)
            .collect::<Option<Vec<Symbol>>>()
            .ok_or_else(|| format!("Invalid pattern string: {s}"))?;

        if symbols.is_empty() {
            return Err("Empty pattern string".to_string());
        }
        Ok(Self(symbols))
    }
}
