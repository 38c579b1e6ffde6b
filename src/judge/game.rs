//! Round driver
//!
//! Owns the candidate set across rounds, applies the judge to each guess and
//! decides when the game is over.

use super::{CandidateSet, respond};
use crate::core::{AbsurdleError, Pattern, Result, Word};

/// Settings for one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Letters per word
    pub word_length: usize,
    /// Optional cap on the number of rounds; `None` plays forever
    pub max_rounds: Option<usize>,
    /// Reject guesses that are not dictionary words
    pub dictionary_guesses_only: bool,
}

impl GameConfig {
    #[must_use]
    pub const fn new(word_length: usize) -> Self {
        Self {
            word_length,
            max_rounds: None,
            dictionary_guesses_only: false,
        }
    }

    #[must_use]
    pub const fn with_max_rounds(mut self, max_rounds: Option<usize>) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    #[must_use]
    pub const fn with_dictionary_guesses_only(mut self, enabled: bool) -> Self {
        self.dictionary_guesses_only = enabled;
        self
    }

    /// Check that a game can be played with these settings
    ///
    /// # Errors
    /// Returns `AbsurdleError::InvalidConfiguration` for a word length below 1
    /// or a round cap of 0.
    pub fn validate(&self) -> Result<()> {
        if self.word_length < 1 {
            return Err(AbsurdleError::InvalidConfiguration(
                "word length must be at least 1".to_string(),
            ));
        }
        if self.max_rounds == Some(0) {
            return Err(AbsurdleError::InvalidConfiguration(
                "max rounds must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(5)
    }
}

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    /// The last pattern was all hits
    Won,
    /// The configured round cap was reached without a win
    OutOfGuesses,
}

/// One played round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub guess: Word,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// A game of Absurdle against the adversarial judge
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    dictionary: CandidateSet,
    candidates: CandidateSet,
    history: Vec<Round>,
    state: GameState,
}

impl Game {
    /// Start a game over `dictionary`
    ///
    /// # Errors
    /// Returns `AbsurdleError::InvalidConfiguration` if the config is invalid
    /// or does not match the dictionary's word length, and
    /// `AbsurdleError::InvalidState` if the dictionary is empty.
    pub fn new(config: GameConfig, dictionary: CandidateSet) -> Result<Self> {
        config.validate()?;
        if dictionary.word_length() != config.word_length {
            return Err(AbsurdleError::InvalidConfiguration(format!(
                "dictionary has {}-letter words but the game wants {}",
                dictionary.word_length(),
                config.word_length
            )));
        }
        if dictionary.is_empty() {
            return Err(AbsurdleError::InvalidState(format!(
                "no {}-letter words in the dictionary",
                config.word_length
            )));
        }

        Ok(Self {
            config,
            candidates: dictionary.clone(),
            dictionary,
            history: Vec::new(),
            state: GameState::InProgress,
        })
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state != GameState::InProgress
    }

    /// Words the judge could still claim as the secret
    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Every word the game was started with
    #[must_use]
    pub const fn dictionary(&self) -> &CandidateSet {
        &self.dictionary
    }

    #[must_use]
    pub fn history(&self) -> &[Round] {
        &self.history
    }

    /// Patterns emitted so far, oldest first
    pub fn patterns(&self) -> impl Iterator<Item = &Pattern> {
        self.history.iter().map(|round| &round.pattern)
    }

    #[must_use]
    pub fn rounds_played(&self) -> usize {
        self.history.len()
    }

    /// Parse `text` and play it as the next guess
    ///
    /// # Errors
    /// Returns `AbsurdleError::InvalidWord` if `text` is not a word, plus
    /// everything [`Game::play`] can return.
    pub fn guess(&mut self, text: &str) -> Result<&Round> {
        let word = Word::new(text)?;
        self.play(word)
    }

    /// Play one round
    ///
    /// The judge answers with the pattern that keeps the most candidates and
    /// the candidate set shrinks to that group.
    ///
    /// # Errors
    /// - `AbsurdleError::InvalidState` if the game is already over
    /// - `AbsurdleError::LengthMismatch` if the guess has the wrong length
    /// - `AbsurdleError::UnknownWord` if dictionary-only guesses are enforced
    ///   and the guess is not in the dictionary
    ///
    /// # Examples
    /// ```
    /// use absurdle::core::Word;
    /// use absurdle::judge::{CandidateSet, Game, GameConfig, GameState};
    ///
    /// let mut dictionary = CandidateSet::new(5).unwrap();
    /// for text in ["crane", "crate", "trace", "slate", "plate"] {
    ///     dictionary.insert(Word::new(text).unwrap()).unwrap();
    /// }
    /// let mut game = Game::new(GameConfig::new(5), dictionary).unwrap();
    ///
    /// let round = game.guess("crane").unwrap();
    /// assert_eq!(round.pattern.to_string(), "%%!%!");
    /// assert_eq!(game.state(), GameState::InProgress);
    /// assert_eq!(game.candidates().len(), 2);
    /// ```
    pub fn play(&mut self, guess: Word) -> Result<&Round> {
        if self.is_finished() {
            return Err(AbsurdleError::InvalidState(
                "the game is already over".to_string(),
            ));
        }
        if guess.len() != self.config.word_length {
            return Err(AbsurdleError::LengthMismatch {
                expected: self.config.word_length,
                actual: guess.len(),
            });
        }
        if self.config.dictionary_guesses_only && !self.dictionary.contains(&guess) {
            return Err(AbsurdleError::UnknownWord(guess.text().to_string()));
        }

        let (pattern, remaining) = respond(&self.candidates, &guess)?;
        let candidates_before = self.candidates.len();
        self.candidates = remaining;

        self.state = if pattern.is_win() {
            GameState::Won
        } else if self
            .config
            .max_rounds
            .is_some_and(|max| self.history.len() + 1 >= max)
        {
            GameState::OutOfGuesses
        } else {
            GameState::InProgress
        };

        self.history.push(Round {
            guess,
            pattern,
            candidates_before,
            candidates_after: self.candidates.len(),
        });
        Ok(&self.history[self.history.len() - 1])
    }

    /// Start over with the full dictionary and the same settings
    pub fn reset(&mut self) {
        self.candidates = self.dictionary.clone();
        self.history.clear();
        self.state = GameState::InProgress;
    }
}
