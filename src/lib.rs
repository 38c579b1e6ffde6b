//! Absurdle
//!
//! An adversarial word-guessing judge. Instead of picking a secret word up
//! front, the judge keeps every word still consistent with its answers and,
//! for each guess, answers with the pattern that keeps the most words in play.
//!
//! # Quick Start
//!
//! ```rust
//! use absurdle::judge::{Game, GameConfig, GameState};
//! use absurdle::wordlists::{DICTIONARY, prune_dictionary, words_from_slice};
//!
//! let words = words_from_slice(DICTIONARY);
//! let dictionary = prune_dictionary(&words, 5).unwrap();
//! let mut game = Game::new(GameConfig::new(5), dictionary).unwrap();
//!
//! let round = game.guess("crane").unwrap();
//! println!("crane: {}", round.pattern);
//! assert_eq!(game.state(), GameState::InProgress);
//! ```

// Core domain types
pub mod core;

// The adversarial judge and round driver
pub mod judge;

// Automated guessers
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
