//! Error type shared by the judge, the driver and the word list loaders

use thiserror::Error;

/// Errors surfaced by Absurdle operations
///
/// These are usage errors rather than transient faults: nothing is retried and
/// nothing is silently corrected. The caller decides how to report them.
#[derive(Debug, Error)]
pub enum AbsurdleError {
    /// A guess and a word (or the game's word length) disagree on length
    #[error("Guess must be {expected} letters long, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// An operation was invoked on state it cannot work with
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// The requested game configuration cannot be played
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Input text is not a word (empty or non-alphabetic)
    #[error("Invalid word '{0}': words must consist of letters only")]
    InvalidWord(String),

    /// A guess outside the dictionary while dictionary-only guesses are enforced
    #[error("'{0}' is not in the dictionary")]
    UnknownWord(String),

    /// The dictionary could not be read
    #[error("Failed to read word list: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, AbsurdleError>;
