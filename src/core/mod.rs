//! Core domain types for Absurdle
//!
//! Words, feedback patterns and the error type. Everything here is pure and
//! independent of how a game is driven.

mod error;
mod pattern;
mod word;

pub use error::{AbsurdleError, Result};
pub use pattern::{Pattern, Symbol, evaluate};
pub use word::{Word, lowercase_letter};
