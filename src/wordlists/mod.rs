//! Word lists for Absurdle
//!
//! The embedded dictionary holds words of several lengths; a game prunes it
//! down to the words of the length being played.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
pub use loader::{load_from_file, prune_dictionary, words_from_slice};
