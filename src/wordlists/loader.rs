//! Dictionary loading utilities
//!
//! Loads words from files or the embedded list and prunes them to a single
//! word length.

use crate::core::{AbsurdleError, Result, Word};
use crate::judge::CandidateSet;
use std::fs;
use std::path::Path;

/// Load words from a file
///
/// Words are separated by any whitespace. Tokens that are not words are
/// skipped.
///
/// # Errors
///
/// Returns `AbsurdleError::Io` if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use absurdle::wordlists::load_from_file;
///
/// let words = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    Ok(content
        .split_whitespace()
        .filter_map(|token| Word::new(token).ok())
        .collect())
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use absurdle::wordlists::{DICTIONARY, words_from_slice};
///
/// let words = words_from_slice(DICTIONARY);
/// assert_eq!(words.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Keep the words of exactly `length` letters, without duplicates
///
/// The result may be empty; starting a game over it is what fails.
///
/// # Errors
///
/// Returns `AbsurdleError::InvalidConfiguration` if `length` is below 1.
///
/// # Examples
/// ```
/// use absurdle::wordlists::{prune_dictionary, words_from_slice};
///
/// let words = words_from_slice(&["crane", "slate", "cat", "crane"]);
/// let candidates = prune_dictionary(&words, 5).unwrap();
/// assert_eq!(candidates.len(), 2);
/// ```
pub fn prune_dictionary<'a, I>(words: I, length: usize) -> Result<CandidateSet>
where
    I: IntoIterator<Item = &'a Word>,
{
    if length < 1 {
        return Err(AbsurdleError::InvalidConfiguration(
            "word length must be at least 1".to_string(),
        ));
    }

    let mut candidates = CandidateSet::new(length)?;
    for word in words.into_iter().filter(|word| word.len() == length) {
        candidates.insert(word.clone())?;
    }
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::DICTIONARY;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_non_words() {
        let input = &["crane", "cr4ne", "", "absurd"];
        let words = words_from_slice(input);

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "absurd"]);
    }

    #[test]
    fn prune_keeps_only_requested_length() {
        let words = words_from_slice(&["cat", "crane", "slate", "absurd", "Crane"]);
        let candidates = prune_dictionary(&words, 5).unwrap();

        let texts: Vec<&str> = candidates.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate"]);
        assert_eq!(candidates.word_length(), 5);
    }

    #[test]
    fn prune_to_missing_length_is_empty() {
        let words = words_from_slice(&["crane", "slate"]);
        let candidates = prune_dictionary(&words, 12).unwrap();
        assert!(candidates.is_empty());
    }

    #[test]
    fn prune_rejects_zero_length() {
        let words = words_from_slice(&["crane"]);
        assert!(matches!(
            prune_dictionary(&words, 0),
            Err(AbsurdleError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn prune_embedded_dictionary() {
        let words = words_from_slice(DICTIONARY);
        let candidates = prune_dictionary(&words, 5).unwrap();
        assert_eq!(
            candidates.len(),
            DICTIONARY.iter().filter(|w| w.len() == 5).count()
        );
    }

    #[test]
    fn load_from_file_splits_on_whitespace() {
        let path = std::env::temp_dir().join(format!("absurdle-words-{}.txt", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "crane slate\n\n  plate\tbad1 irate").unwrap();
        drop(file);

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate", "plate", "irate"]);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        assert!(matches!(
            load_from_file("/nonexistent/absurdle/words.txt"),
            Err(AbsurdleError::Io(_))
        ));
    }
}
