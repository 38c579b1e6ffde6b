//! Word analysis command
//!
//! Shows how the judge would split the candidates for one guess.

use crate::core::{AbsurdleError, Pattern, Result, Word};
use crate::judge::{CandidateSet, partition};

/// One group of the split
pub struct GroupSummary {
    pub pattern: Pattern,
    pub size: usize,
    /// First few words of the group, alphabetically
    pub sample: Vec<String>,
}

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub total_candidates: usize,
    pub group_count: usize,
    /// Largest groups first, in the judge's preference order
    pub groups: Vec<GroupSummary>,
    /// The pattern the judge would answer with
    pub response: Pattern,
    /// Candidates left after that answer
    pub remaining: usize,
}

const SAMPLE_SIZE: usize = 5;

/// Analyze how `word` splits `candidates`
///
/// At most `top` groups are summarized.
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid or has the wrong length
/// - There are no candidates
pub fn analyze_word(word: &str, candidates: &CandidateSet, top: usize) -> Result<AnalysisResult> {
    let guess = Word::new(word)?;
    if guess.len() != candidates.word_length() {
        return Err(AbsurdleError::LengthMismatch {
            expected: candidates.word_length(),
            actual: guess.len(),
        });
    }

    let groups = partition(candidates, &guess)?;
    let ranked = groups.ranked();

    let (response, remaining) = ranked
        .first()
        .map(|(pattern, group)| ((*pattern).clone(), group.len()))
        .ok_or_else(|| AbsurdleError::InvalidState("no groups to analyze".to_string()))?;

    let summaries = ranked
        .iter()
        .take(top)
        .map(|(pattern, group)| GroupSummary {
            pattern: (*pattern).clone(),
            size: group.len(),
            sample: group
                .iter()
                .take(SAMPLE_SIZE)
                .map(|w| w.text().to_string())
                .collect(),
        })
        .collect();

    Ok(AnalysisResult {
        word: guess.text().to_string(),
        total_candidates: candidates.len(),
        group_count: groups.len(),
        groups: summaries,
        response,
        remaining,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{prune_dictionary, words_from_slice};

    fn candidates() -> CandidateSet {
        let words = words_from_slice(&["crane", "crate", "trace", "slate", "plate"]);
        prune_dictionary(&words, 5).unwrap()
    }

    #[test]
    fn analyze_crane() {
        let result = analyze_word("CRANE", &candidates(), 10).unwrap();

        assert_eq!(result.word, "crane");
        assert_eq!(result.total_candidates, 5);
        assert_eq!(result.group_count, 4);
        assert_eq!(result.response.to_string(), "%%!%!");
        assert_eq!(result.remaining, 2);
        assert_eq!(result.groups[0].sample, ["plate", "slate"]);
    }

    #[test]
    fn analyze_limits_groups() {
        let result = analyze_word("crane", &candidates(), 2).unwrap();
        assert_eq!(result.groups.len(), 2);
        assert_eq!(result.groups[0].size, 2);
        assert_eq!(result.groups[1].pattern.to_string(), "!!!!!");
    }

    #[test]
    fn analyze_word_outside_dictionary() {
        let result = analyze_word("zzzzz", &candidates(), 3).unwrap();
        assert_eq!(result.group_count, 1);
        assert_eq!(result.remaining, 5);
    }

    #[test]
    fn analyze_invalid_word() {
        assert!(matches!(
            analyze_word("cat", &candidates(), 3),
            Err(AbsurdleError::LengthMismatch { .. })
        ));
        assert!(matches!(
            analyze_word("cr4ne", &candidates(), 3),
            Err(AbsurdleError::InvalidWord(_))
        ));
    }
}
