//! Formatting utilities for terminal output

use crate::core::Pattern;
use std::str::FromStr;

/// How patterns are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatternStyle {
    /// `!` hit, `*` present, `%` miss
    #[default]
    Symbols,
    /// Colored squares
    Emoji,
}

impl PatternStyle {
    #[must_use]
    pub fn render(self, pattern: &Pattern) -> String {
        match self {
            Self::Symbols => pattern_to_symbols(pattern),
            Self::Emoji => pattern_to_emoji(pattern),
        }
    }
}

impl FromStr for PatternStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "symbols" | "glyphs" => Ok(Self::Symbols),
            "emoji" => Ok(Self::Emoji),
            other => Err(format!("Unknown pattern style '{other}' (expected symbols or emoji)")),
        }
    }
}

/// Format a pattern as `!*%` glyphs
#[must_use]
pub fn pattern_to_symbols(pattern: &Pattern) -> String {
    pattern.to_string()
}

/// Format a pattern as emoji string
#[must_use]
pub fn pattern_to_emoji(pattern: &Pattern) -> String {
    pattern.symbols().iter().map(|symbol| symbol.emoji()).collect()
}

/// The closing score line, e.g. `Absurdle 4/∞`
#[must_use]
pub fn score_line(rounds: usize, max_rounds: Option<usize>) -> String {
    match max_rounds {
        Some(max) => format!("Absurdle {rounds}/{max}"),
        None => format!("Absurdle {rounds}/∞"),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
