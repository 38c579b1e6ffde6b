//! Simple console mode
//!
//! Line-oriented Absurdle without the TUI: read a guess after `> `, answer
//! with `: <pattern>`, and print the score and pattern list once the game
//! ends.

use crate::core::Result;
use crate::judge::{Game, GameState};
use crate::output::formatters::{PatternStyle, score_line};
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Run the console game until it ends or input runs out
///
/// Guesses are read as whitespace-separated tokens, so several guesses may
/// share a line. Rejected guesses are reported and do not count as rounds.
///
/// Returns the state the game was left in.
///
/// # Errors
///
/// Returns `AbsurdleError::Io` if reading input or writing output fails.
///
/// # Examples
/// ```
/// use absurdle::commands::run_simple;
/// use absurdle::core::Word;
/// use absurdle::judge::{CandidateSet, Game, GameConfig, GameState};
/// use absurdle::output::formatters::PatternStyle;
///
/// let mut dictionary = CandidateSet::new(3).unwrap();
/// dictionary.insert(Word::new("cat").unwrap()).unwrap();
/// let mut game = Game::new(GameConfig::new(3), dictionary).unwrap();
///
/// let mut output = Vec::new();
/// let state = run_simple(&mut game, PatternStyle::Symbols, "cat\n".as_bytes(), &mut output).unwrap();
///
/// assert_eq!(state, GameState::Won);
/// assert!(String::from_utf8(output).unwrap().contains("Absurdle 1/∞"));
/// ```
pub fn run_simple<R: BufRead, W: Write>(
    game: &mut Game,
    style: PatternStyle,
    mut input: R,
    mut output: W,
) -> Result<GameState> {
    writeln!(output, "Welcome to the game of Absurdle.")?;
    writeln!(
        output,
        "Guess {}-letter words until the judge runs out of excuses.",
        game.config().word_length
    )?;
    writeln!(output)?;

    let mut pending = VecDeque::new();
    while !game.is_finished() {
        write!(output, "> ")?;
        output.flush()?;

        let Some(token) = next_token(&mut input, &mut pending)? else {
            writeln!(output)?;
            return Ok(game.state());
        };

        match game.guess(&token) {
            Ok(round) => {
                writeln!(output, ": {}", style.render(&round.pattern))?;
                writeln!(output)?;
            }
            Err(e) => writeln!(output, "{e}")?,
        }
    }

    if game.state() == GameState::OutOfGuesses {
        writeln!(output, "Out of guesses.")?;
    }
    writeln!(
        output,
        "{}",
        score_line(game.rounds_played(), game.config().max_rounds)
    )?;
    writeln!(output)?;
    for pattern in game.patterns() {
        writeln!(output, "{}", style.render(pattern))?;
    }

    Ok(game.state())
}

/// Next whitespace-separated token, reading more lines as needed
fn next_token<R: BufRead>(input: &mut R, pending: &mut VecDeque<String>) -> Result<Option<String>> {
    while pending.is_empty() {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        pending.extend(line.split_whitespace().map(str::to_string));
    }
    Ok(pending.pop_front())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::judge::{CandidateSet, GameConfig};

    fn crane_game(config: GameConfig) -> Game {
        let mut dictionary = CandidateSet::new(5).unwrap();
        for text in ["crane", "crate", "trace", "slate", "plate"] {
            dictionary.insert(Word::new(text).unwrap()).unwrap();
        }
        Game::new(config, dictionary).unwrap()
    }

    fn play(game: &mut Game, style: PatternStyle, input: &str) -> (GameState, String) {
        let mut output = Vec::new();
        let state = run_simple(game, style, input.as_bytes(), &mut output).unwrap();
        (state, String::from_utf8(output).unwrap())
    }

    #[test]
    fn plays_until_win_and_prints_summary() {
        let mut game = crane_game(GameConfig::new(5));
        let (state, output) = play(&mut game, PatternStyle::Symbols, "crane\nplate\n");

        assert_eq!(state, GameState::Won);
        assert!(output.contains("> : %%!%!\n\n> : !!!!!\n\n"));
        assert!(output.ends_with("Absurdle 2/∞\n\n%%!%!\n!!!!!\n"));
    }

    #[test]
    fn several_guesses_on_one_line() {
        let mut game = crane_game(GameConfig::new(5));
        let (state, _) = play(&mut game, PatternStyle::Symbols, "  crane   plate  \n");
        assert_eq!(state, GameState::Won);
        assert_eq!(game.rounds_played(), 2);
    }

    #[test]
    fn rejected_guesses_do_not_count() {
        let mut game = crane_game(GameConfig::new(5));
        let (state, output) = play(&mut game, PatternStyle::Symbols, "cat\ncr4ne\ncrane\nplate\n");

        assert_eq!(state, GameState::Won);
        assert!(output.contains("Guess must be 5 letters long, got 3"));
        assert!(output.contains("Invalid word 'cr4ne'"));
        assert!(output.contains("Absurdle 2/∞"));
    }

    #[test]
    fn input_ending_early_leaves_game_in_progress() {
        let mut game = crane_game(GameConfig::new(5));
        let (state, output) = play(&mut game, PatternStyle::Symbols, "crane\n");

        assert_eq!(state, GameState::InProgress);
        assert!(!output.contains("Absurdle 1"));
    }

    #[test]
    fn emoji_style() {
        let mut game = crane_game(GameConfig::new(5));
        let (_, output) = play(&mut game, PatternStyle::Emoji, "crane plate");
        assert!(output.contains(": ⬜⬜🟩⬜🟩"));
        assert!(output.ends_with("🟩🟩🟩🟩🟩\n"));
    }

    #[test]
    fn round_cap_reports_out_of_guesses() {
        let mut game = crane_game(GameConfig::new(5).with_max_rounds(Some(1)));
        let (state, output) = play(&mut game, PatternStyle::Symbols, "zzzzz\ncrane\n");

        assert_eq!(state, GameState::OutOfGuesses);
        assert!(output.contains("Out of guesses."));
        assert!(output.contains("Absurdle 1/1"));
    }
}
