//! TUI application state and logic

use crate::core::{Word, lowercase_letter};
use crate::judge::{Game, GameState};
use crate::output::formatters::{PatternStyle, score_line};
use crate::solver::minimax::adversarial_outcome;
use crate::solver::{MinimaxStrategy, Solver};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub game: Game,
    pub solver: Solver<'a, MinimaxStrategy>,
    pub style: PatternStyle,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub hint: Option<HintInfo>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

/// Suggested guess and what the judge would do with it
#[derive(Debug, Clone)]
pub struct HintInfo {
    pub word: String,
    pub response: String,
    pub remaining: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub best_rounds: Option<usize>,
}

impl<'a> App<'a> {
    /// Create the app around a fresh game
    ///
    /// `guess_pool` is what hints are chosen from.
    #[must_use]
    pub fn new(game: Game, guess_pool: &'a [Word], style: PatternStyle) -> Self {
        let word_length = game.config().word_length;

        Self {
            game,
            solver: Solver::new(MinimaxStrategy, guess_pool),
            style,
            input_mode: InputMode::Guessing,
            input_buffer: String::new(),
            hint: None,
            messages: vec![
                Message {
                    text: "Welcome to Absurdle! The judge never commits to a word.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: format!("Type a {word_length}-letter guess and press Enter"),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    pub fn submit_guess(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        self.hint = None;

        let (pattern, remaining) = match self.game.guess(&input) {
            Ok(round) => (self.style.render(&round.pattern), round.candidates_after),
            Err(e) => {
                let text = e.to_string();
                self.add_message(&text, MessageStyle::Error);
                return;
            }
        };

        match self.game.state() {
            GameState::Won => {
                let rounds = self.game.rounds_played();
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                self.stats.best_rounds =
                    Some(self.stats.best_rounds.map_or(rounds, |best| best.min(rounds)));
                self.input_mode = InputMode::GameOver;

                self.add_message(
                    &format!(
                        "🎉 {} {}",
                        input.to_uppercase(),
                        score_line(rounds, self.game.config().max_rounds)
                    ),
                    MessageStyle::Success,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            GameState::OutOfGuesses => {
                self.stats.total_games += 1;
                self.input_mode = InputMode::GameOver;

                self.add_message(
                    &format!("Out of guesses! {remaining} words were still possible."),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            GameState::InProgress => {
                self.add_message(
                    &format!("{} {pattern}: {remaining} words remain", input.to_uppercase()),
                    MessageStyle::Info,
                );
            }
        }
    }

    /// Ask the solver for the guess that leaves the judge the fewest words
    pub fn compute_hint(&mut self) {
        let candidates = self.game.candidates();
        let hint = self.solver.next_guess(candidates).and_then(|word| {
            adversarial_outcome(word, candidates).map(|(pattern, remaining)| HintInfo {
                word: word.text().to_string(),
                response: self.style.render(&pattern),
                remaining,
            })
        });

        match hint {
            Some(info) => {
                self.add_message(
                    &format!("Hint: {} leaves {}", info.word.to_uppercase(), info.remaining),
                    MessageStyle::Info,
                );
                self.hint = Some(info);
            }
            None => self.add_message("No hint available", MessageStyle::Error),
        }
    }

    pub fn new_game(&mut self) {
        if self.input_mode == InputMode::Guessing && self.game.rounds_played() > 0 {
            self.stats.total_games += 1;
        }
        self.game.reset();
        self.hint = None;
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn get_candidates_count(&self) -> usize {
        self.game.candidates().len()
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.new_game();
                }
                KeyCode::Tab => self.compute_hint(),
                KeyCode::Char(_)
                    if key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {}
                KeyCode::Char(c) => {
                    if self.input_buffer.chars().count() < self.game.config().word_length
                        && let Some(letter) = lowercase_letter(c)
                    {
                        self.input_buffer.push(letter);
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
