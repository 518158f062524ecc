//! TUI application state and logic

use crate::core::{GameSession, GuessOutcome, Stage};
use crate::output::formatters::describe_outcome;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Application state
pub struct App<'a> {
    pub session: GameSession<'a>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Totals for this run of the program
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_played: usize,
    pub rounds_won: usize,
    pub best_score: u32,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(session: GameSession<'a>) -> Self {
        Self {
            session,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Welcome! Guess the secret word one letter at a time.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Dispatch a key press according to the current stage
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.session.stage() {
            Stage::Start => match key.code {
                KeyCode::Enter => self.start_game(),
                KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            Stage::Playing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => {
                    // Single-letter input box
                    if self.input_buffer.is_empty() && !c.is_whitespace() {
                        self.input_buffer.push(c);
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
            Stage::Ended => match key.code {
                KeyCode::Enter => self.retry(),
                KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
        }
    }

    pub fn start_game(&mut self) {
        if self.session.start_game() {
            self.messages.clear();
            self.add_message(
                "New game! Type a letter and press Enter.",
                MessageStyle::Info,
            );
        }
    }

    pub fn submit_guess(&mut self) {
        let Some(letter) = self.input_buffer.chars().next() else {
            self.add_message("Type a letter first!", MessageStyle::Error);
            return;
        };
        self.input_buffer.clear();

        let outcome = self.session.verify_letter(letter);
        debug!(%letter, ?outcome, "guess submitted");

        let style = match &outcome {
            GuessOutcome::Hit(_) | GuessOutcome::RoundWon { .. } => MessageStyle::Success,
            GuessOutcome::Miss(_) | GuessOutcome::GameOver { .. } => MessageStyle::Error,
            GuessOutcome::Repeated(_) | GuessOutcome::Ignored => MessageStyle::Info,
        };

        match &outcome {
            GuessOutcome::RoundWon { score, .. } => {
                self.stats.rounds_won += 1;
                self.stats.best_score = self.stats.best_score.max(*score);
            }
            GuessOutcome::GameOver { score, .. } => {
                self.stats.games_played += 1;
                self.stats.best_score = self.stats.best_score.max(*score);
            }
            _ => {}
        }

        if let Some(text) = describe_outcome(&outcome) {
            self.add_message(&text, style);
        }
    }

    pub fn retry(&mut self) {
        if self.session.retry() {
            self.input_buffer.clear();
            self.messages.clear();
            self.add_message("Press Enter to play again.", MessageStyle::Info);
        }
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
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
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
