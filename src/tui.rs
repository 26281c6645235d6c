//! TUI (Terminal User Interface) module for the Wordle game
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # Architecture
//! - `BoardState`: everything drawn on screen, plus key handling, independent of the terminal
//! - `TuiInterface`: owns the terminal and implements `GameInterface` for the game loop
//!
//! # Input
//! While a game runs, letters fill the input row, Backspace deletes and Enter submits.
//! Once the game is won or lost, `N` starts a new game. Esc quits at any time.

use crate::engine::GameConfig;
use crate::feedback::{LetterFeedback, LetterStatus};
use crate::game_state::{GameInterface, Rejection, UserAction};
use crate::{debug_log, info_log, warn_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

/// Tile colors as (background, foreground).
fn status_colors(status: LetterStatus) -> (Color, Color) {
    match status {
        LetterStatus::Correct => (Color::Green, Color::Black),
        LetterStatus::Present => (Color::Yellow, Color::Black),
        LetterStatus::Absent => (Color::Gray, Color::White),
    }
}

const PENDING_COLORS: (Color, Color) = (Color::DarkGray, Color::White);

fn tile(letter: char, (bg, fg): (Color, Color)) -> Span<'static> {
    Span::styled(format!(" {letter} "), Style::default().fg(fg).bg(bg))
}

/// Screen model for one game.
#[derive(Debug, Clone)]
pub struct BoardState {
    word_length: usize,
    max_guesses: usize,
    rows: Vec<Vec<LetterFeedback>>,
    current_input: String,
    message: String,
    error_message: String,
    finished: bool,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

impl BoardState {
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            word_length: config.word_length,
            max_guesses: config.max_guesses,
            rows: Vec::new(),
            current_input: String::new(),
            message: String::new(),
            error_message: String::new(),
            finished: false,
        }
    }

    fn reset(&mut self) {
        self.rows.clear();
        self.current_input.clear();
        self.error_message.clear();
        self.finished = false;
    }

    /// Apply a key press. Returns an action once the player submits, quits or restarts.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<UserAction> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if key.modifiers.intersects(KeyModifiers::ALT | KeyModifiers::CONTROL) {
            debug_log!("handle_key() - Ignoring key with modifier: {:?}", key.modifiers);
            return None;
        }
        if key.code == KeyCode::Esc {
            info_log!("handle_key() - ESC pressed, returning Exit");
            return Some(UserAction::Exit);
        }
        if self.finished {
            return match key.code {
                KeyCode::Char('n' | 'N') => Some(UserAction::NewGame),
                KeyCode::Char('q' | 'Q') => Some(UserAction::Exit),
                _ => None,
            };
        }

        self.error_message.clear();
        match key.code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                if self.current_input.len() < self.word_length {
                    self.current_input.push(c.to_ascii_uppercase());
                }
            }
            KeyCode::Char(c) => {
                self.error_message = format!("Only letters are allowed! ('{c}' is not a letter)");
            }
            KeyCode::Backspace => {
                self.current_input.pop();
            }
            KeyCode::Enter if self.current_input.len() == self.word_length => {
                let guess = std::mem::take(&mut self.current_input);
                info_log!("handle_key() - Submitting guess '{}'", guess);
                return Some(UserAction::Guess(guess));
            }
            KeyCode::Enter => {
                self.error_message = format!("Guess must be exactly {} letters!", self.word_length);
            }
            _ => {
                debug_log!("handle_key() - Ignoring key: {:?}", key.code);
            }
        }
        None
    }

    fn board_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::with_capacity(self.max_guesses * 2);
        for row_index in 0..self.max_guesses {
            let mut spans = vec![Span::raw("  ")];
            if let Some(row) = self.rows.get(row_index) {
                for fb in row {
                    spans.push(tile(fb.character(), status_colors(fb.status())));
                    spans.push(Span::raw(" "));
                }
            } else {
                let typing = row_index == self.rows.len() && !self.finished;
                for i in 0..self.word_length {
                    let letter = if typing {
                        self.current_input.chars().nth(i).unwrap_or(' ')
                    } else {
                        ' '
                    };
                    spans.push(tile(letter, PENDING_COLORS));
                    spans.push(Span::raw(" "));
                }
            }
            lines.push(Line::from(spans));
            lines.push(Line::from(""));
        }
        lines
    }

    fn instructions(&self) -> String {
        if self.finished {
            "N: New Game | ESC: Quit".to_string()
        } else {
            format!(
                "Type your {}-letter guess | ENTER: Submit | ESC: Quit",
                self.word_length
            )
        }
    }

    /// Render the complete UI layout.
    pub fn render(&self, f: &mut Frame) {
        #[allow(clippy::cast_possible_truncation)]
        let board_height = (self.max_guesses * 2 + 2) as u16;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),            // Title
                Constraint::Length(board_height), // Game board
                Constraint::Min(4),               // Messages
                Constraint::Length(3),            // Instructions
            ])
            .split(f.area());

        let title = Paragraph::new("WORDLE")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, chunks[0]);

        let remaining = self.max_guesses.saturating_sub(self.rows.len());
        let board = Paragraph::new(self.board_lines()).block(
            Block::default()
                .title(format!("Guesses ({remaining} left)"))
                .borders(Borders::ALL),
        );
        f.render_widget(board, chunks[1]);

        let mut info = Vec::new();
        if !self.message.is_empty() {
            let style = if self.finished { SUCCESS_STYLE } else { INFO_STYLE };
            info.push(Line::from(Span::styled(self.message.clone(), style)));
        }
        if !self.error_message.is_empty() {
            info.push(Line::from(Span::styled(self.error_message.clone(), ERROR_STYLE)));
        }
        let info = Paragraph::new(info)
            .block(Block::default().title("Information").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(info, chunks[2]);

        let instructions = Paragraph::new(self.instructions())
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(instructions, chunks[3]);
    }
}

/// Main TUI interface component.
///
/// Manages terminal rendering and input handling; restores the terminal on drop.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    board: BoardState,
}

impl TuiInterface {
    /// # Errors
    /// Returns an error if the terminal cannot be switched to raw mode or the alternate screen.
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal backend created");

        Ok(Self {
            terminal,
            board: BoardState::default(),
        })
    }

    /// # Errors
    /// Returns an error if the terminal state cannot be restored.
    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let board = &self.board;
        self.terminal.draw(|f| board.render(f))?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) => Ok(self.board.handle_key(key)),
            other => {
                debug_log!("handle_input() - Ignoring event: {:?}", other);
                Ok(None)
            }
        }
    }
}

impl GameInterface for TuiInterface {
    fn display_welcome(&mut self, config: &GameConfig, word_count: usize) {
        self.board = BoardState::new(config);
        self.board.message = format!("Loaded {word_count} words. Good luck!");
        self.draw_or_log();
    }

    fn read_guess(&mut self) -> Option<UserAction> {
        loop {
            self.draw_or_log();
            match self.handle_input() {
                Ok(Some(action)) => return Some(action),
                Ok(None) => {}
                Err(e) => {
                    warn_log!("Terminal input error: {}", e);
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_rejection(&mut self, guess: &str, rejection: &Rejection) {
        self.board.error_message = format!("{guess}: {rejection}");
        self.draw_or_log();
    }

    fn display_feedback(&mut self, feedback: &[LetterFeedback], remaining: usize) {
        self.board.rows.push(feedback.to_vec());
        self.board.message = format!("{remaining} guesses left");
        self.draw_or_log();
    }

    fn display_won(&mut self, secret: &str, attempts: usize) {
        self.board.finished = true;
        self.board.message = format!("You win! The word was {secret} (solved in {attempts}).");
        self.draw_or_log();
    }

    fn display_lost(&mut self, secret: &str) {
        self.board.finished = true;
        self.board.message = format!("Out of guesses. The word was {secret}.");
        self.draw_or_log();
    }

    fn display_game_over_hint(&mut self) {
        self.board.error_message = "Press N for a new game or ESC to quit.".to_string();
        self.draw_or_log();
    }

    fn display_new_game_message(&mut self, word_count: usize) {
        self.board.reset();
        self.board.message = format!("New game started. Picked a word from {word_count} words.");
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        info_log!("TUI exiting");
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        if let Err(e) = self.cleanup() {
            warn_log!("Failed to restore terminal: {}", e);
        }
    }
}
