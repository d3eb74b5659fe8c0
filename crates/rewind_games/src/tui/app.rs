//! Application state and key handling.

use super::input::{move_cursor, move_selection};
use crossterm::event::KeyCode;
use rewind_tictactoe::{GameSession, Position};
use tracing::{debug, warn};

/// Which panel receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrows move the cell cursor; Enter places a mark.
    #[default]
    Board,
    /// Arrows move through the history; Enter jumps.
    History,
}

impl Focus {
    fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// Main application state.
///
/// The game itself lives in the [`GameSession`]; the rest is view state
/// (which cell and which history entry are highlighted).
#[derive(Debug, Clone)]
pub struct App {
    session: GameSession,
    selected_cell: Position,
    selected_step: usize,
    focus: Focus,
    should_quit: bool,
}

impl App {
    /// Creates an application around a session.
    pub fn new(session: GameSession) -> Self {
        let selected_step = session.cursor();
        Self {
            session,
            selected_cell: Position::Center,
            selected_step,
            focus: Focus::Board,
            should_quit: false,
        }
    }

    /// The running game.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// The highlighted cell.
    pub fn selected_cell(&self) -> Position {
        self.selected_cell
    }

    /// The highlighted history entry.
    pub fn selected_step(&self) -> usize {
        self.selected_step
    }

    /// The panel receiving arrow keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        debug!(?key, focus = ?self.focus, "Handling key");

        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => {
                self.session.on_reset_click();
                self.sync_selection();
            }
            KeyCode::Tab => {
                self.focus = self.focus.toggle();
                self.sync_selection();
            }
            KeyCode::Char('[') => {
                if let Some(step) = self.session.cursor().checked_sub(1) {
                    self.jump(step);
                }
            }
            KeyCode::Char(']') => {
                let step = self.session.cursor() + 1;
                if step < self.session.history_len() {
                    self.jump(step);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
            _ => self.navigate(key),
        }
    }

    fn navigate(&mut self, key: KeyCode) {
        match self.focus {
            Focus::Board => self.selected_cell = move_cursor(self.selected_cell, key),
            Focus::History => {
                self.selected_step =
                    move_selection(self.selected_step, self.session.history_len(), key)
            }
        }
    }

    fn activate(&mut self) {
        match self.focus {
            Focus::Board => {
                self.session.on_cell_click(self.selected_cell.to_index());
                self.sync_selection();
            }
            Focus::History => self.jump(self.selected_step),
        }
    }

    fn jump(&mut self, step: usize) {
        if let Err(error) = self.session.on_jump_click(step) {
            warn!(%error, "Jump target rejected");
        }
        self.sync_selection();
    }

    /// Points the history selection at the displayed step.
    fn sync_selection(&mut self) {
        self.selected_step = self.session.cursor();
    }
}
