//! Presentation-facing game session.
//!
//! The session is the single owner of the current [`Timeline`]. User events
//! become transitions whose result replaces the held timeline wholesale.

use crate::action::Action;
use crate::history::HistoryError;
use crate::position::Position;
use crate::timeline::{Status, Timeline};
use crate::types::Board;
use tracing::{debug, info, instrument};

/// Label of a history entry, as shown in the jump list.
pub fn step_label(step: usize) -> String {
    if step == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{}", step)
    }
}

/// A running game, as seen by a user interface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSession {
    timeline: Timeline,
}

impl GameSession {
    /// Creates a session at the initial state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session around an existing timeline.
    pub fn from_timeline(timeline: Timeline) -> Self {
        Self { timeline }
    }

    /// The current timeline.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// The board at the cursor.
    pub fn board(&self) -> &Board {
        self.timeline.board()
    }

    /// Status of the displayed board.
    pub fn status(&self) -> Status {
        self.timeline.status()
    }

    /// Number of snapshots in the history.
    pub fn history_len(&self) -> usize {
        self.timeline.history().len()
    }

    /// The step currently displayed.
    pub fn cursor(&self) -> usize {
        self.timeline.cursor()
    }

    /// Jump-list labels, one per snapshot.
    pub fn move_labels(&self) -> Vec<String> {
        (0..self.history_len()).map(step_label).collect()
    }

    /// Handles a click on cell `index` (0-8).
    ///
    /// Indices off the board, occupied cells and decided boards are ignored.
    #[instrument(skip(self), fields(cursor = self.cursor()))]
    pub fn on_cell_click(&mut self, index: usize) {
        match Position::from_index(index) {
            Some(pos) => self.dispatch(Action::Place(pos)),
            None => debug!("Ignoring click outside the board"),
        }
    }

    /// Handles a click on history entry `step`.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::OutOfRange`] if `step` is not in the history;
    /// the session is left unchanged.
    #[instrument(skip(self), fields(cursor = self.cursor()))]
    pub fn on_jump_click(&mut self, step: usize) -> Result<(), HistoryError> {
        self.timeline = self.timeline.jump(step)?;
        Ok(())
    }

    /// Handles a click on the reset control.
    #[instrument(skip(self))]
    pub fn on_reset_click(&mut self) {
        info!(history_len = self.history_len(), "Starting a new game");
        self.timeline = Timeline::reset();
    }

    fn dispatch(&mut self, action: Action) {
        if let Ok(next) = self.timeline.apply(action) {
            self.timeline = next;
        }
    }
}
