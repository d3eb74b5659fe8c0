//! Turn controller: the (history, cursor) pair and its transitions.
//!
//! A [`Timeline`] is an immutable value. Every transition borrows the
//! current timeline and returns the next one, so the owner simply replaces
//! its value after each event. Whose turn it is and whether the game is over
//! are always derived from the snapshot under the cursor and never stored.

use crate::action::{Action, MoveError};
use crate::history::{History, HistoryError};
#[cfg(debug_assertions)]
use crate::invariants::{InvariantSet, TimelineInvariants};
use crate::position::Position;
use crate::rules::{self, Outcome};
use crate::types::{Board, Player};
use serde::Serialize;
use tracing::{debug, instrument};

/// What the presentation shows above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Status {
    /// The displayed board is won.
    Won(Player),
    /// The displayed board is full with no winner.
    Draw,
    /// The game goes on; this player moves next.
    NextPlayer(Player),
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Won(player) => write!(f, "Winner: {}", player),
            Status::Draw => write!(f, "Draw: No Winner"),
            Status::NextPlayer(player) => write!(f, "Next player: {}", player),
        }
    }
}

/// Game state: the move history and the step currently displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timeline {
    pub(crate) history: History,
    pub(crate) cursor: usize,
}

impl Timeline {
    /// Creates the initial timeline: one empty board, cursor at 0.
    pub fn new() -> Self {
        let (history, cursor) = History::reset();
        Self { history, cursor }
    }

    /// Returns the initial timeline regardless of the current one.
    #[instrument]
    pub fn reset() -> Self {
        debug!("Resetting timeline");
        Self::new()
    }

    /// The move history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The step currently displayed.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The board at the cursor.
    pub fn board(&self) -> &Board {
        &self.history.snapshots()[self.cursor]
    }

    /// The player who moves next from the displayed step.
    pub fn to_move(&self) -> Player {
        Player::for_step(self.cursor)
    }

    /// Evaluates the board at the cursor.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(self.board())
    }

    /// Status line for the displayed step.
    pub fn status(&self) -> Status {
        match self.outcome() {
            Outcome::Won(player) => Status::Won(player),
            Outcome::Draw => Status::Draw,
            Outcome::Undecided => Status::NextPlayer(self.to_move()),
        }
    }

    /// Empty cells on the displayed board, or none once the game is decided.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.outcome().is_decided() {
            Vec::new()
        } else {
            Position::valid_moves(self.board())
        }
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Snapshots after the cursor are discarded before the new one is
    /// appended, and the cursor moves onto it.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the displayed board is won or drawn.
    /// - [`MoveError::SquareOccupied`] if the cell already holds a mark.
    /// - [`MoveError::InvariantViolation`] if the result breaks a timeline
    ///   invariant (debug builds only).
    #[instrument(skip(self), fields(cursor = self.cursor, player = %self.to_move()))]
    pub fn try_place(&self, pos: Position) -> Result<Self, MoveError> {
        let board = self.board();

        let outcome = rules::evaluate(board);
        if outcome.is_decided() {
            return Err(MoveError::GameOver(outcome));
        }
        if !board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let next = Self {
            history: self.history.append(self.cursor, board.with_mark(pos, self.to_move())),
            cursor: self.cursor + 1,
        };

        #[cfg(debug_assertions)]
        TimelineInvariants::check_all(&next).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            tracing::warn!(%descriptions, "Timeline invariant violated");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        debug!(history_len = next.history.len(), "Move applied");
        Ok(next)
    }

    /// Places the current player's mark at `pos`, ignoring illegal moves.
    ///
    /// A move on an occupied cell or a decided board returns an unchanged
    /// copy of the timeline.
    #[must_use]
    pub fn place(&self, pos: Position) -> Self {
        self.try_place(pos).unwrap_or_else(|error| {
            debug!(%error, position = %pos, "Ignoring illegal move");
            self.clone()
        })
    }

    /// Moves the cursor to `step`; the history is untouched.
    ///
    /// Jumping is allowed after the game is decided.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::OutOfRange`] if `step` is not in the history.
    #[instrument(skip(self), fields(from = self.cursor))]
    pub fn jump(&self, step: usize) -> Result<Self, HistoryError> {
        self.history.snapshot_at(step)?;
        debug!("Cursor moved");
        Ok(Self {
            history: self.history.clone(),
            cursor: step,
        })
    }

    /// Applies a user action.
    ///
    /// # Errors
    ///
    /// Only [`Action::Jump`] can fail; illegal placements are ignored.
    #[instrument(skip(self))]
    pub fn apply(&self, action: Action) -> Result<Self, HistoryError> {
        match action {
            Action::Place(pos) => Ok(self.place(pos)),
            Action::Jump(step) => self.jump(step),
            Action::Reset => Ok(Self::reset()),
        }
    }

    /// Replays a sequence of moves from the empty board.
    ///
    /// Unlike [`Timeline::place`], an illegal move aborts the replay.
    ///
    /// # Errors
    ///
    /// Returns the [`MoveError`] of the first move that could not be played.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(moves: &[Position]) -> Result<Self, MoveError> {
        moves
            .iter()
            .try_fold(Self::new(), |timeline, pos| timeline.try_place(*pos))
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;
    use Position::*;

    #[test]
    fn test_new_timeline() {
        let timeline = Timeline::new();
        assert_eq!(timeline.cursor(), 0);
        assert_eq!(timeline.history().len(), 1);
        assert_eq!(timeline.status(), Status::NextPlayer(Player::X));
    }

    #[test]
    fn test_place_alternates_players() {
        let timeline = Timeline::new().place(Center).place(TopLeft);

        assert_eq!(timeline.cursor(), 2);
        assert_eq!(timeline.board().get(Center), Cell::Occupied(Player::X));
        assert_eq!(timeline.board().get(TopLeft), Cell::Occupied(Player::O));
        assert_eq!(timeline.to_move(), Player::X);
    }

    #[test]
    fn test_try_place_reports_occupied() {
        let timeline = Timeline::new().place(Center);
        assert_eq!(
            timeline.try_place(Center),
            Err(MoveError::SquareOccupied(Center))
        );
    }

    #[test]
    fn test_try_place_reports_game_over() {
        let timeline = Timeline::replay(&[TopLeft, Center, TopCenter, BottomCenter, TopRight])
            .unwrap();
        assert_eq!(
            timeline.try_place(BottomRight),
            Err(MoveError::GameOver(Outcome::Won(Player::X)))
        );
        assert!(timeline.valid_moves().is_empty());
    }

    #[test]
    fn test_place_does_not_touch_receiver() {
        let timeline = Timeline::new().place(Center);
        let before = timeline.clone();
        let _ = timeline.place(TopLeft);
        assert_eq!(timeline, before);
    }

    #[test]
    fn test_jump_keeps_history() {
        let timeline = Timeline::new().place(Center).place(TopLeft);
        let jumped = timeline.jump(0).unwrap();

        assert_eq!(jumped.cursor(), 0);
        assert_eq!(jumped.history(), timeline.history());
        assert_eq!(jumped.board(), &Board::new());
    }

    #[test]
    fn test_jump_out_of_range() {
        let timeline = Timeline::new().place(Center);
        assert_eq!(
            timeline.jump(2),
            Err(HistoryError::OutOfRange { step: 2, len: 2 })
        );
    }

    #[test]
    fn test_jump_allowed_after_win() {
        let won = Timeline::replay(&[TopLeft, Center, TopCenter, BottomCenter, TopRight]).unwrap();
        let back = won.jump(2).unwrap();
        assert_eq!(back.status(), Status::NextPlayer(Player::X));
    }

    #[test]
    fn test_apply_dispatches_actions() {
        let timeline = Timeline::new()
            .apply(Action::Place(Center))
            .and_then(|t| t.apply(Action::Jump(0)))
            .unwrap();
        assert_eq!(timeline.cursor(), 0);
        assert_eq!(timeline.history().len(), 2);

        let reset = timeline.apply(Action::Reset).unwrap();
        assert_eq!(reset, Timeline::new());
    }

    #[test]
    fn test_replay_stops_at_illegal_move() {
        assert_eq!(
            Timeline::replay(&[Center, Center]),
            Err(MoveError::SquareOccupied(Center))
        );
    }

    #[test]
    fn test_status_display() {
        assert_eq!(Status::NextPlayer(Player::O).to_string(), "Next player: O");
        assert_eq!(Status::Won(Player::X).to_string(), "Winner: X");
        assert_eq!(Status::Draw.to_string(), "Draw: No Winner");
    }
}
