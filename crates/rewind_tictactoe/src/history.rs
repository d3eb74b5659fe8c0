//! Move history: an ordered sequence of board snapshots.
//!
//! `history[0]` is always the empty board and every later snapshot adds one
//! mark to its predecessor. A `History` is a value: appending returns a new
//! history and leaves the receiver as it was, so an older history can be kept
//! around and shared freely.

use crate::types::{Board, Snapshot};
use serde::Serialize;
use tracing::{debug, instrument};

/// Errors raised when addressing a step of the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum HistoryError {
    /// The step does not exist in the history.
    #[display("Step {step} is out of range (history has {len} snapshots)")]
    OutOfRange {
        /// The requested step.
        step: usize,
        /// Number of snapshots in the history.
        len: usize,
    },
}

/// Ordered, never-empty sequence of snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct History {
    pub(crate) snapshots: Vec<Snapshot>,
}

impl History {
    /// Creates the initial history: a single empty board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
        }
    }

    /// Returns the initial history together with its cursor.
    pub fn reset() -> (Self, usize) {
        (Self::new(), 0)
    }

    /// Returns a new history holding the snapshots up to and including
    /// `upto_cursor`, followed by `snapshot`.
    ///
    /// Snapshots after `upto_cursor` are dropped. A cursor past the end keeps
    /// every snapshot, so the result always has
    /// `min(upto_cursor + 1, self.len()) + 1` entries.
    #[must_use]
    #[instrument(skip(self, snapshot), fields(len = self.len()))]
    pub fn append(&self, upto_cursor: usize, snapshot: Snapshot) -> Self {
        let keep = upto_cursor.saturating_add(1).min(self.snapshots.len());
        if keep < self.snapshots.len() {
            debug!(
                discarded = self.snapshots.len() - keep,
                "Truncating future snapshots"
            );
        }

        let mut snapshots = Vec::with_capacity(keep + 1);
        snapshots.extend_from_slice(&self.snapshots[..keep]);
        snapshots.push(snapshot);
        Self { snapshots }
    }

    /// Returns the snapshot at `cursor`.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::OutOfRange`] if `cursor` is not a valid step.
    pub fn snapshot_at(&self, cursor: usize) -> Result<&Snapshot, HistoryError> {
        self.snapshots.get(cursor).ok_or(HistoryError::OutOfRange {
            step: cursor,
            len: self.snapshots.len(),
        })
    }

    /// Number of snapshots, including the initial empty board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: a history holds at least the initial board.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// The most recent snapshot.
    pub fn latest(&self) -> &Snapshot {
        // Never empty: every constructor starts from the root board.
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Iterates over snapshots, oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot> {
        self.snapshots.iter()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Snapshot;
    type IntoIter = std::slice::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::Player;

    fn history_of(len: usize) -> History {
        let mut history = History::new();
        for (step, pos) in Position::ALL.iter().take(len - 1).enumerate() {
            let next = history.latest().with_mark(*pos, Player::for_step(step));
            history = history.append(step, next);
        }
        history
    }

    #[test]
    fn test_new_history_holds_empty_board() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert!(!history.is_empty());
        assert_eq!(history.snapshot_at(0), Ok(&Board::new()));
    }

    #[test]
    fn test_append_at_tip_grows_by_one() {
        let history = history_of(3);
        let next = history.latest().with_mark(Position::BottomRight, Player::X);

        let appended = history.append(2, next);
        assert_eq!(appended.len(), 4);
        assert_eq!(appended.latest(), &next);
    }

    #[test]
    fn test_append_truncates_future_without_touching_input() {
        let history = history_of(4);
        let before = history.clone();
        let branch = history
            .snapshot_at(1)
            .map(|b| b.with_mark(Position::Center, Player::O))
            .unwrap();

        let appended = history.append(1, branch);

        assert_eq!(history, before);
        assert_eq!(appended.len(), 3);
        assert_eq!(appended.snapshots()[..2], before.snapshots()[..2]);
        assert_eq!(appended.latest(), &branch);
    }

    #[test]
    fn test_append_length_formula_for_every_cursor() {
        let history = history_of(4);
        for cursor in 0..8 {
            let appended = history.append(cursor, Board::new());
            assert_eq!(appended.len(), (cursor + 1).min(history.len()) + 1);
        }
    }

    #[test]
    fn test_snapshot_at_out_of_range() {
        let history = history_of(2);
        assert_eq!(
            history.snapshot_at(2),
            Err(HistoryError::OutOfRange { step: 2, len: 2 })
        );
    }

    #[test]
    fn test_reset_returns_initial_state() {
        let (history, cursor) = History::reset();
        assert_eq!(history, History::new());
        assert_eq!(cursor, 0);
    }
}
