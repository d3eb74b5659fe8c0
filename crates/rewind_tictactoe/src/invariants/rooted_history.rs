//! Rooted history invariant: the timeline starts from an empty board.

use super::Invariant;
use crate::{Board, Timeline};

/// Invariant: History is non-empty and its first snapshot is the empty board.
pub struct RootedHistory;

impl Invariant<Timeline> for RootedHistory {
    fn holds(timeline: &Timeline) -> bool {
        timeline.history().snapshots().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_new_timeline_holds() {
        assert!(RootedHistory::holds(&Timeline::new()));
    }

    #[test]
    fn test_empty_history_violates() {
        let mut timeline = Timeline::new();
        timeline.history.snapshots.clear();
        assert!(!RootedHistory::holds(&timeline));
    }

    #[test]
    fn test_marked_root_violates() {
        let mut timeline = Timeline::new();
        timeline.history.snapshots[0] = Board::new().with_mark(Position::Center, Player::X);
        assert!(!RootedHistory::holds(&timeline));
    }
}
