//! Cursor invariant: the cursor always addresses an existing snapshot.

use super::Invariant;
use crate::Timeline;

/// Invariant: `0 <= cursor < history.len()`.
pub struct CursorInRange;

impl Invariant<Timeline> for CursorInRange {
    fn holds(timeline: &Timeline) -> bool {
        timeline.cursor() < timeline.history().len()
    }

    fn description() -> &'static str {
        "Cursor points into the history"
    }
}
