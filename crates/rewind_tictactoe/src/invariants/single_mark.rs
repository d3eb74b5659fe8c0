//! Single mark invariant: each step adds exactly one mark, alternating X and O.

use super::Invariant;
use crate::{Cell, Player, Timeline};

/// Invariant: Snapshot `i` differs from snapshot `i - 1` in exactly one cell.
///
/// That cell was empty before and now holds the mark of the player who moves
/// at step `i - 1`: X for odd `i`, O for even `i`.
pub struct SingleMarkPerStep;

impl Invariant<Timeline> for SingleMarkPerStep {
    fn holds(timeline: &Timeline) -> bool {
        timeline
            .history()
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(step, pair)| {
                let expected = Cell::Occupied(Player::for_step(step));
                let mut changed = pair[0]
                    .cells()
                    .iter()
                    .zip(pair[1].cells())
                    .filter(|(before, after)| before != after);

                match (changed.next(), changed.next()) {
                    (Some((before, after)), None) => *before == Cell::Empty && *after == expected,
                    _ => false,
                }
            })
    }

    fn description() -> &'static str {
        "Each step adds exactly one mark (X, O, X, O, ...)"
    }
}
