//! Propagator: worklist-driven constraint propagation
//!
//! Removes pattern bits from neighbouring cells that the current wave no
//! longer supports, starting from a single changed cell and fanning out
//! until no further cell changes.

use crate::algorithm::bitset::PatternSet;
use crate::algorithm::compatibility::CompatibilityIndex;
use crate::algorithm::wave::Wave;
use crate::spatial::adjacency::ALL;

/// Outcome of a propagation pass
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropagationOutcome {
    /// Propagation reached a fixpoint with no contradiction
    Settled,
    /// Some cell's allowed-pattern set became empty
    Restart,
}

/// Push `origin` onto a LIFO worklist and propagate its consequences to
/// every cell reachable through the 8-neighbourhood until the worklist
/// empties or a contradiction is found
///
/// Duplicate worklist entries are allowed; they cost extra work but never
/// affect correctness, since re-intersecting an already-settled cell with
/// its own allowed set is a no-op.
pub fn propagate(wave: &mut Wave, index: &CompatibilityIndex, origin: usize) -> PropagationOutcome {
    let mut worklist: Vec<usize> = Vec::with_capacity(wave.len());
    worklist.push(origin);

    while let Some(cur) = worklist.pop() {
        let Some(cur_allowed) = wave.cell(cur).cloned() else {
            continue;
        };
        let cur_x = (cur % wave.width()) as i32;
        let cur_y = (cur / wave.width()) as i32;

        for adj in ALL {
            let (dx, dy) = adj.offset();
            let nb = wave.index_of(cur_x + dx, cur_y + dy);

            let supporters = index.supporters(&cur_allowed, adj);
            let Some(changed) = wave.cell_mut(nb).map(|cell| cell.intersect_with(&supporters))
            else {
                continue;
            };

            if wave.cell(nb).is_some_and(PatternSet::is_empty) {
                return PropagationOutcome::Restart;
            }
            if changed {
                worklist.push(nb);
            }
        }
    }

    PropagationOutcome::Settled
}
