//! Observer: selects the lowest-weight undecided cell and collapses it to a
//! single pattern, weighted by pattern occurrence count

use crate::algorithm::bitset::PatternSet;
use crate::algorithm::pattern_table::PatternTable;
use crate::algorithm::rng::Xorshift32;
use crate::algorithm::wave::Wave;

/// Outcome of a single observation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Observation {
    /// A cell was collapsed; propagation should start from this cell index
    Collapsed(usize),
    /// Every cell has exactly one allowed pattern; the wave is solved
    Finished,
    /// Some cell has zero allowed patterns; the driver must restart
    Restart,
}

/// Scan every cell, find the minimum weight among undecided cells (more than
/// one pattern allowed), break ties uniformly at random by reservoir
/// sampling, and collapse the chosen cell
///
/// The first candidate found at a new minimum weight is always kept
/// (reservoir count resets to 1); subsequent ties at the same minimum are
/// kept with probability `1/k` where `k` is the number of ties seen so far,
/// including the current one.
pub fn observe(wave: &mut Wave, table: &PatternTable, rng: &mut Xorshift32) -> Observation {
    let mut best_index: Option<usize> = None;
    let mut best_weight: u64 = 0;
    let mut ties_seen: u64 = 0;

    for index in 0..wave.len() {
        let popcount = wave.popcount_allowed(index);
        if popcount == 0 {
            return Observation::Restart;
        }
        if popcount == 1 {
            continue;
        }

        let weight = wave.weight(index, table);
        match best_index {
            None => {
                best_index = Some(index);
                best_weight = weight;
                ties_seen = 1;
            }
            Some(_) if weight < best_weight => {
                best_index = Some(index);
                best_weight = weight;
                ties_seen = 1;
            }
            Some(_) if weight == best_weight => {
                ties_seen += 1;
                if rng.next_below(ties_seen) == 0 {
                    best_index = Some(index);
                }
            }
            Some(_) => {}
        }
    }

    let Some(chosen) = best_index else {
        return Observation::Finished;
    };

    collapse(wave, table, rng, chosen, best_weight);
    Observation::Collapsed(chosen)
}

/// Draw a pattern uniformly in proportion to occurrence count among the
/// patterns currently allowed at `index`, then clear every other pattern
fn collapse(wave: &mut Wave, table: &PatternTable, rng: &mut Xorshift32, index: usize, weight: u64) {
    let mut n = rng.next_below(weight);
    let allowed: Vec<usize> = wave.cell(index).map(PatternSet::to_vec).unwrap_or_default();
    let mut selected = allowed.first().copied();

    for p in &allowed {
        let count = u64::from(table.get(*p).map_or(0, |pattern| pattern.count));
        if n < count {
            selected = Some(*p);
            break;
        }
        n -= count;
    }

    if let Some(selected) = selected {
        for p in allowed {
            if p != selected {
                wave.clear(index, p);
            }
        }
    }
}
