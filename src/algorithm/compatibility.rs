//! The compatibility index: a dense bitmap answering, for a pattern placed
//! at a given adjacency, which patterns may sit in the neighbouring cell

use crate::algorithm::bitset::PatternSet;
use crate::algorithm::pattern_table::PatternTable;
use crate::spatial::adjacency::{Adjacency, ALL, NUM_ADJACENT};
use crate::spatial::tile;

/// `Bitmap[pattern][adjacency][pattern]`: bit `(p, d, q)` is set iff pattern
/// `q` may be placed at adjacency `d` from a cell holding pattern `p`
///
/// Stored as one [`PatternSet`] of length `num_patterns` per `(p, d)` pair,
/// which keeps every row byte-aligned and makes the "OR over supporters"
/// query used by propagation a sequence of in-place unions.
#[derive(Clone, Debug)]
pub struct CompatibilityIndex {
    num_patterns: usize,
    /// Flattened `[p * NUM_ADJACENT + d]` rows, each a bitmap over `q`
    rows: Vec<PatternSet>,
}

impl CompatibilityIndex {
    /// Build the index for every pair of patterns under every adjacency
    ///
    /// Exploits the symmetry `Idx(p, d, q) = Idx(q, opp(d), p)`: each
    /// unordered pair `{p, q}` under direction `d` is tested once and the
    /// result is written into both `(p, d, q)` and `(q, opp(d), p)`.
    #[must_use]
    pub fn build(table: &PatternTable) -> Self {
        let num_patterns = table.len();
        let mut rows = vec![PatternSet::empty(num_patterns); num_patterns * NUM_ADJACENT];

        for p in 0..num_patterns {
            for d in 0..NUM_ADJACENT {
                let adj = Adjacency::from_index(d);
                let opp = adj.opposite().index();
                for q in p..num_patterns {
                    let Some((p_tile, q_tile)) =
                        table.patterns().get(p).zip(table.patterns().get(q))
                    else {
                        continue;
                    };
                    if tile::tiles_overlap(p_tile.tile, q_tile.tile, adj) {
                        if let Some(row) = rows.get_mut(p * NUM_ADJACENT + d) {
                            row.set(q);
                        }
                        if let Some(row) = rows.get_mut(q * NUM_ADJACENT + opp) {
                            row.set(p);
                        }
                    }
                }
            }
        }

        Self { num_patterns, rows }
    }

    /// Number of patterns this index was built over
    #[must_use]
    pub const fn num_patterns(&self) -> usize {
        self.num_patterns
    }

    /// Test whether pattern `q` may be placed at adjacency `d` from `p`
    #[must_use]
    pub fn compatible(&self, p: usize, d: Adjacency, q: usize) -> bool {
        self.rows
            .get(p * NUM_ADJACENT + d.index())
            .is_some_and(|row| row.allowed(q))
    }

    /// The full row of patterns compatible with `p` at adjacency `d`, or
    /// `None` if `p` is out of range
    #[must_use]
    pub fn row(&self, p: usize, d: Adjacency) -> Option<&PatternSet> {
        self.rows.get(p * NUM_ADJACENT + d.index())
    }

    /// `⋃_{p allowed} row(p, d)`: every pattern supported by at least one
    /// pattern currently allowed in `allowed` at adjacency `d`
    #[must_use]
    pub fn supporters(&self, allowed: &PatternSet, d: Adjacency) -> PatternSet {
        let mut union = PatternSet::empty(self.num_patterns);
        for p in allowed.iter_allowed() {
            if let Some(row) = self.row(p, d) {
                union.union_with(row);
            }
        }
        union
    }
}
