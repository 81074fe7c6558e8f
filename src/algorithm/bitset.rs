//! Fixed-size bitset over pattern indices
//!
//! Every cell of the Wave, and every row of the compatibility index, is one
//! of these: a bitmap with one bit per pattern, 0-based, matching the dense
//! pattern indices assigned by the pattern table.

use bitvec::prelude::*;
use std::fmt;

/// A bitset over `[0, num_patterns)` pattern indices
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternSet {
    bits: BitVec,
}

impl PatternSet {
    /// Build a set containing no patterns
    #[must_use]
    pub fn empty(num_patterns: usize) -> Self {
        Self {
            bits: bitvec![0; num_patterns],
        }
    }

    /// Build a set containing every pattern in `[0, num_patterns)`
    #[must_use]
    pub fn all(num_patterns: usize) -> Self {
        Self {
            bits: bitvec![1; num_patterns],
        }
    }

    /// Number of patterns this set has room for
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Test whether pattern `p` is allowed
    #[must_use]
    pub fn allowed(&self, p: usize) -> bool {
        self.bits.get(p).as_deref().copied().unwrap_or(false)
    }

    /// Allow pattern `p`
    pub fn set(&mut self, p: usize) {
        if let Some(mut bit) = self.bits.get_mut(p) {
            *bit = true;
        }
    }

    /// Remove pattern `p` from the set
    pub fn clear(&mut self, p: usize) {
        if let Some(mut bit) = self.bits.get_mut(p) {
            *bit = false;
        }
    }

    /// Number of patterns currently allowed
    #[must_use]
    pub fn popcount(&self) -> u32 {
        self.bits.count_ones() as u32
    }

    /// Whether no pattern is allowed (a contradiction, when this is a Wave cell)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Intersect this set with `other` in place, returning whether any bit
    /// was cleared
    pub fn intersect_with(&mut self, other: &Self) -> bool {
        let before = self.bits.clone();
        self.bits &= &other.bits;
        before != self.bits
    }

    /// Union `other` into this set in place
    pub fn union_with(&mut self, other: &Self) {
        self.bits |= &other.bits;
    }

    /// Iterate over allowed pattern indices in ascending order
    pub fn iter_allowed(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// Collect allowed pattern indices into a vector, ascending order
    #[must_use]
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for PatternSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PatternSet({} allowed: {:?})",
            self.popcount(),
            self.to_vec()
        )
    }
}
