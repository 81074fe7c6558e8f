//! The 8-neighbourhood adjacency ordering
//!
//! The ordering is fixed and must match across the compatibility index, the
//! propagator, and any test fixture: `{(-1,-1), (-1,0), (-1,1), (0,1), (1,1),
//! (1,0), (1,-1), (0,-1)}`. Direction `d` and its opposite `d'` satisfy
//! `offset(d) = -offset(d')`.

/// One of the eight directions in the 8-neighbourhood, in the crate's fixed order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Adjacency {
    /// (-1, -1)
    UpLeft = 0,
    /// (-1, 0)
    Up,
    /// (-1, 1)
    UpRight,
    /// (0, 1)
    Right,
    /// (1, 1)
    DownRight,
    /// (1, 0)
    Down,
    /// (1, -1)
    DownLeft,
    /// (0, -1)
    Left,
}

/// Total number of adjacency directions
pub const NUM_ADJACENT: usize = 8;

/// All adjacency directions in their fixed, spec-defined order
pub const ALL: [Adjacency; NUM_ADJACENT] = [
    Adjacency::UpLeft,
    Adjacency::Up,
    Adjacency::UpRight,
    Adjacency::Right,
    Adjacency::DownRight,
    Adjacency::Down,
    Adjacency::DownLeft,
    Adjacency::Left,
];

/// Integer `(x, y)` offsets for each adjacency, in the same fixed order
const OFFSETS: [(i32, i32); NUM_ADJACENT] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
];

impl Adjacency {
    /// Index of this adjacency into the fixed ordering (0..8)
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Build an adjacency from its fixed-order index
    ///
    /// # Panics
    ///
    /// Panics if `index >= 8`.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        ALL[index]
    }

    /// Integer `(dx, dy)` offset for this direction
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        OFFSETS[self.index()]
    }

    /// The opposite direction, satisfying `offset(d) = -offset(d.opposite())`
    #[must_use]
    pub const fn opposite(self) -> Self {
        ALL[(self.index() + 4) % NUM_ADJACENT]
    }
}
