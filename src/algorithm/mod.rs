//! Overlapping-model WFC core: pattern extraction, compatibility index, wave
//! state, observer, propagator, and the driver that ties them together

/// Pattern-indexed bitset shared by the compatibility index and the wave
pub mod bitset;
/// Dense `[pattern x adjacency x pattern]` compatibility bitmap
pub mod compatibility;
/// Step loop owning the wave, worklist, and RNG for one generation run
pub mod driver;
/// Lowest-weight cell selection and count-weighted collapse
pub mod observer;
/// Pattern extraction from the exemplar with multiplicity counts
pub mod pattern_table;
/// Worklist-driven constraint propagation
pub mod propagation;
/// Deterministic xorshift32 RNG
pub mod rng;
/// Per-cell pattern bitmaps for the output grid
pub mod wave;

pub use compatibility::CompatibilityIndex;
pub use driver::{GenerationConfig, StepOutcome, WfcState};
pub use pattern_table::{Pattern, PatternTable};
pub use wave::Wave;
