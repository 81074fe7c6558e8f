//! Overlapping-style wave function collapse generator for categorical raster patterns
//!
//! The system extracts overlapping NxN patterns from a small exemplar raster,
//! builds a compatibility index between those patterns, and synthesises an
//! arbitrarily sized output raster by repeatedly collapsing the most
//! constrained cell and propagating the consequences to its neighbours.

#![forbid(unsafe_code)]

/// Core algorithm: pattern extraction, compatibility index, wave state, observer, propagator, driver
pub mod algorithm;
/// Input/output operations, configuration, and error handling
pub mod io;
/// Spatial primitives: tile codec, adjacency, exemplar grid
pub mod spatial;

pub use io::error::{Result, WfcError};
