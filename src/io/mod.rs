//! External collaborators: CLI parsing, exemplar/output image I/O, progress
//! reporting, configuration constants, and the error taxonomy
//!
//! None of this module's contents sit on the algorithm's hot path; the core
//! in [`crate::algorithm`] never calls into it.

/// Command-line argument parsing and the generate subcommand
pub mod cli;
/// Algorithm constants and runtime configuration defaults
pub mod configuration;
/// The error taxonomy for all fallible operations
pub mod error;
/// Loading exemplar PNGs and rendering a wave back to a PNG
pub mod image;
/// Step progress reporting
pub mod progress;
