//! Error types for the generator's public interface

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generator operations
#[derive(Debug)]
pub enum WfcError {
    /// The exemplar does not meet the algorithm's structural requirements
    InvalidExemplar {
        /// Description of what's wrong with the exemplar
        reason: String,
    },

    /// Output dimensions are invalid
    InvalidDimensions {
        /// Requested output width
        width: usize,
        /// Requested output height
        height: usize,
    },

    /// The RNG seed supplied was zero, which the xorshift32 generator cannot use
    ZeroSeed,

    /// `run` exceeded its step or restart budget without reaching `Finished`
    BudgetExhausted {
        /// Number of observe/propagate steps executed
        steps: usize,
        /// Number of contradiction restarts executed
        restarts: usize,
    },

    /// A pattern index was requested that does not exist in the pattern table
    InvalidPatternIndex {
        /// The invalid pattern index
        index: u32,
        /// Number of patterns in the table
        num_patterns: u32,
    },

    /// Failed to load an exemplar image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a rendered output image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for WfcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidExemplar { reason } => write!(f, "invalid exemplar: {reason}"),
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid output dimensions {width}x{height}")
            }
            Self::ZeroSeed => write!(f, "RNG seed must be non-zero"),
            Self::BudgetExhausted { steps, restarts } => write!(
                f,
                "exhausted budget after {steps} steps and {restarts} restarts without finishing"
            ),
            Self::InvalidPatternIndex { index, num_patterns } => write!(
                f,
                "pattern index {index} is out of bounds (table has {num_patterns} patterns)"
            ),
            Self::ImageLoad { path, source } => {
                write!(f, "failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "file system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for WfcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generator results
pub type Result<T> = std::result::Result<T, WfcError>;
