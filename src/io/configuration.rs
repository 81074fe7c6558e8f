//! Algorithm constants and runtime configuration defaults

/// Number of bits used to encode a single cell value (B in spec.md)
pub const CELL_BITS: u32 = 4;

/// Exclusive upper bound on a cell value, `2^B`
pub const CELL_VALUE_LIMIT: u8 = 1 << CELL_BITS;

/// Side length of the overlapping pattern window (N in spec.md)
pub const PATTERN_SIZE: usize = 2;

// Safety limit preventing excessive memory allocation from malformed input
/// Maximum allowed grid dimension (exemplar or output, per axis)
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Default RNG seed used by the CLI when none is supplied
pub const DEFAULT_SEED: u32 = 42;

/// Default maximum observe/propagate steps before `run` gives up
pub const DEFAULT_MAX_STEPS: usize = 1_000_000;

/// Default maximum contradiction restarts before `run` gives up
pub const DEFAULT_MAX_RESTARTS: usize = 1_000;

/// Suffix added to output filenames by the CLI
pub const OUTPUT_SUFFIX: &str = "_result";

/// RGBA color used to render a cell whose Wave still allows more than one pattern
pub const UNDECIDED_COLOR: [u8; 4] = [128, 128, 128, 255];

// Progress bar display settings
/// Width of the step progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 50;
