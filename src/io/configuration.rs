//! Algorithm limits and runtime configuration defaults

/// Widest boundary row the packed `u64` representation holds
pub const MAX_BOUNDARY_WIDTH: usize = 64;

// Exhaustive search enumerates 2^cells candidates
/// Largest preimage (in cells) the brute-force counter accepts
pub const MAX_BRUTE_FORCE_CELLS: usize = 24;

// Random image generation
/// Fixed seed for reproducible random images
pub const DEFAULT_SEED: u64 = 42;
/// Probability that a random image cell is set
pub const DEFAULT_DENSITY: f64 = 0.5;

// Grid file input
/// PNG pixels with luma below this are read as set cells
pub const PNG_DARK_THRESHOLD: u8 = 128;
/// Extension recognized as a PNG grid
pub const PNG_EXTENSION: &str = "png";
/// Extensions recognized as text grids
pub const TEXT_EXTENSIONS: [&str; 3] = ["txt", "grid", "in"];
/// Leading character of a comment line in text grids
pub const COMMENT_PREFIX: char = ';';

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;
