//! Input/output, configuration and error handling

/// Command-line interface and batch processing
pub mod cli;
/// Limits and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Text and PNG grid loading
pub mod grid_file;
/// Progress display
pub mod progress;
/// Seeded random images
pub mod random;
