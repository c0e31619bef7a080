//! Transfer-matrix counting of boolean grid preimages
//!
//! A preimage is a boolean grid one row and one column larger than a given
//! image, such that every 2x2 sliding window holding exactly one set cell lines
//! up with a set image cell and every other window with a clear one. Counting
//! preimages by enumeration is exponential in the grid area; this crate
//! propagates per-boundary-row counts one image row at a time instead, which
//! is exponential only in the image width.

#![forbid(unsafe_code)]

/// Row propagation, counting driver and exhaustive cross-check
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// The fixed 2x2 collapse rule and its lookup tables
pub mod rule;
/// Boolean grids and packed preimage rows
pub mod spatial;

pub use algorithm::{CounterConfig, Orientation, PreimageCounter, count_preimages};
pub use io::error::{PreimageError, Result};
pub use spatial::BoolImage;
