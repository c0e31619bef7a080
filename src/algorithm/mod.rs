/// Exhaustive counter used to cross-check propagation
pub mod brute_force;
/// Boundary-row multiplicities
pub mod distribution;
/// Expansion of the first image row into boundary rows
pub mod expansion;
/// Counting driver and traversal orientation
pub mod solver;
/// Propagation of boundary rows through one image row
pub mod transfer;

pub use solver::{CounterConfig, Orientation, PreimageCounter, count_preimages};
