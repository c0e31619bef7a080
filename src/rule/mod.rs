//! The fixed 2x2 collapse rule and its lookup tables

/// Packed 2x2 blocks and vertical column pairs
pub mod block;
/// Forward application of the rule to whole grids
pub mod collapse;
/// Process-wide forward and inverse rule tables
pub mod table;

pub use block::{Block, ColumnPair};
pub use table::RuleTables;
