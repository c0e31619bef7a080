//! Grid data structures
//!
//! This module contains the grid types the counting core operates on:
//! - Rectangular boolean images and preimages
//! - Bit-packed preimage rows used as boundary states

/// Rectangular boolean grids
pub mod image;
/// Bit-packed preimage rows
pub mod row;

pub use image::BoolImage;
pub use row::RowPreimage;
