//! Seeded random image generation

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::BoolImage;
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Image with each cell set independently with probability `density`
///
/// # Errors
///
/// Returns `InvalidParameter` when `density` lies outside `[0, 1]`, and
/// `EmptyImage` when either dimension is zero
pub fn random_image(rows: usize, cols: usize, density: f64, seed: u64) -> Result<BoolImage> {
    if !(0.0..=1.0).contains(&density) {
        return Err(invalid_parameter(
            "density",
            &density,
            &"must lie between 0 and 1",
        ));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let cells = Array2::from_shape_simple_fn((rows, cols), || rng.random_bool(density));
    BoolImage::from_array(cells)
}

/// Parse a `ROWSxCOLS` dimension string
///
/// # Errors
///
/// Returns `InvalidParameter` if the text is not two positive integers
/// separated by `x`
pub fn parse_dimensions(text: &str) -> Result<(usize, usize)> {
    let invalid = || invalid_parameter("dimensions", &text, &"expected ROWSxCOLS, e.g. 3x8");

    let (rows, cols) = text.split_once(['x', 'X']).ok_or_else(invalid)?;
    let rows: usize = rows.trim().parse().map_err(|_parse_error| invalid())?;
    let cols: usize = cols.trim().parse().map_err(|_parse_error| invalid())?;

    if rows == 0 || cols == 0 {
        return Err(invalid());
    }
    Ok((rows, cols))
}
