use crate::rule::block::Block;
use crate::rule::table::RuleTables;
use crate::spatial::BoolImage;
use ndarray::Array2;

/// Apply the collapse rule to every 2x2 sliding window of a preimage
///
/// The result has one row and one column fewer than the input. Returns `None`
/// when the preimage is too small to contain a single window.
pub fn collapse_grid(preimage: &BoolImage) -> Option<BoolImage> {
    let (rows, cols) = (preimage.rows(), preimage.cols());
    if rows < 2 || cols < 2 {
        return None;
    }

    let tables = RuleTables::global();
    let cell = |row: usize, col: usize| preimage.get(row, col).unwrap_or(false);
    let collapsed = Array2::from_shape_fn((rows - 1, cols - 1), |(row, col)| {
        tables.collapse(Block::new(
            cell(row, col),
            cell(row, col + 1),
            cell(row + 1, col),
            cell(row + 1, col + 1),
        ))
    });

    BoolImage::from_array(collapsed).ok()
}
