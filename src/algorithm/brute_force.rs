//! Exhaustive preimage counting for small images
//!
//! Enumerates every candidate preimage as the bits of a counter and checks
//! each sliding 2x2 window against the image. Exponential in the preimage
//! area; it exists to cross-check the transfer-matrix counter.

use crate::io::configuration::MAX_BRUTE_FORCE_CELLS;
use crate::io::error::{Result, invalid_parameter};
use crate::rule::{Block, RuleTables};
use crate::spatial::{BoolImage, RowPreimage};
use bitvec::prelude::*;
use num_bigint::BigUint;

/// Whether the preimage encoded in `cells` collapses to `image`
///
/// Cell `(row, col)` of the `(rows + 1) x (cols + 1)` preimage is bit
/// `row * (cols + 1) + col`. Bits missing from a short slice read as clear.
pub fn collapses_to(cells: &BitSlice<u32>, image: &BoolImage) -> bool {
    let tables = RuleTables::global();
    let stride = image.cols() + 1;
    let rows: Vec<RowPreimage> = cells
        .chunks(stride)
        .take(image.rows() + 1)
        .map(RowPreimage::from_bitslice)
        .collect();
    let blank = RowPreimage::new(stride);
    let row_at = |index: usize| rows.get(index).copied().unwrap_or(blank);

    (0..image.rows()).all(|row| {
        let (upper, lower) = (row_at(row), row_at(row + 1));
        (0..image.cols()).all(|col| {
            let block = Block::new(
                upper.get(col),
                upper.get(col + 1),
                lower.get(col),
                lower.get(col + 1),
            );
            image.get(row, col) == Some(tables.collapse(block))
        })
    })
}

/// Count preimages by testing every candidate grid
///
/// # Errors
///
/// Returns `InvalidParameter` when the preimage has more than
/// `MAX_BRUTE_FORCE_CELLS` cells
pub fn brute_force_count(image: &BoolImage) -> Result<BigUint> {
    let cells = (image.rows() + 1) * (image.cols() + 1);
    if cells > MAX_BRUTE_FORCE_CELLS {
        return Err(invalid_parameter(
            "image",
            &format!("{}x{}", image.rows(), image.cols()),
            &format!("preimage has {cells} cells; exhaustive search allows {MAX_BRUTE_FORCE_CELLS}"),
        ));
    }

    let mut count: u64 = 0;
    for mask in 0u32..(1u32 << cells) {
        if collapses_to(mask.view_bits::<Lsb0>(), image) {
            count += 1;
        }
    }

    Ok(BigUint::from(count))
}
