//! Row transfer step
//!
//! State after k image rows is a distribution over the last preimage row. For
//! the next image row, every boundary row is extended by every compatible
//! lower row and its multiplicity is carried over. Work is bounded by the
//! number of distinct boundary rows, never by the number of prefixes.

use crate::algorithm::distribution::{Distribution, boundary_width};
use crate::io::error::{PreimageError, Result};
use crate::rule::{Block, RuleTables};
use crate::spatial::RowPreimage;

/// Every lower row whose blocks with `upper` collapse to `image_row`
///
/// `upper` must be one cell wider than `image_row`; any other width yields no
/// rows.
pub fn compatible_lower_rows(upper: RowPreimage, image_row: &[bool]) -> Vec<RowPreimage> {
    if upper.width() != image_row.len() + 1 {
        return Vec::new();
    }
    let tables = RuleTables::global();

    let Some((&first, rest)) = image_row.split_first() else {
        return Vec::new();
    };

    let (top_left, top_right) = (upper.get(0), upper.get(1));
    let mut lowers = Vec::new();
    for bottom_left in [false, true] {
        for bottom_right in [false, true] {
            let block = Block::new(top_left, top_right, bottom_left, bottom_right);
            if tables.collapse(block) == first {
                lowers.push(RowPreimage::from_bools(&[bottom_left, bottom_right]));
            }
        }
    }

    for (offset, &target) in rest.iter().enumerate() {
        if lowers.is_empty() {
            break;
        }
        let column = offset + 1;
        let (top_left, top_right) = (upper.get(column), upper.get(column + 1));

        let mut extended = Vec::with_capacity(lowers.len() * 2);
        for lower in &lowers {
            let bottom_left = lower.get(column);
            for bottom_right in [false, true] {
                let block = Block::new(top_left, top_right, bottom_left, bottom_right);
                if tables.collapse(block) == target {
                    extended.push(lower.pushed(bottom_right));
                }
            }
        }
        lowers = extended;
    }

    lowers
}

/// Propagate a distribution through one more image row
///
/// # Errors
///
/// Returns `RaggedRows` when the image row does not match the distribution's
/// width, or a width error for an empty or oversized row
pub fn transfer(distribution: &Distribution, image_row: &[bool]) -> Result<Distribution> {
    let width = boundary_width(image_row.len())?;
    if width != distribution.width() {
        return Err(PreimageError::RaggedRows {
            row: 0,
            expected: distribution.width().saturating_sub(1),
            found: image_row.len(),
        });
    }

    let mut next = Distribution::new(width);
    for (upper, multiplicity) in distribution.iter() {
        for lower in compatible_lower_rows(*upper, image_row) {
            next.add(lower, multiplicity);
        }
    }

    log::debug!(
        "transfer: {} boundary rows -> {} boundary rows",
        distribution.len(),
        next.len()
    );
    Ok(next)
}
