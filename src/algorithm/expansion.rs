//! First-row expansion
//!
//! Builds every two-row preimage of the first image row column by column,
//! then keeps only the second row of each survivor. The first row's identity
//! no longer matters once the prefixes are grouped by their boundary.

use crate::algorithm::distribution::{Distribution, boundary_width};
use crate::io::error::Result;
use crate::rule::{ColumnPair, RuleTables};
use crate::spatial::RowPreimage;

/// A partially built pair of preimage rows covering the first columns
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowPairCandidate {
    /// Upper preimage row built so far
    pub upper: RowPreimage,
    /// Lower preimage row built so far
    pub lower: RowPreimage,
}

impl RowPairCandidate {
    /// Column pair at `column` of the candidate
    pub const fn column(&self, column: usize) -> ColumnPair {
        ColumnPair::new(self.upper.get(column), self.lower.get(column))
    }

    /// Copy extended by one column
    #[must_use]
    pub const fn extended(&self, pair: ColumnPair) -> Self {
        Self {
            upper: self.upper.pushed(pair.upper()),
            lower: self.lower.pushed(pair.lower()),
        }
    }
}

/// Enumerate every two-row preimage of `image_row`
///
/// Each candidate spans `image_row.len() + 1` columns. The order follows the
/// inverse rule index and then the column pair order.
///
/// # Errors
///
/// Returns an error if the row is empty or too wide to pack
pub fn first_row_candidates(image_row: &[bool]) -> Result<Vec<RowPairCandidate>> {
    boundary_width(image_row.len())?;
    let tables = RuleTables::global();

    let Some((&first, rest)) = image_row.split_first() else {
        return Ok(Vec::new());
    };

    let mut candidates: Vec<RowPairCandidate> = tables
        .preimages(first)
        .iter()
        .map(|block| {
            let (left, right) = (block.left(), block.right());
            RowPairCandidate {
                upper: RowPreimage::from_bools(&[left.upper(), right.upper()]),
                lower: RowPreimage::from_bools(&[left.lower(), right.lower()]),
            }
        })
        .collect();

    for (offset, &target) in rest.iter().enumerate() {
        let column = offset + 1;
        let mut extended = Vec::with_capacity(candidates.len() * 2);
        for candidate in &candidates {
            let current = candidate.column(column);
            for pair in ColumnPair::ALL {
                if tables.collapse_pairs(current, pair) == target {
                    extended.push(candidate.extended(pair));
                }
            }
        }
        candidates = extended;
    }

    Ok(candidates)
}

/// Compress the first row's preimages into a boundary-state distribution
///
/// # Errors
///
/// Returns an error if the row is empty or too wide to pack
pub fn expand_first_row(image_row: &[bool]) -> Result<Distribution> {
    let width = boundary_width(image_row.len())?;
    let candidates = first_row_candidates(image_row)?;
    let distribution =
        Distribution::from_rows(width, candidates.into_iter().map(|candidate| candidate.lower));

    log::debug!(
        "first row expanded to {} boundary rows ({} prefixes)",
        distribution.len(),
        distribution.total()
    );
    Ok(distribution)
}
