use crate::io::configuration::MAX_BOUNDARY_WIDTH;
use crate::io::error::{PreimageError, Result};
use crate::spatial::RowPreimage;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// Multiplicity of every boundary row after some number of image rows
///
/// Each entry counts the distinct preimage prefixes that end in that row.
/// Entries are never zero; keys all share the distribution's width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    width: usize,
    counts: BTreeMap<RowPreimage, BigUint>,
}

impl Distribution {
    /// Empty distribution over rows of `width` cells
    pub const fn new(width: usize) -> Self {
        Self {
            width,
            counts: BTreeMap::new(),
        }
    }

    /// Every row of `width` cells with multiplicity one
    ///
    /// Propagating this through a single image row is equivalent to expanding
    /// that row as the first one.
    pub fn uniform(width: usize) -> Self {
        let mut distribution = Self::new(width);
        for row in RowPreimage::all(width) {
            distribution.add(row, &BigUint::one());
        }
        distribution
    }

    /// Count each row occurrence once
    pub fn from_rows(width: usize, rows: impl IntoIterator<Item = RowPreimage>) -> Self {
        let one = BigUint::one();
        let mut distribution = Self::new(width);
        for row in rows {
            distribution.add(row, &one);
        }
        distribution
    }

    /// Accumulate `multiplicity` onto `row`
    ///
    /// Zero multiplicities and rows of the wrong width are ignored.
    pub fn add(&mut self, row: RowPreimage, multiplicity: &BigUint) {
        if multiplicity.is_zero() || row.width() != self.width {
            return;
        }
        match self.counts.entry(row) {
            Entry::Occupied(mut entry) => *entry.get_mut() += multiplicity,
            Entry::Vacant(entry) => {
                entry.insert(multiplicity.clone());
            }
        }
    }

    /// Multiplicity of `row`, if present
    pub fn get(&self, row: &RowPreimage) -> Option<&BigUint> {
        self.counts.get(row)
    }

    /// Width of every boundary row
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of distinct boundary rows
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True when no preimage prefix survived
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Boundary rows with their multiplicities, in row order
    pub fn iter(&self) -> impl Iterator<Item = (&RowPreimage, &BigUint)> {
        self.counts.iter()
    }

    /// Sum of all multiplicities
    pub fn total(&self) -> BigUint {
        self.counts.values().sum()
    }
}

/// Boundary row width for an image row of `image_cols` cells
///
/// # Errors
///
/// Returns `EmptyImage` for a zero-width row and `ImageTooWide` when the
/// boundary row would exceed `MAX_BOUNDARY_WIDTH`
pub const fn boundary_width(image_cols: usize) -> Result<usize> {
    if image_cols == 0 {
        return Err(PreimageError::EmptyImage);
    }
    let width = image_cols + 1;
    if width > MAX_BOUNDARY_WIDTH {
        return Err(PreimageError::ImageTooWide {
            width,
            max: MAX_BOUNDARY_WIDTH,
        });
    }
    Ok(width)
}
