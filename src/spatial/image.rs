//! Rectangular boolean grids used for both images and preimages
//!
//! Construction rejects empty and ragged input, so every `BoolImage` handed to
//! the counting core is non-empty and rectangular.

use crate::io::error::{PreimageError, Result};
use ndarray::Array2;
use std::fmt;

/// Non-empty rectangular grid of booleans
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoolImage {
    cells: Array2<bool>,
}

impl BoolImage {
    /// Build an image from row vectors
    ///
    /// # Errors
    ///
    /// Returns `EmptyImage` when there are no rows or the first row is empty,
    /// and `RaggedRows` when any row differs in length from the first.
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self> {
        let expected = rows.first().map_or(0, Vec::len);
        if expected == 0 {
            return Err(PreimageError::EmptyImage);
        }

        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != expected {
                return Err(PreimageError::RaggedRows {
                    row,
                    expected,
                    found: cells.len(),
                });
            }
        }

        let flat: Vec<bool> = rows.iter().flatten().copied().collect();
        let cells = Array2::from_shape_vec((rows.len(), expected), flat).map_err(|e| {
            crate::io::error::invalid_parameter("rows", &rows.len(), &e)
        })?;

        Ok(Self { cells })
    }

    /// Wrap an existing array
    ///
    /// # Errors
    ///
    /// Returns `EmptyImage` if either dimension is zero
    pub fn from_array(cells: Array2<bool>) -> Result<Self> {
        if cells.is_empty() {
            return Err(PreimageError::EmptyImage);
        }
        Ok(Self { cells })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Cell value, or `None` outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.cells.get([row, col]).copied()
    }

    /// Copy of a single row
    pub fn row(&self, index: usize) -> Option<Vec<bool>> {
        (index < self.rows()).then(|| self.cells.row(index).to_vec())
    }

    /// Iterate over rows as owned vectors
    pub fn iter_rows(&self) -> impl Iterator<Item = Vec<bool>> + '_ {
        self.cells.rows().into_iter().map(|row| row.to_vec())
    }

    /// Swap rows and columns
    #[must_use]
    pub fn transposed(&self) -> Self {
        Self {
            cells: self.cells.t().to_owned(),
        }
    }

    /// Number of set cells
    pub fn count_set(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }
}

impl fmt::Display for BoolImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.rows().into_iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for &cell in row {
                write!(f, "{}", if cell { '#' } else { '.' })?;
            }
        }
        Ok(())
    }
}
