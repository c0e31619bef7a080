//! Preimage counting driver
//!
//! Chooses a traversal orientation, expands the first image row, runs the
//! transfer step over the remaining rows and sums the final distribution.

use crate::algorithm::distribution::Distribution;
use crate::algorithm::expansion::expand_first_row;
use crate::algorithm::transfer::transfer;
use crate::io::error::{PreimageError, Result};
use crate::spatial::BoolImage;
use num_bigint::BigUint;
use std::borrow::Cow;

/// Which image dimension is walked row by row
///
/// The collapse rule is symmetric under transposition, so every orientation
/// yields the same count; only the boundary row width changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Orientation {
    /// Transpose when that makes boundary rows narrower
    #[default]
    Narrowest,
    /// Walk image rows as given
    RowMajor,
    /// Walk image columns as rows
    Transposed,
}

impl Orientation {
    /// Whether this orientation transposes the given image
    pub const fn transposes(self, rows: usize, cols: usize) -> bool {
        match self {
            Self::Narrowest => cols > rows,
            Self::RowMajor => false,
            Self::Transposed => true,
        }
    }
}

/// Counter settings
#[derive(Clone, Copy, Debug, Default)]
pub struct CounterConfig {
    /// Traversal orientation
    pub orientation: Orientation,
}

/// Progress report emitted after each processed image row
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowProgress {
    /// Image rows processed so far
    pub completed: usize,
    /// Image rows in the traversal
    pub total: usize,
    /// Distinct boundary rows after this step
    pub boundary_states: usize,
}

/// Counts preimages of boolean images by boundary-row propagation
#[derive(Clone, Copy, Debug, Default)]
pub struct PreimageCounter {
    config: CounterConfig,
}

impl PreimageCounter {
    /// Create a counter with the given settings
    pub const fn new(config: CounterConfig) -> Self {
        Self { config }
    }

    /// The image as it will be traversed
    pub fn oriented<'a>(&self, image: &'a BoolImage) -> Cow<'a, BoolImage> {
        if self.config.orientation.transposes(image.rows(), image.cols()) {
            log::info!(
                "transposing {}x{} image to walk {} rows of width {}",
                image.rows(),
                image.cols(),
                image.cols(),
                image.rows()
            );
            Cow::Owned(image.transposed())
        } else {
            Cow::Borrowed(image)
        }
    }

    /// Continue a distribution through further image rows
    ///
    /// # Errors
    ///
    /// Returns an error if a row's width does not match the distribution
    pub fn propagate<I>(distribution: Distribution, rows: I) -> Result<Distribution>
    where
        I: IntoIterator<Item = Vec<bool>>,
    {
        rows.into_iter()
            .try_fold(distribution, |current, row| transfer(&current, &row))
    }

    /// Final boundary-row distribution of the oriented image
    ///
    /// # Errors
    ///
    /// Returns `ImageTooWide` if the oriented image's rows cannot be packed
    pub fn distribution(&self, image: &BoolImage) -> Result<Distribution> {
        self.distribution_with_progress(image, |_| {})
    }

    /// Final distribution, reporting after every processed row
    ///
    /// # Errors
    ///
    /// Returns `ImageTooWide` if the oriented image's rows cannot be packed
    pub fn distribution_with_progress<F>(
        &self,
        image: &BoolImage,
        mut on_row: F,
    ) -> Result<Distribution>
    where
        F: FnMut(RowProgress),
    {
        let oriented = self.oriented(image);
        let total = oriented.rows();
        let mut rows = oriented.iter_rows();

        let first = rows.next().ok_or(PreimageError::EmptyImage)?;
        let mut distribution = expand_first_row(&first)?;
        on_row(RowProgress {
            completed: 1,
            total,
            boundary_states: distribution.len(),
        });

        for (index, row) in rows.enumerate() {
            distribution = transfer(&distribution, &row)?;
            on_row(RowProgress {
                completed: index + 2,
                total,
                boundary_states: distribution.len(),
            });
        }

        Ok(distribution)
    }

    /// Number of preimages of `image`
    ///
    /// # Errors
    ///
    /// Returns `ImageTooWide` if the oriented image's rows cannot be packed
    pub fn count(&self, image: &BoolImage) -> Result<BigUint> {
        self.count_with_progress(image, |_| {})
    }

    /// Number of preimages, reporting after every processed row
    ///
    /// # Errors
    ///
    /// Returns `ImageTooWide` if the oriented image's rows cannot be packed
    pub fn count_with_progress<F>(&self, image: &BoolImage, on_row: F) -> Result<BigUint>
    where
        F: FnMut(RowProgress),
    {
        let distribution = self.distribution_with_progress(image, on_row)?;
        Ok(distribution.total())
    }
}

/// Number of preimages of `image` with default settings
///
/// # Errors
///
/// Returns `ImageTooWide` if both image dimensions exceed the packed row width
pub fn count_preimages(image: &BoolImage) -> Result<BigUint> {
    PreimageCounter::default().count(image)
}
