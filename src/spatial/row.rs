use crate::io::configuration::MAX_BOUNDARY_WIDTH;
use bitvec::prelude::*;
use std::fmt;

/// One full row of a preimage, bit-packed with column `i` at bit `i`
///
/// Serves as the boundary state of the transfer step: all preimage prefixes
/// ending in the same row are interchangeable for the rows below it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowPreimage {
    bits: u64,
    width: usize,
}

impl RowPreimage {
    /// All-false row of the given width
    ///
    /// Callers validate widths with `boundary_width` first. A wider row is a
    /// caller bug: debug builds panic and release builds clamp to
    /// `MAX_BOUNDARY_WIDTH`.
    pub const fn new(width: usize) -> Self {
        debug_assert!(
            width <= MAX_BOUNDARY_WIDTH,
            "row width exceeds MAX_BOUNDARY_WIDTH"
        );
        let width = if width > MAX_BOUNDARY_WIDTH {
            MAX_BOUNDARY_WIDTH
        } else {
            width
        };
        Self { bits: 0, width }
    }

    /// Row from packed bits; bits at or above `width` are discarded
    pub const fn from_bits(bits: u64, width: usize) -> Self {
        let row = Self::new(width);
        Self {
            bits: bits & Self::mask(row.width),
            width: row.width,
        }
    }

    /// Row from a bit slice, column `i` taken from index `i`
    pub fn from_bitslice<T: BitStore, O: BitOrder>(cells: &BitSlice<T, O>) -> Self {
        let mut row = Self::new(cells.len());
        for index in cells.iter_ones() {
            row = row.with(index, true);
        }
        row
    }

    /// Row from booleans
    pub fn from_bools(cells: &[bool]) -> Self {
        let mut row = Self::new(cells.len());
        for (index, &cell) in cells.iter().enumerate() {
            row = row.with(index, cell);
        }
        row
    }

    /// Every row of the given width, in increasing bit order
    pub fn all(width: usize) -> impl Iterator<Item = Self> {
        let width = Self::new(width).width;
        (0..=Self::mask(width)).map(move |bits| Self::from_bits(bits, width))
    }

    const fn mask(width: usize) -> u64 {
        if width >= 64 {
            u64::MAX
        } else {
            (1u64 << width) - 1
        }
    }

    /// Number of columns
    pub const fn width(self) -> usize {
        self.width
    }

    /// Packed bits
    pub const fn bits(self) -> u64 {
        self.bits
    }

    /// Cell at `index`; false outside the row
    pub const fn get(self, index: usize) -> bool {
        index < self.width && (self.bits >> index) & 1 == 1
    }

    /// Copy with the cell at `index` set to `value`; out-of-range writes are ignored
    #[must_use]
    pub const fn with(self, index: usize, value: bool) -> Self {
        if index >= self.width {
            return self;
        }
        let bits = if value {
            self.bits | (1 << index)
        } else {
            self.bits & !(1 << index)
        };
        Self {
            bits,
            width: self.width,
        }
    }

    /// Copy extended by one column holding `value`
    ///
    /// A row already at `MAX_BOUNDARY_WIDTH` cannot grow: debug builds panic
    /// and release builds return it unchanged.
    #[must_use]
    pub const fn pushed(self, value: bool) -> Self {
        debug_assert!(
            self.width < MAX_BOUNDARY_WIDTH,
            "row already at MAX_BOUNDARY_WIDTH"
        );
        if self.width >= MAX_BOUNDARY_WIDTH {
            return self;
        }
        let grown = Self {
            bits: self.bits,
            width: self.width + 1,
        };
        grown.with(self.width, value)
    }
}

impl fmt::Display for RowPreimage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for index in 0..self.width {
            write!(f, "{}", if self.get(index) { '#' } else { '.' })?;
        }
        Ok(())
    }
}
