/// Two vertically adjacent cells in one column of a row pair
///
/// Bit 0 holds the upper cell, bit 1 the lower cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnPair(u8);

impl ColumnPair {
    /// All four possible vertical pairs, in encoding order
    pub const ALL: [Self; 4] = [Self(0b00), Self(0b01), Self(0b10), Self(0b11)];

    /// Build a pair from its upper and lower cells
    pub const fn new(upper: bool, lower: bool) -> Self {
        Self((upper as u8) | ((lower as u8) << 1))
    }

    /// Cell in the upper row
    pub const fn upper(self) -> bool {
        self.0 & 0b01 != 0
    }

    /// Cell in the lower row
    pub const fn lower(self) -> bool {
        self.0 & 0b10 != 0
    }
}

/// A 2x2 window of preimage cells, packed into four bits
///
/// Bit layout: 0 = top-left, 1 = top-right, 2 = bottom-left, 3 = bottom-right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Block(u8);

impl Block {
    /// Number of distinct blocks
    pub const COUNT: usize = 16;

    /// Build a block from its four cells
    pub const fn new(top_left: bool, top_right: bool, bottom_left: bool, bottom_right: bool) -> Self {
        Self(
            (top_left as u8)
                | ((top_right as u8) << 1)
                | ((bottom_left as u8) << 2)
                | ((bottom_right as u8) << 3),
        )
    }

    /// Build a block from a left and a right column pair
    pub const fn from_pairs(left: ColumnPair, right: ColumnPair) -> Self {
        Self::new(left.upper(), right.upper(), left.lower(), right.lower())
    }

    /// Decode a block from its 4-bit index, ignoring higher bits
    pub const fn from_index(index: usize) -> Self {
        Self((index & 0b1111) as u8)
    }

    /// The 4-bit encoding used to index rule tables
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Number of true cells
    pub const fn population(self) -> u32 {
        self.0.count_ones()
    }

    /// Left column of the block
    pub const fn left(self) -> ColumnPair {
        ColumnPair::new(self.0 & 0b0001 != 0, self.0 & 0b0100 != 0)
    }

    /// Right column of the block
    pub const fn right(self) -> ColumnPair {
        ColumnPair::new(self.0 & 0b0010 != 0, self.0 & 0b1000 != 0)
    }

    /// Iterate over every possible block in encoding order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::COUNT).map(Self::from_index)
    }
}
