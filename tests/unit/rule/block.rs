//! Tests for block and column pair encodings

#[cfg(test)]
mod tests {
    use gridpreimage::rule::{Block, ColumnPair};

    // Tests all sixteen blocks are distinct and round-trip through their index
    // Verified by masking from_index with 0b0111
    #[test]
    fn test_block_index_round_trip() {
        let blocks: Vec<Block> = Block::all().collect();
        assert_eq!(blocks.len(), Block::COUNT);
        for (index, block) in blocks.iter().enumerate() {
            assert_eq!(block.index(), index);
        }
    }

    // Tests cells land in the documented bit positions
    // Verified by swapping the top-right and bottom-left shifts
    #[test]
    fn test_block_cell_layout() {
        assert_eq!(Block::new(true, false, false, false).index(), 0b0001);
        assert_eq!(Block::new(false, true, false, false).index(), 0b0010);
        assert_eq!(Block::new(false, false, true, false).index(), 0b0100);
        assert_eq!(Block::new(false, false, false, true).index(), 0b1000);
    }

    // Tests a block built from two column pairs splits back into the same pairs
    // Verified by returning the left pair from right()
    #[test]
    fn test_block_from_pairs() {
        for left in ColumnPair::ALL {
            for right in ColumnPair::ALL {
                let block = Block::from_pairs(left, right);
                assert_eq!(block.left(), left);
                assert_eq!(block.right(), right);
            }
        }
    }

    // Tests population counts set cells
    // Verified by counting zero bits instead
    #[test]
    fn test_block_population() {
        assert_eq!(Block::new(false, false, false, false).population(), 0);
        assert_eq!(Block::new(true, false, true, false).population(), 2);
        assert_eq!(Block::new(true, true, true, true).population(), 4);
    }

    // Tests column pair accessors and the enumeration order
    // Verified by swapping the upper and lower bits in ColumnPair::new
    #[test]
    fn test_column_pair_accessors() {
        let pair = ColumnPair::new(true, false);
        assert!(pair.upper());
        assert!(!pair.lower());
        assert_eq!(ColumnPair::ALL[0], ColumnPair::new(false, false));
        assert_eq!(ColumnPair::ALL[3], ColumnPair::new(true, true));
    }
}
