//! Collapse rule lookup and its inverse, built once per process
//!
//! A 2x2 block collapses to true when exactly one of its four cells is set.
//! Both directions of the rule are flattened into fixed-size tables indexed by
//! the block's 4-bit encoding so the propagation loops never hash blocks.

use crate::rule::block::{Block, ColumnPair};
use std::sync::LazyLock;

static RULE_TABLES: LazyLock<RuleTables> = LazyLock::new(RuleTables::build);

/// Read-only forward and inverse tables for the collapse rule
#[derive(Debug, Clone)]
pub struct RuleTables {
    collapse: [bool; Block::COUNT],
    preimages_of_false: Vec<Block>,
    preimages_of_true: Vec<Block>,
}

impl RuleTables {
    /// Shared process-wide tables
    pub fn global() -> &'static Self {
        &RULE_TABLES
    }

    /// Enumerate all blocks and group them by the value they collapse to
    pub fn build() -> Self {
        let mut collapse = [false; Block::COUNT];
        let mut preimages_of_false = Vec::new();
        let mut preimages_of_true = Vec::new();

        for block in Block::all() {
            let value = collapse_block(block);
            if let Some(slot) = collapse.get_mut(block.index()) {
                *slot = value;
            }
            if value {
                preimages_of_true.push(block);
            } else {
                preimages_of_false.push(block);
            }
        }

        Self {
            collapse,
            preimages_of_false,
            preimages_of_true,
        }
    }

    /// Value a block collapses to
    pub fn collapse(&self, block: Block) -> bool {
        self.collapse.get(block.index()).copied().unwrap_or(false)
    }

    /// Value the block formed by two adjacent column pairs collapses to
    pub fn collapse_pairs(&self, left: ColumnPair, right: ColumnPair) -> bool {
        self.collapse(Block::from_pairs(left, right))
    }

    /// Every block that collapses to `value`
    pub fn preimages(&self, value: bool) -> &[Block] {
        if value {
            &self.preimages_of_true
        } else {
            &self.preimages_of_false
        }
    }
}

/// The rule itself: true iff exactly one cell of the block is set
pub const fn collapse_block(block: Block) -> bool {
    block.population() == 1
}
