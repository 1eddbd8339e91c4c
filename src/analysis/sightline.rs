//! Line occupancy: how many trees sit on the six axes through a cell.
//!
//! Every tree, whoever owns it and whatever its size, counts once on each
//! cell within `range` steps along each direction. No blocking.

use crate::core::{Board, CellId, CellMap, Direction, Forest};

/// Per-cell count of trees in sightline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SightlineCounts {
    counts: CellMap<u32>,
}

impl SightlineCounts {
    /// Count trees in line with every cell, looking `range` steps out.
    #[must_use]
    pub fn compute(board: &Board, forest: &Forest, range: usize) -> Self {
        let mut counts = CellMap::with_default();
        for tree in forest.iter() {
            for direction in Direction::ALL {
                for cell in board.ray(tree.cell, direction, range) {
                    counts[cell] += 1;
                }
            }
        }
        Self { counts }
    }

    /// Trees in line with `cell`.
    #[must_use]
    pub fn count(&self, cell: CellId) -> u32 {
        self.counts[cell]
    }
}
