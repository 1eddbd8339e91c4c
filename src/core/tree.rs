//! Trees and the per-turn tree set.
//!
//! Trees have no identity across turns beyond the cell they stand on.
//! The `Forest` is rebuilt from every snapshot.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::cell::{CellId, CellMap};

/// Errors raised while assembling a forest.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ForestError {
    #[error("two trees on cell {0}")]
    Occupied(CellId),

    #[error("tree on unknown cell {0}")]
    UnknownCell(i64),

    #[error("tree size {0} is out of range (expected 0..=3)")]
    Size(i64),
}

/// Growth stage of a tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TreeSize {
    Seed = 0,
    Small = 1,
    Medium = 2,
    Large = 3,
}

impl TreeSize {
    /// All sizes, smallest first.
    pub const ALL: [TreeSize; 4] = [
        TreeSize::Seed,
        TreeSize::Small,
        TreeSize::Medium,
        TreeSize::Large,
    ];

    /// Parse a wire size.
    pub fn from_wire(raw: i64) -> Result<Self, ForestError> {
        match raw {
            0 => Ok(TreeSize::Seed),
            1 => Ok(TreeSize::Small),
            2 => Ok(TreeSize::Medium),
            3 => Ok(TreeSize::Large),
            other => Err(ForestError::Size(other)),
        }
    }

    /// Numeric size. Doubles as shadow length and daily sun income.
    #[must_use]
    pub const fn value(self) -> i64 {
        self as i64
    }

    /// Size after one GROW, `None` for a large tree.
    #[must_use]
    pub const fn grown(self) -> Option<TreeSize> {
        match self {
            TreeSize::Seed => Some(TreeSize::Small),
            TreeSize::Small => Some(TreeSize::Medium),
            TreeSize::Medium => Some(TreeSize::Large),
            TreeSize::Large => None,
        }
    }
}

/// A tree as observed this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tree {
    pub cell: CellId,
    pub size: TreeSize,
    pub is_mine: bool,
    /// Already acted this day. Carried for completeness; not read by the policy.
    pub is_dormant: bool,
}

impl Tree {
    /// Create a tree.
    #[must_use]
    pub const fn new(cell: CellId, size: TreeSize, is_mine: bool) -> Self {
        Self {
            cell,
            size,
            is_mine,
            is_dormant: false,
        }
    }

    /// Mark the tree dormant.
    #[must_use]
    pub const fn dormant(mut self) -> Self {
        self.is_dormant = true;
        self
    }
}

/// The set of trees on the board, at most one per cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Forest {
    slots: CellMap<Option<Tree>>,
}

impl Default for Forest {
    fn default() -> Self {
        Self::new()
    }
}

impl Forest {
    /// Create an empty forest.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: CellMap::with_default(),
        }
    }

    /// Build a forest from a list of trees.
    pub fn from_trees(trees: impl IntoIterator<Item = Tree>) -> Result<Self, ForestError> {
        let mut forest = Self::new();
        for tree in trees {
            forest.plant(tree)?;
        }
        Ok(forest)
    }

    /// Add a tree. Fails if the cell already hosts one.
    pub fn plant(&mut self, tree: Tree) -> Result<(), ForestError> {
        let slot = &mut self.slots[tree.cell];
        if slot.is_some() {
            return Err(ForestError::Occupied(tree.cell));
        }
        *slot = Some(tree);
        Ok(())
    }

    /// Tree on a cell, if any.
    #[must_use]
    pub fn get(&self, cell: CellId) -> Option<&Tree> {
        self.slots[cell].as_ref()
    }

    /// Iterate over all trees in cell order.
    pub fn iter(&self) -> impl Iterator<Item = &Tree> {
        self.slots.iter().filter_map(|(_, t)| t.as_ref())
    }

    /// Iterate over my trees.
    pub fn mine(&self) -> impl Iterator<Item = &Tree> {
        self.iter().filter(|t| t.is_mine)
    }

    /// Number of my trees of a given size.
    #[must_use]
    pub fn count_mine(&self, size: TreeSize) -> usize {
        self.mine().filter(|t| t.size == size).count()
    }

    /// Total number of trees.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// True when no tree stands on the board.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_size_ordering() {
        assert!(TreeSize::Seed < TreeSize::Small);
        assert!(TreeSize::Medium < TreeSize::Large);
        assert_eq!(TreeSize::Large.value(), 3);
        assert_eq!(TreeSize::Medium.grown(), Some(TreeSize::Large));
        assert_eq!(TreeSize::Large.grown(), None);
    }

    #[test]
    fn test_tree_size_from_wire() {
        assert_eq!(TreeSize::from_wire(0), Ok(TreeSize::Seed));
        assert_eq!(TreeSize::from_wire(3), Ok(TreeSize::Large));
        assert_eq!(TreeSize::from_wire(4), Err(ForestError::Size(4)));
    }

    #[test]
    fn test_forest_plant_and_get() {
        let mut forest = Forest::new();
        assert!(forest.is_empty());

        forest.plant(Tree::new(CellId::new(3), TreeSize::Small, true)).unwrap();
        forest.plant(Tree::new(CellId::new(9), TreeSize::Large, false)).unwrap();

        assert_eq!(forest.len(), 2);
        assert_eq!(forest.get(CellId::new(3)).map(|t| t.size), Some(TreeSize::Small));
        assert!(forest.get(CellId::new(4)).is_none());
    }

    #[test]
    fn test_forest_rejects_double_occupancy() {
        let result = Forest::from_trees([
            Tree::new(CellId::new(5), TreeSize::Seed, true),
            Tree::new(CellId::new(5), TreeSize::Medium, false),
        ]);
        assert_eq!(result, Err(ForestError::Occupied(CellId::new(5))));
    }

    #[test]
    fn test_forest_counts_only_mine() {
        let forest = Forest::from_trees([
            Tree::new(CellId::new(1), TreeSize::Large, true),
            Tree::new(CellId::new(2), TreeSize::Large, true),
            Tree::new(CellId::new(3), TreeSize::Large, false),
            Tree::new(CellId::new(4), TreeSize::Seed, true).dormant(),
        ])
        .unwrap();

        assert_eq!(forest.count_mine(TreeSize::Large), 2);
        assert_eq!(forest.count_mine(TreeSize::Seed), 1);
        assert_eq!(forest.count_mine(TreeSize::Medium), 0);
        assert_eq!(forest.mine().count(), 3);
    }
}
