//! Next-round shadow prediction.
//!
//! Tomorrow the sun moves one sector on, so every tree of size `s` throws a
//! shadow `s` cells long in direction `sun + 1`. A cell on that path is
//! shadowed unless the tree standing on it is strictly taller than the
//! caster. The path keeps going through a taller tree; only the flag on that
//! cell is withheld.

use crate::core::{Board, CellId, CellMap, Direction, Forest, TreeSize};

/// Direction shadows fall tomorrow, given today's sun direction.
#[must_use]
pub const fn shadow_direction(sun: Direction) -> Direction {
    sun.next()
}

/// Per-cell "shadowed next round" flags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShadowMap {
    shadowed: CellMap<bool>,
}

impl ShadowMap {
    /// Predict tomorrow's shadows for the given trees and today's sun.
    #[must_use]
    pub fn compute(board: &Board, forest: &Forest, sun: Direction) -> Self {
        let mut shadowed = CellMap::with_value(false);
        let direction = shadow_direction(sun);

        // Casters in increasing size order; seeds cast nothing
        for caster in [TreeSize::Small, TreeSize::Medium, TreeSize::Large] {
            for tree in forest.iter().filter(|t| t.size == caster) {
                let length = caster.value() as usize;
                for cell in board.ray(tree.cell, direction, length) {
                    let blocked = forest.get(cell).is_some_and(|t| t.size > caster);
                    if !blocked {
                        shadowed[cell] = true;
                    }
                }
            }
        }

        Self { shadowed }
    }

    /// Whether `cell` will be in shadow next round.
    #[must_use]
    pub fn is_shadowed(&self, cell: CellId) -> bool {
        self.shadowed[cell]
    }

    /// Iterate over shadowed cells.
    pub fn shadowed_cells(&self) -> impl Iterator<Item = CellId> + '_ {
        self.shadowed.iter().filter(|&(_, &s)| s).map(|(c, _)| c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Tree;

    fn forest(trees: &[(u8, TreeSize)]) -> Forest {
        Forest::from_trees(
            trees
                .iter()
                .map(|&(c, s)| Tree::new(CellId::new(c), s, true)),
        )
        .unwrap()
    }

    #[test]
    fn test_no_trees_no_shadow() {
        let map = ShadowMap::compute(&Board::standard(), &Forest::new(), Direction::new(0));
        assert_eq!(map.shadowed_cells().count(), 0);
    }

    #[test]
    fn test_large_tree_shadow_length() {
        // Sun 5: shadows fall in direction 0, 0 -> 1 -> 7 -> 19
        let map = ShadowMap::compute(
            &Board::standard(),
            &forest(&[(0, TreeSize::Large)]),
            Direction::new(5),
        );
        let cells: Vec<_> = map.shadowed_cells().collect();
        assert_eq!(cells, vec![CellId::new(1), CellId::new(7), CellId::new(19)]);
        assert!(!map.is_shadowed(CellId::new(0)));
    }

    #[test]
    fn test_small_tree_and_seed() {
        let map = ShadowMap::compute(
            &Board::standard(),
            &forest(&[(0, TreeSize::Small), (4, TreeSize::Seed)]),
            Direction::new(5),
        );
        let cells: Vec<_> = map.shadowed_cells().collect();
        assert_eq!(cells, vec![CellId::new(1)]);
    }

    #[test]
    fn test_taller_occupant_blocks() {
        let map = ShadowMap::compute(
            &Board::standard(),
            &forest(&[(0, TreeSize::Medium), (1, TreeSize::Large), (7, TreeSize::Small)]),
            Direction::new(5),
        );
        assert!(!map.is_shadowed(CellId::new(1)));
        assert!(map.is_shadowed(CellId::new(7)));
    }

    #[test]
    fn test_equal_occupant_is_shadowed() {
        let map = ShadowMap::compute(
            &Board::standard(),
            &forest(&[(0, TreeSize::Medium), (1, TreeSize::Medium)]),
            Direction::new(5),
        );
        assert!(map.is_shadowed(CellId::new(1)));
        // The tree on 1 throws its own shadow onward
        assert!(map.is_shadowed(CellId::new(7)));
        assert!(map.is_shadowed(CellId::new(19)));
    }

    #[test]
    fn test_shadow_direction_follows_sun() {
        assert_eq!(shadow_direction(Direction::new(0)), Direction::new(1));
        assert_eq!(shadow_direction(Direction::new(5)), Direction::new(0));
    }
}
