//! Per-turn board analysis.
//!
//! ## Overview
//!
//! Everything the action selector reads about individual cells is computed
//! here, from scratch, once per turn:
//!
//! - `shadow`: which cells will be shadowed next round
//! - `sightline`: how many trees sit in line with each cell
//! - `scoring`: complete / grow / seed scores built from the two above
//!
//! `TurnAnalysis` bundles the results. It borrows nothing and is dropped
//! with the turn, so no derived value can leak into the next one.
//!
//! ## Usage
//!
//! ```rust
//! use photosynth_bot::analysis::TurnAnalysis;
//! use photosynth_bot::core::{Board, BotConfig, CellId, TurnSnapshot};
//!
//! let board = Board::standard();
//! let snapshot = TurnSnapshot::new(0);
//! let analysis = TurnAnalysis::compute(&board, &snapshot, &BotConfig::default().weights);
//!
//! assert_eq!(analysis.scores(CellId::new(0)).grow, 3);
//! ```

pub mod shadow;
pub mod sightline;
pub mod scoring;

pub use shadow::{shadow_direction, ShadowMap};
pub use sightline::SightlineCounts;
pub use scoring::{score_cells, CellScores};

use crate::core::{Board, CellId, CellMap, HeuristicWeights, TurnSnapshot};

/// Derived per-cell facts for one turn.
#[derive(Clone, Debug)]
pub struct TurnAnalysis {
    pub shadow: ShadowMap,
    pub sightline: SightlineCounts,
    scores: CellMap<CellScores>,
    next_to_own_tree: CellMap<bool>,
}

impl TurnAnalysis {
    /// Analyse the board for `snapshot`.
    #[must_use]
    pub fn compute(board: &Board, snapshot: &TurnSnapshot, weights: &HeuristicWeights) -> Self {
        let shadow = ShadowMap::compute(board, &snapshot.forest, snapshot.sun_direction());
        let sightline =
            SightlineCounts::compute(board, &snapshot.forest, weights.sightline_range);
        let scores = score_cells(board, &shadow, &sightline, weights);

        let mut next_to_own_tree = CellMap::with_value(false);
        for tree in snapshot.forest.mine() {
            for neighbor in board.cell(tree.cell).adjacent() {
                next_to_own_tree[neighbor] = true;
            }
        }

        Self {
            shadow,
            sightline,
            scores,
            next_to_own_tree,
        }
    }

    /// Scores of a cell.
    #[must_use]
    pub fn scores(&self, cell: CellId) -> CellScores {
        self.scores[cell]
    }

    /// Whether `cell` will be shadowed next round.
    #[must_use]
    pub fn is_shadowed(&self, cell: CellId) -> bool {
        self.shadow.is_shadowed(cell)
    }

    /// Whether any neighbor of `cell` hosts one of my trees.
    #[must_use]
    pub fn is_next_to_own_tree(&self, cell: CellId) -> bool {
        self.next_to_own_tree[cell]
    }

    /// All cells ordered by `key` descending, ties by ascending index.
    #[must_use]
    pub fn ranked_by(&self, key: impl Fn(&CellScores) -> i64) -> Vec<CellId> {
        let mut cells: Vec<CellId> = CellId::all().collect();
        cells.sort_by_key(|&c| (std::cmp::Reverse(key(&self.scores[c])), c));
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Forest, Tree, TreeSize};

    #[test]
    fn test_next_to_own_tree_ignores_opponent() {
        let board = Board::standard();
        let forest = Forest::from_trees([
            Tree::new(CellId::new(0), TreeSize::Seed, true),
            Tree::new(CellId::new(19), TreeSize::Large, false),
        ])
        .unwrap();
        let snapshot = TurnSnapshot::new(0).with_forest(forest);
        let analysis = TurnAnalysis::compute(&board, &snapshot, &HeuristicWeights::default());

        for n in 1..=6 {
            assert!(analysis.is_next_to_own_tree(CellId::new(n)));
        }
        assert!(!analysis.is_next_to_own_tree(CellId::new(0)));
        assert!(!analysis.is_next_to_own_tree(CellId::new(20)));
    }

    #[test]
    fn test_ranked_by_breaks_ties_by_index() {
        let analysis = TurnAnalysis::compute(
            &Board::standard(),
            &TurnSnapshot::new(0),
            &HeuristicWeights::default(),
        );
        let ranked = analysis.ranked_by(|s| s.grow);
        // Richness 3 cells first, in index order
        assert_eq!(&ranked[..7], &(0..7).map(CellId::new).collect::<Vec<_>>()[..]);
        assert_eq!(ranked.last(), Some(&CellId::new(36)));
    }

    #[test]
    fn test_sun_direction_comes_from_day() {
        let board = Board::standard();
        let forest =
            Forest::from_trees([Tree::new(CellId::new(0), TreeSize::Small, true)]).unwrap();

        // Day 5: sun 5, shadows fall toward direction 0
        let snapshot = TurnSnapshot::new(5).with_forest(forest);
        let analysis = TurnAnalysis::compute(&board, &snapshot, &HeuristicWeights::default());
        assert!(analysis.is_shadowed(CellId::new(1)));
        assert!(!analysis.is_shadowed(CellId::new(2)));
        assert!(analysis.shadow.is_shadowed(CellId::new(1)));
    }

    #[test]
    fn test_seed_scores_follow_sightline() {
        let board = Board::standard();
        let forest = Forest::from_trees([
            Tree::new(CellId::new(0), TreeSize::Seed, true),
            Tree::new(CellId::new(7), TreeSize::Small, false),
        ])
        .unwrap();
        let snapshot = TurnSnapshot::new(0).with_forest(forest);
        let analysis = TurnAnalysis::compute(&board, &snapshot, &HeuristicWeights::default());

        // 1 lies between both trees on the east axis
        assert_eq!(analysis.sightline.count(CellId::new(1)), 2);
        assert_eq!(analysis.scores(CellId::new(1)).seed, 3 - 2 * 2);
        assert_eq!(analysis.sightline.count(CellId::new(8)), 1);
    }
}
