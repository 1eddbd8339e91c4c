//! Per-cell heuristic scores.
//!
//! Shadow next round stands in for "this tree makes no sun tomorrow":
//! harvesting such a tree costs nothing in production, growing it gains
//! nothing.

use serde::{Deserialize, Serialize};

use crate::core::{Board, CellMap, HeuristicWeights};

use super::shadow::ShadowMap;
use super::sightline::SightlineCounts;

/// The three scores of one cell. Higher is better.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellScores {
    pub complete: i64,
    pub grow: i64,
    pub seed: i64,
}

/// Score every cell.
#[must_use]
pub fn score_cells(
    board: &Board,
    shadow: &ShadowMap,
    sightline: &SightlineCounts,
    weights: &HeuristicWeights,
) -> CellMap<CellScores> {
    CellMap::new(|id| {
        let cell = board.cell(id);
        let richness = i64::from(cell.richness);
        let shadowed = shadow.is_shadowed(id);

        let complete = if cell.is_edge() {
            0
        } else if shadowed {
            richness + weights.complete_shadow_bonus
        } else {
            richness
        };

        let grow = if shadowed {
            richness - weights.grow_shadow_penalty
        } else {
            richness
        };

        let seed = richness - weights.seed_line_penalty * i64::from(sightline.count(id));

        CellScores {
            complete,
            grow,
            seed,
        }
    })
}
