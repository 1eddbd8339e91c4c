//! The greedy action selector.
//!
//! Categories are tried in a fixed order and the first one that produces an
//! action wins:
//!
//! 1. COMPLETE: late game, or mid game on trees that lose their sun tomorrow
//! 2. GROW: while the upgrade still pays for itself, larger trees first
//! 3. SEED: one seed at a time, never next to my own trees
//! 4. WAIT
//!
//! Within a category, cells are tried best score first and the legal-action
//! list is scanned in the order it was received. Only actions from that list
//! are ever returned.

use tracing::{debug, info, trace};

use crate::analysis::{CellScores, TurnAnalysis};
use crate::core::{Action, ActionKind, Board, BotConfig, CellId, TreeSize, TurnSnapshot};

use super::economy::Economy;
use super::{Decision, DecisionPolicy};

/// Single-ply greedy policy driven by the per-cell heuristics.
#[derive(Clone, Debug, Default)]
pub struct GreedyPolicy {
    config: BotConfig,
}

impl GreedyPolicy {
    /// Create a policy with the given configuration.
    #[must_use]
    pub fn new(config: BotConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    fn choose_complete(
        &self,
        board: &Board,
        snapshot: &TurnSnapshot,
        analysis: &TurnAnalysis,
        economy: &Economy<'_>,
    ) -> Option<Action> {
        let thresholds = &self.config.economy;
        let late = snapshot.day >= thresholds.late_harvest_day;
        if !late && snapshot.day < thresholds.mid_harvest_day {
            return None;
        }

        let candidates = legal_targets(analysis, snapshot, ActionKind::Complete, |s| s.complete);
        debug!(
            candidates = ?listing(&candidates, analysis, |s| s.complete),
            "complete candidates (cell, score, shadowed)"
        );

        for cell in candidates {
            let Some(action) = snapshot
                .actions_of(ActionKind::Complete)
                .find(|a| a.target() == Some(cell))
            else {
                continue;
            };

            if !economy.harvest_pays(snapshot.nutrient, board.richness(cell)) {
                trace!(%cell, "harvest does not beat holding");
                continue;
            }

            let ready = if late {
                economy.can_afford_harvest(snapshot.me.sun)
            } else {
                analysis.is_shadowed(cell)
            };
            if ready {
                return Some(*action);
            }
        }

        None
    }

    fn choose_grow(
        &self,
        board: &Board,
        snapshot: &TurnSnapshot,
        analysis: &TurnAnalysis,
        economy: &Economy<'_>,
    ) -> Option<Action> {
        let [cost_small, cost_medium, cost_large] = economy.grow_costs();
        let final_day = self.config.economy.final_large_growth_day;

        let candidates = legal_targets(analysis, snapshot, ActionKind::Grow, |s| s.grow);
        debug!(
            candidates = ?listing(&candidates, analysis, |s| s.grow),
            "grow candidates (cell, score, shadowed)"
        );

        for cell in candidates {
            for action in snapshot
                .actions_of(ActionKind::Grow)
                .filter(|a| a.target() == Some(cell))
            {
                let Some(tree) = snapshot.tree(cell) else {
                    panic!("legal GROW on cell {cell}, which hosts no tree");
                };

                if !economy.growth_pays(tree.size, analysis.is_shadowed(cell)) {
                    continue;
                }

                let take = match tree.size {
                    TreeSize::Medium => {
                        snapshot.day < final_day
                            || (snapshot.day == final_day && board.richness(cell) > 1)
                    }
                    TreeSize::Small => {
                        economy.count(TreeSize::Large) == 0 || cost_medium <= cost_large / 3 * 2
                    }
                    TreeSize::Seed => cost_small <= cost_medium / 2,
                    TreeSize::Large => false,
                };
                if take {
                    return Some(*action);
                }
            }
        }

        None
    }

    fn choose_seed(
        &self,
        snapshot: &TurnSnapshot,
        analysis: &TurnAnalysis,
        economy: &Economy<'_>,
    ) -> Option<Action> {
        if economy.count(TreeSize::Seed) > 0 {
            return None;
        }

        let candidates = legal_targets(analysis, snapshot, ActionKind::Seed, |s| s.seed);
        debug!(
            candidates = ?candidates
                .iter()
                .map(|&c| (
                    c.0,
                    analysis.scores(c).seed,
                    analysis.is_shadowed(c),
                    analysis.is_next_to_own_tree(c),
                ))
                .collect::<Vec<_>>(),
            "seed candidates (cell, score, shadowed, next to own tree)"
        );

        candidates
            .into_iter()
            .filter(|&cell| !analysis.is_next_to_own_tree(cell))
            .find_map(|cell| {
                snapshot
                    .actions_of(ActionKind::Seed)
                    .find(|a| a.target() == Some(cell))
                    .copied()
            })
    }
}

/// Cells targeted by at least one legal action of `kind`, best `key` first.
fn legal_targets(
    analysis: &TurnAnalysis,
    snapshot: &TurnSnapshot,
    kind: ActionKind,
    key: impl Fn(&CellScores) -> i64,
) -> Vec<CellId> {
    analysis
        .ranked_by(key)
        .into_iter()
        .filter(|&cell| snapshot.actions_of(kind).any(|a| a.target() == Some(cell)))
        .collect()
}

fn listing(
    cells: &[CellId],
    analysis: &TurnAnalysis,
    key: impl Fn(&CellScores) -> i64,
) -> Vec<(u8, i64, bool)> {
    cells
        .iter()
        .map(|&c| (c.0, key(&analysis.scores(c)), analysis.is_shadowed(c)))
        .collect()
}

impl DecisionPolicy for GreedyPolicy {
    fn decide(&self, board: &Board, snapshot: &TurnSnapshot) -> Decision {
        let analysis = TurnAnalysis::compute(board, snapshot, &self.config.weights);
        let economy = Economy::compute(snapshot, &analysis, &self.config.economy);

        debug!(
            day = snapshot.day,
            sun_direction = snapshot.sun_direction().index(),
            nutrient = snapshot.nutrient,
            sun = snapshot.me.sun,
            grow_costs = ?economy.grow_costs(),
            complete_cost = self.config.economy.complete_cost,
            seeds = economy.count(TreeSize::Seed),
            sunlit_large = economy.sunlit(TreeSize::Large),
            sunlit_medium = economy.sunlit(TreeSize::Medium),
            sunlit_small = economy.sunlit(TreeSize::Small),
            "turn economy"
        );

        let action = self
            .choose_complete(board, snapshot, &analysis, &economy)
            .or_else(|| self.choose_grow(board, snapshot, &analysis, &economy))
            .or_else(|| self.choose_seed(snapshot, &analysis, &economy))
            .unwrap_or(Action::Wait);

        info!(day = snapshot.day, %action, "chose action");

        Decision {
            action,
            projected_income: economy.projected_income(),
            grow_costs: economy.grow_costs(),
            sun: snapshot.me.sun,
        }
    }
}
