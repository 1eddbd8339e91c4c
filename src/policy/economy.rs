//! Sun-point economy of the current turn.
//!
//! Growing costs a base price plus one sun point per tree I already own of
//! the target size. Harvesting costs a flat price and scores the nutrient
//! value plus a richness bonus. The selector compares these against what a
//! tree would still produce before the game ends.

use crate::analysis::TurnAnalysis;
use crate::core::{EconomyConfig, TreeSize, TurnSnapshot};

/// Score bonus for harvesting on soil of the given richness.
///
/// ```
/// use photosynth_bot::policy::ground_value;
///
/// assert_eq!(ground_value(3), 4);
/// assert_eq!(ground_value(2), 2);
/// assert_eq!(ground_value(1), 0);
/// ```
#[must_use]
pub fn ground_value(richness: u8) -> i64 {
    if richness > 1 {
        1 << (richness - 1)
    } else {
        0
    }
}

/// Tree counts, costs and income forecast for one turn.
#[derive(Clone, Debug)]
pub struct Economy<'a> {
    config: &'a EconomyConfig,
    day: u32,
    /// My trees per size, indexed by size value.
    counts: [usize; 4],
    /// My trees per size that will be in sunlight next round.
    sunlit: [usize; 4],
    /// Cost to grow into size 1, 2 and 3.
    grow_costs: [i64; 3],
}

impl<'a> Economy<'a> {
    /// Tally my trees and derive this turn's prices.
    #[must_use]
    pub fn compute(
        snapshot: &TurnSnapshot,
        analysis: &TurnAnalysis,
        config: &'a EconomyConfig,
    ) -> Self {
        let mut counts = [0usize; 4];
        let mut sunlit = [0usize; 4];
        for tree in snapshot.forest.mine() {
            let size = tree.size.value() as usize;
            counts[size] += 1;
            if tree.size != TreeSize::Seed && !analysis.is_shadowed(tree.cell) {
                sunlit[size] += 1;
            }
        }

        let mut grow_costs = [0i64; 3];
        for (i, cost) in grow_costs.iter_mut().enumerate() {
            *cost = config.grow_base_costs[i] + counts[i + 1] as i64;
        }

        Self {
            config,
            day: snapshot.day,
            counts,
            sunlit,
            grow_costs,
        }
    }

    /// Number of my trees of `size`.
    #[must_use]
    pub fn count(&self, size: TreeSize) -> usize {
        self.counts[size.value() as usize]
    }

    /// Number of my trees of `size` that are not shadowed next round.
    #[must_use]
    pub fn sunlit(&self, size: TreeSize) -> usize {
        self.sunlit[size.value() as usize]
    }

    /// Cost to grow into size 1, 2 and 3.
    #[must_use]
    pub fn grow_costs(&self) -> [i64; 3] {
        self.grow_costs
    }

    /// Cost to grow a tree of size `from`; `None` for a large tree.
    #[must_use]
    pub fn grow_cost(&self, from: TreeSize) -> Option<i64> {
        from.grown()
            .map(|to| self.grow_costs[to.value() as usize - 1])
    }

    /// Days remaining after today.
    #[must_use]
    pub fn days_left(&self) -> i64 {
        i64::from(self.config.last_day) - i64::from(self.day)
    }

    /// Sun points my unshadowed trees will make next round.
    #[must_use]
    pub fn projected_income(&self) -> i64 {
        [TreeSize::Small, TreeSize::Medium, TreeSize::Large]
            .iter()
            .map(|&size| self.sunlit(size) as i64 * size.value())
            .sum()
    }

    /// Score a harvest must beat: what a large tree would still earn,
    /// net of the harvest price, converted to points.
    #[must_use]
    pub fn harvest_threshold(&self) -> i64 {
        (self.days_left() * self.config.large_tree_income - self.config.complete_cost)
            / self.config.sun_per_point
    }

    /// Whether harvesting on soil of `richness` beats holding the tree.
    #[must_use]
    pub fn harvest_pays(&self, nutrient: i64, richness: u8) -> bool {
        nutrient + ground_value(richness) > self.harvest_threshold()
    }

    /// Whether `sun` covers the harvest price.
    #[must_use]
    pub fn can_afford_harvest(&self, sun: i64) -> bool {
        sun >= self.config.complete_cost
    }

    /// Whether growing a tree of size `from` earns back its cost before the
    /// game ends. A tree shadowed next round is also accepted if it pays off
    /// even after losing one day of income.
    #[must_use]
    pub fn growth_pays(&self, from: TreeSize, shadowed: bool) -> bool {
        let (Some(to), Some(cost)) = (from.grown(), self.grow_cost(from)) else {
            return false;
        };
        let gain = to.value();
        let production = self.days_left() * gain;

        production > cost || (shadowed && production - gain > cost)
    }
}
