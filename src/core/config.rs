//! Bot configuration.
//!
//! Everything tunable lives here:
//! - `HeuristicWeights`: the per-cell scoring weights
//! - `EconomyConfig`: costs and day thresholds of the action selector
//! - `BotConfig`: combines both
//!
//! Defaults reproduce the tuned values. A TOML file may override any subset:
//!
//! ```toml
//! [weights]
//! seed_line_penalty = 3
//!
//! [economy]
//! late_harvest_day = 17
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

/// Weights of the per-cell heuristic scores.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicWeights {
    /// Added to the harvest score of a cell shadowed next round.
    pub complete_shadow_bonus: i64,

    /// Subtracted from the grow score of a cell shadowed next round.
    pub grow_shadow_penalty: i64,

    /// Subtracted from the seed score once per tree in sightline.
    pub seed_line_penalty: i64,

    /// How far along each axis trees count as in sightline (1-3).
    pub sightline_range: usize,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self {
            complete_shadow_bonus: 1,
            grow_shadow_penalty: 1,
            seed_line_penalty: 2,
            sightline_range: 3,
        }
    }
}

/// Costs and day thresholds used by the action selector.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyConfig {
    /// Index of the final day.
    pub last_day: u32,

    /// Sun points spent on COMPLETE.
    pub complete_cost: i64,

    /// Base GROW cost to reach size 1, 2 and 3, before the per-tree surcharge.
    pub grow_base_costs: [i64; 3],

    /// Sun points a large tree makes per day.
    pub large_tree_income: i64,

    /// Sun points that convert to one score point at game end.
    pub sun_per_point: i64,

    /// From this day on, harvest whenever the value test passes.
    pub late_harvest_day: u32,

    /// From this day on (until `late_harvest_day`), harvest shadowed trees.
    pub mid_harvest_day: u32,

    /// On this day only rich cells may still grow to size 3.
    pub final_large_growth_day: u32,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            last_day: 23,
            complete_cost: 4,
            grow_base_costs: [1, 3, 7],
            large_tree_income: 3,
            sun_per_point: 3,
            late_harvest_day: 18,
            mid_harvest_day: 13,
            final_large_growth_day: 22,
        }
    }
}

/// Complete bot configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    pub weights: HeuristicWeights,
    pub economy: EconomyConfig,
}

impl BotConfig {
    /// Load and validate a TOML configuration file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: BotConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the values keep the selector arithmetic sound.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !(1..=3).contains(&self.weights.sightline_range) {
            errors.push(format!(
                "weights.sightline_range must be 1..=3, got {}",
                self.weights.sightline_range
            ));
        }
        if self.economy.sun_per_point <= 0 {
            errors.push(format!(
                "economy.sun_per_point must be positive, got {}",
                self.economy.sun_per_point
            ));
        }
        if self.economy.complete_cost < 0 {
            errors.push(format!(
                "economy.complete_cost must not be negative, got {}",
                self.economy.complete_cost
            ));
        }
        if self.economy.grow_base_costs.iter().any(|&c| c < 0) {
            errors.push("economy.grow_base_costs must not be negative".to_string());
        }
        if self.economy.mid_harvest_day > self.economy.late_harvest_day {
            errors.push(format!(
                "economy.mid_harvest_day ({}) is after economy.late_harvest_day ({})",
                self.economy.mid_harvest_day, self.economy.late_harvest_day
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(errors))
        }
    }

    /// Replace the heuristic weights.
    #[must_use]
    pub fn with_weights(mut self, weights: HeuristicWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Replace the economy settings.
    #[must_use]
    pub fn with_economy(mut self, economy: EconomyConfig) -> Self {
        self.economy = economy;
        self
    }

    /// Override the seed line penalty.
    #[must_use]
    pub fn with_seed_line_penalty(mut self, penalty: i64) -> Self {
        self.weights.seed_line_penalty = penalty;
        self
    }

    /// Override the grow shadow penalty.
    #[must_use]
    pub fn with_grow_shadow_penalty(mut self, penalty: i64) -> Self {
        self.weights.grow_shadow_penalty = penalty;
        self
    }
}
