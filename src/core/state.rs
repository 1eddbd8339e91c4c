//! Per-turn game state.
//!
//! A `TurnSnapshot` is everything the referee tells us at the start of a
//! turn. It is built fresh every turn and dropped once the turn's action
//! has been chosen; nothing carries over.

use serde::{Deserialize, Serialize};

use super::action::{Action, ActionKind};
use super::cell::{CellId, Direction};
use super::tree::{Forest, Tree};

/// Sun points and score of one player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerTotals {
    pub sun: i64,
    pub score: i64,
}

impl PlayerTotals {
    #[must_use]
    pub const fn new(sun: i64, score: i64) -> Self {
        Self { sun, score }
    }
}

/// Observable game state for one turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnSnapshot {
    /// Current day, 0 to 23.
    pub day: u32,

    /// Base score of the next COMPLETE.
    pub nutrient: i64,

    pub me: PlayerTotals,

    pub opponent: PlayerTotals,

    /// Opponent is asleep until the next day.
    pub opponent_waiting: bool,

    pub forest: Forest,

    /// Legal actions in the order the referee listed them.
    pub legal_actions: Vec<Action>,
}

impl TurnSnapshot {
    /// Create a snapshot for `day` with no trees and only WAIT legal.
    #[must_use]
    pub fn new(day: u32) -> Self {
        Self {
            day,
            nutrient: 0,
            me: PlayerTotals::default(),
            opponent: PlayerTotals::default(),
            opponent_waiting: false,
            forest: Forest::new(),
            legal_actions: vec![Action::Wait],
        }
    }

    /// Set the nutrient value.
    #[must_use]
    pub fn with_nutrient(mut self, nutrient: i64) -> Self {
        self.nutrient = nutrient;
        self
    }

    /// Set my sun points.
    #[must_use]
    pub fn with_sun(mut self, sun: i64) -> Self {
        self.me.sun = sun;
        self
    }

    /// Set the forest.
    #[must_use]
    pub fn with_forest(mut self, forest: Forest) -> Self {
        self.forest = forest;
        self
    }

    /// Set the legal actions.
    #[must_use]
    pub fn with_actions(mut self, actions: Vec<Action>) -> Self {
        self.legal_actions = actions;
        self
    }

    /// Direction the sun shines from today.
    #[must_use]
    pub fn sun_direction(&self) -> Direction {
        Direction::for_day(self.day)
    }

    /// Tree on a cell, if any.
    #[must_use]
    pub fn tree(&self, cell: CellId) -> Option<&Tree> {
        self.forest.get(cell)
    }

    /// Legal actions of one kind, in listed order.
    pub fn actions_of(&self, kind: ActionKind) -> impl Iterator<Item = &Action> {
        self.legal_actions.iter().filter(move |a| a.kind() == kind)
    }
}
