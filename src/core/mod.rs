//! Core game types: cells, board, trees, actions, per-turn state, configuration.
//!
//! The board is built once; everything else here is rebuilt every turn.

pub mod cell;
pub mod board;
pub mod tree;
pub mod action;
pub mod state;
pub mod config;

pub use cell::{CellId, CellMap, Direction, BOARD_SIZE};
pub use board::{Board, BoardError, Cell, CellRecord, EDGE_CELLS, MAX_RICHNESS};
pub use tree::{Forest, ForestError, Tree, TreeSize};
pub use action::{Action, ActionKind, ActionParseError};
pub use state::{PlayerTotals, TurnSnapshot};
pub use config::{BotConfig, ConfigError, EconomyConfig, HeuristicWeights};
