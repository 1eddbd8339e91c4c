//! # photosynth-bot
//!
//! A turn-decision engine for the two-player tree-growing game played on a
//! 37-cell hexagonal board.
//!
//! ## Design Principles
//!
//! 1. **Stateless Turns**: Every turn is decided from the snapshot alone.
//!    Derived data is rebuilt per turn and never carried over.
//!
//! 2. **Legal Actions Only**: The engine picks from the referee's legal
//!    list, falling back to WAIT. It never invents an action.
//!
//! 3. **Tunable Heuristics**: Score weights and economic thresholds live in
//!    `BotConfig` rather than in the algorithm.
//!
//! ## Architecture
//!
//! - **Shadow prediction**: which cells lose their sun next round.
//! - **Line occupancy**: how crowded each cell's six axes are.
//! - **Per-cell scores**: complete / grow / seed values from the two above.
//! - **Greedy selector**: COMPLETE, then GROW, then SEED, then WAIT, each
//!   gated by day-dependent cost/benefit tests.
//!
//! ## Modules
//!
//! - `core`: Cells, board topology, trees, actions, snapshots, configuration
//! - `analysis`: Shadow simulator, line-occupancy tracker, heuristic scorer
//! - `policy`: Turn economy and the action selector
//! - `protocol`: Referee input reader and command writer

pub mod core;
pub mod analysis;
pub mod policy;
pub mod protocol;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionKind, ActionParseError,
    Board, BoardError, Cell, CellId, CellMap, CellRecord, Direction, BOARD_SIZE, EDGE_CELLS,
    Forest, ForestError, Tree, TreeSize,
    PlayerTotals, TurnSnapshot,
    BotConfig, ConfigError, EconomyConfig, HeuristicWeights,
};

pub use crate::analysis::{CellScores, ShadowMap, SightlineCounts, TurnAnalysis};

pub use crate::policy::{decide, Decision, DecisionPolicy, Economy, GreedyPolicy};

pub use crate::protocol::{format_command, ProtocolError, ProtocolReader};

pub use crate::error::{Error, Result};
