//! Action selection.
//!
//! Policies are trait-based so the turn loop does not care how an action is
//! chosen:
//! - `DecisionPolicy`: snapshot in, one `Decision` out
//! - `GreedyPolicy`: the heuristic state machine over COMPLETE / GROW / SEED / WAIT
//!
//! `decide` is the one-call entry point with the default configuration.

pub mod economy;
pub mod selector;

pub use economy::{ground_value, Economy};
pub use selector::GreedyPolicy;

use serde::{Deserialize, Serialize};

use crate::core::{Action, Board, TurnSnapshot};

/// The chosen action plus the figures behind it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub action: Action,

    /// Sun points my unshadowed trees will make next round.
    pub projected_income: i64,

    /// Cost to grow into size 1, 2 and 3 this turn.
    pub grow_costs: [i64; 3],

    /// My sun points this turn.
    pub sun: i64,
}

/// Policy for choosing this turn's action.
pub trait DecisionPolicy {
    /// Choose one action from `snapshot.legal_actions`, or WAIT.
    ///
    /// Must be a pure function of its inputs.
    fn decide(&self, board: &Board, snapshot: &TurnSnapshot) -> Decision;
}

/// Choose this turn's action with the default greedy policy.
///
/// ```
/// use photosynth_bot::core::{Action, Board, TurnSnapshot};
/// use photosynth_bot::policy::decide;
///
/// let snapshot = TurnSnapshot::new(0);
/// assert_eq!(decide(&Board::standard(), &snapshot), Action::Wait);
/// ```
#[must_use]
pub fn decide(board: &Board, snapshot: &TurnSnapshot) -> Action {
    GreedyPolicy::default().decide(board, snapshot).action
}
