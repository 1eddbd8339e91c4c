//! Action representation: the four commands a player can issue.
//!
//! Actions travel as text lines:
//! - `WAIT`
//! - `COMPLETE <cell>`
//! - `GROW <cell>`
//! - `SEED <from> <to>`
//!
//! Parsing is strict. Anything that is not one of the four keywords with the
//! right arguments is reported as an `ActionParseError`, never silently
//! turned into a default action.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use super::cell::CellId;

/// Errors raised while parsing an action line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionParseError {
    #[error("empty action line")]
    Empty,

    #[error("unknown action keyword '{0}'")]
    UnknownKeyword(String),

    #[error("{keyword} is missing its {argument} argument")]
    MissingArgument {
        keyword: &'static str,
        argument: &'static str,
    },

    #[error("'{0}' is not a cell index")]
    InvalidCell(String),

    #[error("{keyword} takes no argument '{extra}'")]
    TrailingToken { keyword: &'static str, extra: String },
}

/// Action category, used to filter the legal-action list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Wait,
    Complete,
    Grow,
    Seed,
}

/// A complete game action.
///
/// ## Example
///
/// ```
/// use photosynth_bot::core::{Action, CellId};
///
/// let seed: Action = "SEED 4 17".parse().unwrap();
/// assert_eq!(seed, Action::Seed { from: CellId::new(4), to: CellId::new(17) });
/// assert_eq!(seed.to_string(), "SEED 4 17");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Sleep until the next day.
    Wait,
    /// Harvest the large tree on `cell`.
    Complete { cell: CellId },
    /// Grow the tree on `cell` by one size.
    Grow { cell: CellId },
    /// Drop a seed from the tree on `from` onto `to`.
    Seed { from: CellId, to: CellId },
}

impl Action {
    /// The category of this action.
    #[must_use]
    pub const fn kind(&self) -> ActionKind {
        match self {
            Action::Wait => ActionKind::Wait,
            Action::Complete { .. } => ActionKind::Complete,
            Action::Grow { .. } => ActionKind::Grow,
            Action::Seed { .. } => ActionKind::Seed,
        }
    }

    /// Wire keyword of this action.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Action::Wait => "WAIT",
            Action::Complete { .. } => "COMPLETE",
            Action::Grow { .. } => "GROW",
            Action::Seed { .. } => "SEED",
        }
    }

    /// The cell the action is aimed at: the tree for COMPLETE and GROW,
    /// the landing cell for SEED.
    #[must_use]
    pub const fn target(&self) -> Option<CellId> {
        match *self {
            Action::Wait => None,
            Action::Complete { cell } | Action::Grow { cell } => Some(cell),
            Action::Seed { to, .. } => Some(to),
        }
    }
}

fn cell_arg<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    keyword: &'static str,
    argument: &'static str,
) -> Result<CellId, ActionParseError> {
    let token = tokens
        .next()
        .ok_or(ActionParseError::MissingArgument { keyword, argument })?;
    token
        .parse::<i64>()
        .ok()
        .and_then(CellId::from_wire)
        .ok_or_else(|| ActionParseError::InvalidCell(token.to_string()))
}

fn no_trailing<'a>(
    mut tokens: impl Iterator<Item = &'a str>,
    keyword: &'static str,
) -> Result<(), ActionParseError> {
    match tokens.next() {
        Some(extra) => Err(ActionParseError::TrailingToken {
            keyword,
            extra: extra.to_string(),
        }),
        None => Ok(()),
    }
}

impl FromStr for Action {
    type Err = ActionParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let keyword = tokens.next().ok_or(ActionParseError::Empty)?;

        let action = match keyword {
            // WAIT may carry a free-form message
            "WAIT" => return Ok(Action::Wait),
            "COMPLETE" => Action::Complete {
                cell: cell_arg(&mut tokens, "COMPLETE", "cell")?,
            },
            "GROW" => Action::Grow {
                cell: cell_arg(&mut tokens, "GROW", "cell")?,
            },
            "SEED" => Action::Seed {
                from: cell_arg(&mut tokens, "SEED", "source")?,
                to: cell_arg(&mut tokens, "SEED", "target")?,
            },
            other => return Err(ActionParseError::UnknownKeyword(other.to_string())),
        };

        no_trailing(tokens, action.keyword())?;
        Ok(action)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Wait => f.write_str(self.keyword()),
            Action::Complete { cell } | Action::Grow { cell } => {
                write!(f, "{} {}", self.keyword(), cell)
            }
            Action::Seed { from, to } => write!(f, "SEED {} {}", from, to),
        }
    }
}
