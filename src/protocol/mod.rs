//! Referee protocol: text in, one command line out per turn.
//!
//! The decision core never touches I/O. This module parses the referee's
//! line-oriented input into a `Board` and `TurnSnapshot`s, and renders each
//! `Decision` back as a command line.

pub mod reader;

pub use reader::ProtocolReader;

use std::io::{BufRead, Write};

use thiserror::Error;
use tracing::info;

use crate::core::{Action, BoardError, ForestError};
use crate::policy::{Decision, DecisionPolicy};

/// Errors raised while reading referee input or writing commands.
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input ended while expecting {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("line {line}: missing {field}")]
    MissingField { line: usize, field: &'static str },

    #[error("line {line}: {field} '{value}' is not a valid number")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("invalid board: {0}")]
    Board(#[from] BoardError),

    #[error("invalid trees: {0}")]
    Forest(#[from] ForestError),
}

/// Render a decision as the command line sent to the referee.
///
/// WAIT carries the projected income and current sun points as its message.
#[must_use]
pub fn format_command(decision: &Decision) -> String {
    match decision.action {
        Action::Wait => format!(
            "WAIT DSP: {} SP: {}",
            decision.projected_income, decision.sun
        ),
        action => action.to_string(),
    }
}

/// Play a whole game: read the board, then answer every turn until input ends.
///
/// Returns the number of turns played.
pub fn run<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    policy: &impl DecisionPolicy,
) -> Result<usize, ProtocolError> {
    let mut reader = ProtocolReader::new(input);
    let board = reader.read_board()?;

    let mut turns = 0;
    while let Some(snapshot) = reader.read_turn()? {
        let decision = policy.decide(&board, &snapshot);
        writeln!(output, "{}", format_command(&decision))?;
        output.flush()?;
        turns += 1;
    }

    info!(turns, "input closed");
    Ok(turns)
}
