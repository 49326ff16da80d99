use std::fmt;

/// Why a placement was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidReason {
    OffBoard,
    Occupied,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::OffBoard => write!(f, "move is off the board"),
            InvalidReason::Occupied => write!(f, "position is not empty"),
        }
    }
}

/// Errors raised by the rule engine. A failed operation never mutates the session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PenteError {
    #[error("invalid move at ({row}, {col}): {reason}")]
    InvalidMove {
        row: i32,
        col: i32,
        reason: InvalidReason,
    },

    #[error("there have been no previous moves")]
    EmptyHistory,

    #[error("the game is already over")]
    GameOver,

    #[error("unsupported board size {0} (expected 1..=19)")]
    InvalidBoardSize(usize),
}

/// Errors from the move notation and coordinate label parsers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("malformed move notation: {0:?}")]
    Malformed(String),

    #[error("move notation {0:?} points off the board")]
    OffBoard(String),

    #[error("malformed coordinate label: {0:?}")]
    BadLabel(String),
}
