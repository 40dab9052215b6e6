//! Error types for the engine.

use thiserror::Error;

use crate::core::Player;

/// Broad classification of an [`Error`].
///
/// Callers that only care whether a move was bad, a board was in the wrong
/// state, or a configuration was rejected can match on this instead of on
/// individual variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The requested action names an occupied or nonexistent cell.
    InvalidMove,
    /// The board is in the wrong state for the requested operation.
    InvalidState,
    /// An engine configuration was rejected.
    Configuration,
}

/// Main error type.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("invalid move: cell ({row}, {col}) is outside the 3x3 board")]
    OutOfBounds { row: usize, col: usize },

    #[error("game already over")]
    GameOver,

    #[error("utility is only defined for terminal boards")]
    NotTerminal,

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("both players have a completed line")]
    MultipleWinners,

    #[error("{winner} completed a line but a mark was placed afterwards")]
    MoveAfterWin { winner: Player },

    #[error("board string has {got} cells, expected 9: '{context}'")]
    InvalidBoardLength { got: usize, context: String },

    #[error("invalid character '{character}' in board string '{context}'")]
    InvalidCellCharacter { character: char, context: String },

    #[error("probability {name} = {value} must be within [0, 1]")]
    InvalidProbability { name: &'static str, value: f64 },

    #[error("unknown difficulty '{0}' (expected easy, balanced, hard or perfect)")]
    UnknownDifficulty(String),
}

impl Error {
    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::CellOccupied { .. } | Error::OutOfBounds { .. } => ErrorKind::InvalidMove,
            Error::GameOver
            | Error::NotTerminal
            | Error::InvalidPieceCounts { .. }
            | Error::MultipleWinners
            | Error::MoveAfterWin { .. }
            | Error::InvalidBoardLength { .. }
            | Error::InvalidCellCharacter { .. } => ErrorKind::InvalidState,
            Error::InvalidProbability { .. } | Error::UnknownDifficulty(_) => {
                ErrorKind::Configuration
            }
        }
    }
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, Error>;
