//! Error types for board construction, move application and engine setup

use thiserror::Error;

/// Errors reported by the engine
///
/// All failures are scoped to the single call that produced them; nothing
/// here is fatal to the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A disc was dropped into a full or nonexistent column
    #[error("invalid move, column {column} is full or out of range")]
    InvalidMove { column: usize },

    /// A move was requested on a board with no empty cells
    #[error("no legal moves, the board is full")]
    NoLegalMoves,

    #[error("malformed board: {reason}")]
    MalformedBoard { reason: String },

    #[error("invalid engine configuration: {reason}")]
    InvalidConfig { reason: String },

    /// A move string contained something other than a column digit
    #[error("could not parse '{character}' as a valid move")]
    ParseMove { character: char },
}

impl EngineError {
    pub(crate) fn malformed<S: Into<String>>(reason: S) -> Self {
        EngineError::MalformedBoard {
            reason: reason.into(),
        }
    }

    pub(crate) fn config<S: Into<String>>(reason: S) -> Self {
        EngineError::InvalidConfig {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
