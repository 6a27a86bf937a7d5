//! Error types for the tic-tac-toe core

use thiserror::Error;

/// Errors raised by board construction, move application and search
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid board length: expected {expected} cells, got {got}")]
    InvalidBoardLength { expected: usize, got: usize },

    #[error("invalid cell value {value} at position {position} (expected 0, 1 or 2)")]
    InvalidCellValue { value: u8, position: usize },

    #[error("invalid character '{character}' at position {position}")]
    InvalidCellCharacter { character: char, position: usize },

    #[error("cell {cell} is out of range (0-8)")]
    CellOutOfRange { cell: usize },

    #[error("cell {cell} is already occupied")]
    CellOccupied { cell: usize },

    #[error("no move available: the board is full or the game is already decided")]
    NoMoveAvailable,

    #[error("invalid configuration: {message}")]
    Config { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
