use thiserror::Error;

use crate::engine::{MAX_SIZE, MIN_SIZE, Tile};

/// Errors surfaced by the engine. Ineffective moves and undo without
/// history are not errors; they are reported through return values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("board size {size} is outside {}..={}", MIN_SIZE, MAX_SIZE)]
    InvalidSize { size: usize },

    #[error("tile value {value} is neither 0 nor a power of two >= 2")]
    InvalidTile { value: Tile },

    #[error("no empty cell to spawn a tile into")]
    NoEmptyCell,

    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        len: usize,
        expected: usize,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
