//! Core of a terminal 2048: an N x N board (4 <= N <= 8), the slide/merge
//! move engine, tile spawning and the game state machine with one-level undo.
//!
//! Nothing in here touches the terminal. The front end feeds directions and
//! undo requests into [`GameState`] and renders whatever it exposes.

pub mod engine;
pub mod error;
pub mod game;

pub use engine::{Board, BoardSize, Direction, Tile};
pub use error::{EngineError, Result};
pub use game::{GameState, GameStatus, MoveResult, Snapshot};
