//! Engine module: the N x N board, the slide/merge move engine and tile
//! spawning. Public API stays small and ergonomic.
//!
//! - `Board` is the grid of tile values with useful methods.
//! - Free functions mirror the methods when convenient (e.g., `shift`).
//! - The line-level slide/merge and the spawn draw live in submodules.

mod ops;
mod spawn;
pub mod state;

pub use state::{Board, BoardSize, Direction, Tile};

pub use ops::{
    LineShift, Shifted, count_empty, format_cell, has_adjacent_pair, highest_tile, is_game_over,
    shift, shift_line, tile_sum,
};
pub use spawn::{FOUR_ODDS, random_tile, spawn_tile};

/// Smallest supported board dimension.
pub const MIN_SIZE: usize = 4;
/// Largest supported board dimension.
pub const MAX_SIZE: usize = 8;
/// Reaching a tile of at least this value wins the game.
pub const WIN_TILE: Tile = 2048;
