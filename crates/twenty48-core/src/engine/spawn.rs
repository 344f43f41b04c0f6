use log::debug;
use rand::Rng;

use super::state::{Board, Tile};
use crate::error::{EngineError, Result};

/// One in `FOUR_ODDS` spawned tiles is a 4; the rest are 2.
pub const FOUR_ODDS: u32 = 8;

/// Draw the value of a new tile: 4 with probability 1/8, otherwise 2.
pub fn random_tile<R: Rng + ?Sized>(rng: &mut R) -> Tile {
    if rng.gen_range(0..FOUR_ODDS) == 0 { 4 } else { 2 }
}

/// Place a new tile into a uniformly chosen empty cell.
///
/// Callers must only spawn when a cell is free; a full board yields
/// `EngineError::NoEmptyCell` and is left untouched.
pub fn spawn_tile<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Result<(usize, usize)> {
    let empty: Vec<usize> = board.empty_cells().collect();
    if empty.is_empty() {
        return Err(EngineError::NoEmptyCell);
    }
    let idx = empty[rng.gen_range(0..empty.len())];
    let value = random_tile(rng);
    board.cells[idx] = value;

    let n = board.size.get();
    let pos = (idx / n, idx % n);
    debug!("spawned {value} at {pos:?}");
    Ok(pos)
}
