use log::trace;

use super::state::{Board, Direction, Tile};

/// Outcome of sliding a whole board in one direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shifted {
    pub board: Board,
    /// Sum of the values produced by merges in this move.
    pub score: u64,
    /// True iff any cell differs from the input board.
    pub changed: bool,
}

/// Outcome of sliding one row/column toward index 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineShift {
    pub tiles: Vec<Tile>,
    /// `merged[i]` is set when `tiles[i]` was produced by a merge.
    pub merged: Vec<bool>,
    pub score: u64,
}

/// Walk order over one row/column: `count` cells from `start` by `step`.
/// The first cell is the one on the edge tiles travel toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Traversal {
    start: usize,
    step: isize,
    count: usize,
}

impl Traversal {
    fn new(direction: Direction, n: usize, lane: usize) -> Self {
        let (start, step) = match direction {
            Direction::Left => (lane * n, 1),
            Direction::Right => (lane * n + n - 1, -1),
            Direction::Up => (lane, n as isize),
            Direction::Down => ((n - 1) * n + lane, -(n as isize)),
        };
        Traversal {
            start,
            step,
            count: n,
        }
    }

    fn indices(self) -> impl Iterator<Item = usize> {
        (0..self.count).map(move |i| self.start.wrapping_add_signed(self.step * i as isize))
    }
}

/// Slide/merge tiles in the given direction. No randomness.
pub fn shift(board: &Board, direction: Direction) -> Shifted {
    let n = board.size.get();
    let mut cells = board.cells.clone();
    let mut score = 0;
    for lane in 0..n {
        let walk = Traversal::new(direction, n, lane);
        let line: Vec<Tile> = walk.indices().map(|idx| board.cells[idx]).collect();
        let shifted = shift_line(&line);
        for (idx, value) in walk.indices().zip(shifted.tiles) {
            cells[idx] = value;
        }
        score += shifted.score;
    }
    let changed = cells != board.cells;
    trace!("shift {direction:?}: score +{score}, changed={changed}");
    Shifted {
        board: Board {
            size: board.size,
            cells,
        },
        score,
        changed,
    }
}

/// Slide one line toward index 0 and merge equal neighbours.
///
/// A tile produced by a merge is flagged and cannot merge again in the same
/// pass, so `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]`, never `[8, 0, 0, 0]`.
pub fn shift_line(line: &[Tile]) -> LineShift {
    let mut tiles: Vec<Tile> = Vec::with_capacity(line.len());
    let mut merged: Vec<bool> = Vec::with_capacity(line.len());
    let mut score = 0u64;

    for &value in line.iter().filter(|&&v| v != 0) {
        if let (Some(last), Some(done)) = (tiles.last_mut(), merged.last_mut()) {
            if !*done && *last == value {
                *last = value * 2;
                *done = true;
                score += u64::from(*last);
                continue;
            }
        }
        tiles.push(value);
        merged.push(false);
    }

    tiles.resize(line.len(), 0);
    merged.resize(line.len(), false);
    LineShift {
        tiles,
        merged,
        score,
    }
}

/// True when no empty cell remains and no move can merge anything.
pub fn is_game_over(board: &Board) -> bool {
    count_empty(board) == 0 && !has_adjacent_pair(board)
}

/// True if two horizontally or vertically adjacent cells hold the same value.
pub fn has_adjacent_pair(board: &Board) -> bool {
    let n = board.size.get();
    let horizontal = board.rows().any(|row| row.windows(2).any(|w| w[0] == w[1]));
    let vertical = (0..n - 1).any(|r| (0..n).any(|c| board.get(r, c) == board.get(r + 1, c)));
    horizontal || vertical
}

/// Count the number of zero tiles.
pub fn count_empty(board: &Board) -> usize {
    board.cells.iter().filter(|&&v| v == 0).count()
}

pub fn highest_tile(board: &Board) -> Tile {
    board.cells.iter().copied().max().unwrap_or(0)
}

pub fn tile_sum(board: &Board) -> u64 {
    board.cells.iter().map(|&v| u64::from(v)).sum()
}

/// Centre a tile value in a 5-column field; blank for an empty cell.
/// Values wider than 5 digits are returned unpadded.
pub fn format_cell(value: Tile) -> String {
    if value == 0 {
        return " ".repeat(5);
    }
    let digits = value.to_string();
    let left = 6usize.saturating_sub(digits.len()) / 2;
    let right = 5usize.saturating_sub(digits.len() + left);
    format!("{}{}{}", " ".repeat(left), digits, " ".repeat(right))
}
