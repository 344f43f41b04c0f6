use rand::Rng;
use std::fmt;

use super::{MAX_SIZE, MIN_SIZE, ops, spawn};
use crate::error::{EngineError, Result};

/// A single cell value: 0 for empty, otherwise a power of two >= 2.
pub type Tile = u32;

/// A direction to move/merge tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];
}

/// Board dimension, validated to lie in `MIN_SIZE..=MAX_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSize(usize);

impl BoardSize {
    pub fn new(size: usize) -> Result<Self> {
        if (MIN_SIZE..=MAX_SIZE).contains(&size) {
            Ok(BoardSize(size))
        } else {
            Err(EngineError::InvalidSize { size })
        }
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// N x N 2048 board stored row-major.
///
/// Every cell holds 0 (empty) or a power of two >= 2. Constructors check
/// this; the move and spawn engines preserve it.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) size: BoardSize,
    pub(crate) cells: Vec<Tile>,
}

impl Board {
    /// An empty board of the given size.
    pub fn new(size: BoardSize) -> Self {
        let n = size.get();
        Board {
            size,
            cells: vec![0; n * n],
        }
    }

    /// Build a board from explicit rows. The row count is the board size.
    ///
    /// ```
    /// use twenty48_core::Board;
    /// let b = Board::from_rows(vec![vec![2, 2, 0, 0]; 4]).unwrap();
    /// assert_eq!(b.size().get(), 4);
    /// assert_eq!(b.get(3, 1), 2);
    /// ```
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self> {
        let size = BoardSize::new(rows.len())?;
        let n = size.get();
        let mut cells = Vec::with_capacity(n * n);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != n {
                return Err(EngineError::RaggedRows {
                    row,
                    len: values.len(),
                    expected: n,
                });
            }
            if let Some(&value) = values.iter().find(|&&v| !is_valid_tile(v)) {
                return Err(EngineError::InvalidTile { value });
            }
            cells.extend(values);
        }
        Ok(Board { size, cells })
    }

    #[inline]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Tile at `(row, col)`. Panics when out of bounds, like slice indexing.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Tile {
        self.cells[row * self.size.get() + col]
    }

    /// Borrow the cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// Iterate over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> + '_ {
        self.cells.chunks(self.size.get())
    }

    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.rows().map(<[Tile]>::to_vec).collect()
    }

    /// Return the result of sliding/merging tiles in `dir` (no random insert).
    ///
    /// ```
    /// use twenty48_core::{Board, Direction};
    /// let mut rows = vec![vec![0; 4]; 4];
    /// rows[0] = vec![2, 2, 0, 0];
    /// let out = Board::from_rows(rows).unwrap().shift(Direction::Left);
    /// assert_eq!(out.board.get(0, 0), 4);
    /// assert_eq!(out.score, 4);
    /// assert!(out.changed);
    /// ```
    #[inline]
    pub fn shift(&self, dir: Direction) -> ops::Shifted {
        ops::shift(self, dir)
    }

    /// Insert a 2 (7 in 8) or 4 (1 in 8) into a uniformly chosen empty cell.
    /// Returns the `(row, col)` that was filled.
    ///
    /// ```
    /// use twenty48_core::{Board, BoardSize};
    /// use rand::{SeedableRng, rngs::StdRng};
    /// let mut rng = StdRng::seed_from_u64(123);
    /// let mut b = Board::new(BoardSize::new(5).unwrap());
    /// b.spawn_tile(&mut rng).unwrap();
    /// assert_eq!(b.count_empty(), 24);
    /// ```
    #[inline]
    pub fn spawn_tile<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(usize, usize)> {
        spawn::spawn_tile(self, rng)
    }

    /// True when no empty cell remains and no two neighbours are equal.
    #[inline]
    pub fn is_game_over(&self) -> bool {
        ops::is_game_over(self)
    }

    /// Return the highest tile value present (0 on an empty board).
    #[inline]
    pub fn highest_tile(&self) -> Tile {
        ops::highest_tile(self)
    }

    #[inline]
    pub fn count_empty(&self) -> usize {
        ops::count_empty(self)
    }

    /// Row-major indices of the empty cells.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, v)| **v == 0)
            .map(|(idx, _)| idx)
    }

    /// Sum of all tile values.
    #[inline]
    pub fn tile_sum(&self) -> u64 {
        ops::tile_sum(self)
    }
}

/// 0, or a power of two >= 2 small enough that merging two of them fits.
fn is_valid_tile(value: Tile) -> bool {
    value == 0 || (value >= 2 && value <= Tile::MAX / 2 && value.is_power_of_two())
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("size", &self.size.get())
            .field("rows", &self.to_rows())
            .finish()
    }
}

/// One line per row, each cell as `[value]` padded to fit 4 digits.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, row) in self.rows().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row
                .iter()
                .map(|&v| format!("[{}]", ops::format_cell(v)))
                .collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
