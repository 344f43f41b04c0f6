//! Game state machine: move -> spawn -> status check, plus one-level undo.

use log::{debug, info};
use rand::Rng;

use crate::engine::{Board, BoardSize, Direction, Tile, WIN_TILE};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// `Won` and `Lost` accept no further input.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

/// Board and score as they were before the last effective move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub score: u64,
}

/// What a directional input did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveResult {
    pub changed: bool,
    pub score_delta: u64,
    /// Cell that received the new tile, set only for effective moves.
    pub spawned: Option<(usize, usize)>,
}

/// A single 2048 session.
///
/// The snapshot slot is replaced only by effective moves; ineffective moves
/// and undo leave it alone, so undoing twice restores the same state twice.
pub struct GameState<R> {
    board: Board,
    score: u64,
    max_tile: Tile,
    moves: u32,
    snapshot: Option<Snapshot>,
    status: GameStatus,
    rng: R,
}

impl<R: Rng> GameState<R> {
    /// Start a game on an empty board with one spawned tile.
    ///
    /// ```
    /// use twenty48_core::{BoardSize, GameState, GameStatus};
    /// use rand::{SeedableRng, rngs::StdRng};
    /// let game = GameState::new(BoardSize::new(4).unwrap(), StdRng::seed_from_u64(3)).unwrap();
    /// assert_eq!(game.board().count_empty(), 15);
    /// assert_eq!(game.status(), GameStatus::Playing);
    /// ```
    pub fn new(size: BoardSize, mut rng: R) -> Result<Self> {
        let mut board = Board::new(size);
        board.spawn_tile(&mut rng)?;
        info!("new {size}x{size} game");
        Ok(Self::from_board(board, rng))
    }

    /// Wrap an existing board. Score and move counter start at zero and the
    /// loss condition is evaluated immediately; a win is only recognised
    /// after an effective move.
    pub fn from_board(board: Board, rng: R) -> Self {
        let mut game = GameState {
            max_tile: board.highest_tile(),
            board,
            score: 0,
            moves: 0,
            snapshot: None,
            status: GameStatus::Playing,
            rng,
        };
        if game.board.is_game_over() {
            info!("board has no moves left");
            game.status = GameStatus::Lost;
        }
        game
    }

    /// Apply a directional input.
    ///
    /// An ineffective move, or any move once the game has ended, returns a
    /// default `MoveResult` and changes nothing.
    pub fn play(&mut self, direction: Direction) -> Result<MoveResult> {
        if self.status.is_terminal() {
            return Ok(MoveResult::default());
        }
        let before = Snapshot {
            board: self.board.clone(),
            score: self.score,
        };
        let shifted = self.board.shift(direction);
        if !shifted.changed {
            debug!("{direction:?} had no effect");
            return Ok(MoveResult::default());
        }

        self.snapshot = Some(before);
        self.board = shifted.board;
        self.score += shifted.score;
        let spawned = self.board.spawn_tile(&mut self.rng)?;
        self.moves += 1;
        self.max_tile = self.max_tile.max(self.board.highest_tile());
        self.status = self.evaluate();
        debug!(
            "move {} {direction:?}: +{} (score {})",
            self.moves, shifted.score, self.score
        );

        Ok(MoveResult {
            changed: true,
            score_delta: shifted.score,
            spawned: Some(spawned),
        })
    }

    /// Restore board and score from the snapshot. Returns false (and does
    /// nothing) when no move has been made or the game is over.
    pub fn undo(&mut self) -> bool {
        if self.status.is_terminal() || self.moves == 0 {
            return false;
        }
        let Some(snapshot) = &self.snapshot else {
            return false;
        };
        self.board = snapshot.board.clone();
        self.score = snapshot.score;
        self.moves -= 1;
        debug!("undo -> score {}, {} moves", self.score, self.moves);
        true
    }

    fn evaluate(&self) -> GameStatus {
        if self.board.highest_tile() >= WIN_TILE {
            info!("won with score {} in {} moves", self.score, self.moves);
            GameStatus::Won
        } else if self.board.is_game_over() {
            info!("lost with score {} in {} moves", self.score, self.moves);
            GameStatus::Lost
        } else {
            GameStatus::Playing
        }
    }
}

impl<R> GameState<R> {
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// Highest tile seen this session; undo does not lower it.
    pub fn max_tile(&self) -> Tile {
        self.max_tile
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn game(rows: Vec<Vec<Tile>>) -> GameState<StdRng> {
        GameState::from_board(Board::from_rows(rows).unwrap(), StdRng::seed_from_u64(42))
    }

    fn tiles(g: &GameState<StdRng>) -> usize {
        g.board().cells().iter().filter(|&&v| v != 0).count()
    }

    #[test]
    fn new_game_has_one_tile() {
        for n in 4..=8 {
            let g = GameState::new(BoardSize::new(n).unwrap(), StdRng::seed_from_u64(n as u64))
                .unwrap();
            assert_eq!(tiles(&g), 1);
            assert_eq!(g.moves(), 0);
            assert_eq!(g.score(), 0);
            assert!(g.snapshot().is_none());
            assert!(matches!(g.max_tile(), 2 | 4));
        }
    }

    #[test]
    fn effective_move_scores_spawns_and_snapshots() {
        let mut rows = vec![vec![0; 4]; 4];
        rows[0] = vec![2, 2, 0, 0];
        let mut g = game(rows.clone());

        let res = g.play(Direction::Left).unwrap();
        assert!(res.changed);
        assert_eq!(res.score_delta, 4);
        assert_eq!(g.score(), 4);
        assert_eq!(g.moves(), 1);
        assert_eq!(g.board().get(0, 0), 4);
        assert_eq!(tiles(&g), 2);
        let (r, c) = res.spawned.unwrap();
        assert_ne!((r, c), (0, 0));
        assert!(matches!(g.board().get(r, c), 2 | 4));

        let snap = g.snapshot().unwrap();
        assert_eq!(snap.board, Board::from_rows(rows).unwrap());
        assert_eq!(snap.score, 0);
    }

    #[test]
    fn ineffective_move_keeps_snapshot_and_board() {
        let mut rows = vec![vec![0; 4]; 4];
        rows[0] = vec![2, 4, 8, 16];
        let mut g = game(rows);
        assert_eq!(g.play(Direction::Left).unwrap(), MoveResult::default());
        assert!(g.snapshot().is_none());
        assert_eq!(g.moves(), 0);

        assert!(g.play(Direction::Down).unwrap().changed);
        for _ in 0..1000 {
            if !g.play(Direction::Down).unwrap().changed {
                break;
            }
        }
        let snap = g.snapshot().cloned();
        let board = g.board().clone();
        let moves = g.moves();
        assert_eq!(g.play(Direction::Down).unwrap(), MoveResult::default());
        assert_eq!(g.snapshot().cloned(), snap);
        assert_eq!(g.board(), &board);
        assert_eq!(g.moves(), moves);
    }

    #[test]
    fn undo_restores_previous_state_once() {
        let mut rows = vec![vec![0; 4]; 4];
        rows[0] = vec![2, 2, 0, 0];
        let start = Board::from_rows(rows.clone()).unwrap();
        let mut g = game(rows);

        assert!(!g.undo(), "no history yet");

        g.play(Direction::Left).unwrap();
        let after_first = g.board().clone();
        let score_first = g.score();
        assert!(g.play(Direction::Down).unwrap().changed);
        assert_eq!(g.moves(), 2);

        assert!(g.undo());
        assert_eq!(g.board(), &after_first);
        assert_eq!(g.score(), score_first);
        assert_eq!(g.moves(), 1);

        // One level of history only: the second undo lands on the same state.
        assert!(g.undo());
        assert_eq!(g.board(), &after_first);
        assert_eq!(g.score(), score_first);
        assert_eq!(g.moves(), 0);
        assert_ne!(g.board(), &start);

        assert!(!g.undo());
    }

    #[test]
    fn ineffective_move_does_not_advance_snapshot() {
        let mut rows = vec![vec![0; 4]; 4];
        rows[0] = vec![2, 2, 0, 0];
        let start = Board::from_rows(rows.clone()).unwrap();
        let mut g = game(rows);
        g.play(Direction::Left).unwrap();

        // Find a direction that does nothing on the current board, if any.
        if let Some(dir) = Direction::ALL
            .into_iter()
            .find(|&d| !g.board().shift(d).changed)
        {
            assert!(!g.play(dir).unwrap().changed);
        }
        assert!(g.undo());
        assert_eq!(g.board(), &start);
        assert_eq!(g.score(), 0);
    }

    #[test]
    fn reaching_2048_wins_and_freezes() {
        let mut rows = vec![vec![0; 4]; 4];
        rows[1] = vec![1024, 1024, 0, 0];
        let mut g = game(rows);
        let res = g.play(Direction::Left).unwrap();
        assert!(res.changed);
        assert_eq!(res.score_delta, 2048);
        assert_eq!(g.status(), GameStatus::Won);
        assert_eq!(g.max_tile(), 2048);

        let board = g.board().clone();
        assert_eq!(g.play(Direction::Right).unwrap(), MoveResult::default());
        assert!(!g.undo());
        assert_eq!(g.board(), &board);
    }

    #[test]
    fn filling_the_last_gap_loses() {
        let mut g = game(vec![
            vec![2, 4, 2, 4],
            vec![4, 2, 4, 2],
            vec![2, 4, 2, 16],
            vec![4, 2, 0, 8],
        ]);
        assert_eq!(g.status(), GameStatus::Playing);
        let res = g.play(Direction::Left).unwrap();
        assert_eq!(res.spawned, Some((3, 3)));
        assert_eq!(g.status(), GameStatus::Lost);
        assert_eq!(g.play(Direction::Up).unwrap(), MoveResult::default());
    }

    #[test]
    fn full_board_with_pairs_is_still_playing() {
        let g = game(vec![
            vec![2, 2, 4, 8],
            vec![4, 8, 16, 32],
            vec![8, 16, 32, 64],
            vec![16, 32, 64, 128],
        ]);
        assert_eq!(g.status(), GameStatus::Playing);

        let stuck = game(vec![
            vec![2, 4, 2, 4],
            vec![4, 2, 4, 2],
            vec![2, 4, 2, 4],
            vec![4, 2, 4, 2],
        ]);
        assert_eq!(stuck.status(), GameStatus::Lost);
    }

    #[test]
    fn existing_2048_wins_only_after_a_move() {
        let mut rows = vec![vec![0; 4]; 4];
        rows[0] = vec![2048, 0, 0, 0];
        rows[3] = vec![0, 0, 0, 2];
        let mut g = game(rows);
        assert_eq!(g.status(), GameStatus::Playing);
        assert_eq!(g.max_tile(), 2048);

        assert!(g.play(Direction::Left).unwrap().changed);
        assert_eq!(g.status(), GameStatus::Won);
    }

    #[test]
    fn max_tile_survives_undo() {
        let mut rows = vec![vec![0; 4]; 4];
        rows[0] = vec![256, 256, 0, 0];
        let mut g = game(rows);
        g.play(Direction::Left).unwrap();
        assert_eq!(g.max_tile(), 512);
        assert!(g.undo());
        assert_eq!(g.board().highest_tile(), 256);
        assert_eq!(g.max_tile(), 512);
    }
}
