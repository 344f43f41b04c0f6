use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use twenty48_core::{Board, GameState, Tile};

/// What the renderer needs from the game.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    pub board: &'a Board,
    pub score: u64,
    pub max_tile: Tile,
    pub moves: u32,
}

impl<'a> View<'a> {
    pub fn of<R>(game: &'a GameState<R>) -> Self {
        View {
            board: game.board(),
            score: game.score(),
            max_tile: game.max_tile(),
            moves: game.moves(),
        }
    }
}

pub trait Renderer {
    fn render(&mut self, view: &View<'_>) -> io::Result<()>;
}

/// Text lines for one frame: the grid, then the score line and a footer.
pub fn frame(view: &View<'_>) -> Vec<String> {
    let mut lines = vec![String::new()];
    lines.extend(view.board.to_string().lines().map(str::to_owned));
    lines.push(String::new());
    lines.push(format!("Score: {}", view.score));
    lines.push(format!("Max tile: {}  Moves: {}", view.max_tile, view.moves));
    lines.push("arrows: move   r: undo   q: quit".to_owned());
    lines
}

/// Clears the screen and redraws every frame. Lines end in CRLF since the
/// terminal is in raw mode.
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, view: &View<'_>) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        for line in frame(view) {
            write!(self.out, "{line}\r\n")?;
        }
        self.out.flush()
    }
}
