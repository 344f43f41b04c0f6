//! The control loop: read one input, update the game, redraw, repeat.

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use log::info;
use rand::Rng;
use twenty48_core::{GameState, GameStatus};

use crate::input::{InputEvent, InputSource};
use crate::render::{Renderer, View};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won { score: u64, moves: u32 },
    Lost { score: u64, moves: u32 },
    Quit { score: u64 },
}

impl Outcome {
    /// Farewell printed once the terminal is back to normal.
    pub fn message(&self) -> String {
        match self {
            Outcome::Won { score, moves } => format!(
                "Well done! You beat the game with a score of {score}, in {moves} moves."
            ),
            Outcome::Lost { .. } => "No possible moves left.\nYou lost!".to_owned(),
            Outcome::Quit { score } => format!("Bye! Final score: {score}."),
        }
    }
}

/// Drive `game` until it is won, lost or the player quits.
///
/// The board is drawn once up front and again after every accepted change,
/// each redraw followed by `delay`.
pub fn run<R, I, D>(
    game: &mut GameState<R>,
    input: &mut I,
    screen: &mut D,
    delay: Duration,
) -> Result<Outcome>
where
    R: Rng,
    I: InputSource + ?Sized,
    D: Renderer + ?Sized,
{
    draw(game, screen)?;
    loop {
        match game.status() {
            GameStatus::Won => {
                return Ok(Outcome::Won {
                    score: game.score(),
                    moves: game.moves(),
                });
            }
            GameStatus::Lost => {
                return Ok(Outcome::Lost {
                    score: game.score(),
                    moves: game.moves(),
                });
            }
            GameStatus::Playing => {}
        }

        let updated = match input.next_event() {
            InputEvent::Move(direction) => game.play(direction)?.changed,
            InputEvent::Undo => game.undo(),
            InputEvent::Quit => {
                info!("player quit after {} moves", game.moves());
                return Ok(Outcome::Quit {
                    score: game.score(),
                });
            }
            InputEvent::Idle => false,
        };
        if updated {
            draw(game, screen)?;
            thread::sleep(delay);
        }
    }
}

fn draw<R, D: Renderer + ?Sized>(game: &GameState<R>, screen: &mut D) -> Result<()> {
    screen
        .render(&View::of(game))
        .context("failed to draw the board")
}
