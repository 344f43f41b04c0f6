use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use twenty48_core::{BoardSize, GameState};
use twenty48_term::args::Args;
use twenty48_term::input::TerminalInput;
use twenty48_term::prompt::{self, SizePrompt};
use twenty48_term::render::TerminalRenderer;
use twenty48_term::session;
use twenty48_term::terminal::RawMode;

const POLL_INTERVAL: Duration = Duration::from_millis(10);

fn main() -> Result<()> {
    let args = Args::parse();
    twenty48_term::logging::init(&args.log, args.log_file.as_deref())?;

    let size = match args.size {
        Some(n) => BoardSize::new(usize::from(n))?,
        None => {
            let mut stdout = io::stdout();
            prompt::print_instructions(&mut stdout)?;
            match prompt::read_board_size(io::stdin().lock(), &mut stdout)? {
                SizePrompt::Size(size) => size,
                SizePrompt::Aborted => return Ok(()),
            }
        }
    };

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut game = GameState::new(size, rng)?;
    info!("starting {size}x{size} game (seed {:?})", args.seed);

    let outcome = {
        let _raw = RawMode::enable().context("failed to switch the terminal to raw mode")?;
        let mut input = TerminalInput::new(POLL_INTERVAL);
        let mut screen = TerminalRenderer::new(io::stdout());
        session::run(
            &mut game,
            &mut input,
            &mut screen,
            Duration::from_millis(args.delay_ms),
        )
    }?;

    println!("{}", outcome.message());
    Ok(())
}
