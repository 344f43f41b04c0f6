//! Startup prompt for the board size.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use log::{debug, warn};
use twenty48_core::BoardSize;
use twenty48_core::engine::{MAX_SIZE, MIN_SIZE};

/// Rejected entries tolerated before the prompt gives up.
pub const MAX_ATTEMPTS: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizePrompt {
    Size(BoardSize),
    /// The player ran out of attempts or closed the input.
    Aborted,
}

#[derive(Debug, PartialEq, Eq)]
enum Entry {
    Valid(BoardSize),
    NotANumber,
    OutOfRange,
}

pub fn print_instructions<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "How big do you want your board to be?")?;
    writeln!(
        out,
        "Use the arrow keys to slide the tiles, press r to take back one move and q to quit."
    )?;
    writeln!(out, "Press enter to confirm.")?;
    writeln!(out, "Enter a number between {MIN_SIZE} and {MAX_SIZE}:")?;
    out.flush()?;
    Ok(())
}

/// Read whitespace-separated entries until one is a valid size.
///
/// Warnings escalate as rejections pile up; after `MAX_ATTEMPTS` the prompt
/// aborts. An all-digit entry that still fails to parse is returned as an
/// error.
pub fn read_board_size<R: BufRead, W: Write>(input: R, out: &mut W) -> Result<SizePrompt> {
    let mut rejected = 0u32;
    for line in input.lines() {
        let line = line.context("failed to read board size")?;
        for token in line.split_whitespace() {
            let entry = classify(token)?;
            debug!("size entry {token:?} -> {entry:?}");
            match entry {
                Entry::Valid(size) => return Ok(SizePrompt::Size(size)),
                Entry::NotANumber => writeln!(out, "Please enter a number!")?,
                Entry::OutOfRange => writeln!(
                    out,
                    "Please enter a number between {MIN_SIZE} and {MAX_SIZE}!"
                )?,
            }

            rejected += 1;
            match rejected {
                4 => writeln!(
                    out,
                    "JUST ENTER A NUMBER BETWEEN {MIN_SIZE} AND {MAX_SIZE}!"
                )?,
                6 => writeln!(
                    out,
                    "Okay... Please... Enter a number between {MIN_SIZE} and {MAX_SIZE}..."
                )?,
                n if n >= MAX_ATTEMPTS => {
                    writeln!(out, "Enough!")?;
                    warn!("board size prompt aborted after {n} attempts");
                    return Ok(SizePrompt::Aborted);
                }
                _ => {}
            }
            out.flush()?;
        }
    }
    Ok(SizePrompt::Aborted)
}

fn classify(token: &str) -> Result<Entry> {
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(Entry::NotANumber);
    }
    let Ok(value) = token.parse::<usize>() else {
        bail!("failed to parse board size {token:?}");
    };
    Ok(match BoardSize::new(value) {
        Ok(size) => Entry::Valid(size),
        Err(_) => Entry::OutOfRange,
    })
}
