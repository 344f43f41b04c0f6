//! Keyboard input: crossterm key events decoded into game inputs.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::warn;
use twenty48_core::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Move(Direction),
    Undo,
    Quit,
    /// No key this tick.
    Idle,
}

/// Source of one input event per loop iteration. Must not block for long:
/// `Idle` is the normal answer when nothing was pressed.
pub trait InputSource {
    fn next_event(&mut self) -> InputEvent;
}

/// Map a key press to a game input. Releases, repeats and unknown keys are
/// `Idle`.
pub fn decode_key(key: KeyEvent) -> InputEvent {
    if key.kind != KeyEventKind::Press {
        return InputEvent::Idle;
    }
    match key.code {
        KeyCode::Left => InputEvent::Move(Direction::Left),
        KeyCode::Right => InputEvent::Move(Direction::Right),
        KeyCode::Up => InputEvent::Move(Direction::Up),
        KeyCode::Down => InputEvent::Move(Direction::Down),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputEvent::Quit,
        KeyCode::Char('r' | 'R') => InputEvent::Undo,
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => InputEvent::Quit,
        _ => InputEvent::Idle,
    }
}

/// Reads keys from the real terminal. Expects raw mode to be active.
pub struct TerminalInput {
    poll: Duration,
}

impl TerminalInput {
    /// `poll` bounds how long one call waits for a key.
    pub fn new(poll: Duration) -> Self {
        Self { poll }
    }
}

impl InputSource for TerminalInput {
    fn next_event(&mut self) -> InputEvent {
        // Read failures count as "no key" and are never fatal.
        match event::poll(self.poll) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) => decode_key(key),
                Ok(_) => InputEvent::Idle,
                Err(err) => {
                    warn!("failed to read key: {err}");
                    InputEvent::Idle
                }
            },
            Ok(false) => InputEvent::Idle,
            Err(err) => {
                warn!("failed to poll input: {err}");
                InputEvent::Idle
            }
        }
    }
}
