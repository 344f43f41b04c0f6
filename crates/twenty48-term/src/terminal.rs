use std::io;

use crossterm::{cursor, execute, terminal};
use log::{debug, warn};

/// Raw input mode for the lifetime of the value. Dropping it restores the
/// terminal on every exit path, unwinding included.
pub struct RawMode {
    _private: (),
}

impl RawMode {
    pub fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        if let Err(err) = execute!(io::stdout(), cursor::Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(err);
        }
        debug!("raw mode on");
        Ok(RawMode { _private: () })
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let restored = execute!(io::stdout(), cursor::Show).and(terminal::disable_raw_mode());
        match restored {
            Ok(()) => debug!("raw mode off"),
            Err(err) => warn!("failed to restore terminal: {err}"),
        }
    }
}
