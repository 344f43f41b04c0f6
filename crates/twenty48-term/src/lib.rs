//! Terminal front end: startup prompt, raw-mode key input, grid rendering
//! and the turn-based loop that drives a `twenty48_core::GameState`.

pub mod args;
pub mod input;
pub mod logging;
pub mod prompt;
pub mod render;
pub mod session;
pub mod terminal;
