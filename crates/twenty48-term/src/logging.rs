use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target, WriteStyle};

/// Overrides `--log` when set.
pub const FILTER_ENV: &str = "TWENTY48_LOG";

/// Logger configured from `--log` and `--log-file`. With a file the game
/// screen stays clean while debug output is collected elsewhere.
pub fn builder(filter: &str, file: Option<&Path>) -> Result<Builder> {
    let mut builder = Builder::from_env(Env::new().filter_or(FILTER_ENV, filter));
    if let Some(path) = file {
        let sink = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        builder
            .target(Target::Pipe(Box::new(sink)))
            .write_style(WriteStyle::Never);
    }
    Ok(builder)
}

/// Install the global logger. Call once, from `main`.
pub fn init(filter: &str, file: Option<&Path>) -> Result<()> {
    builder(filter, file)?
        .try_init()
        .context("logger already initialised")
}
