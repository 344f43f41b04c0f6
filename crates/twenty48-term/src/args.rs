use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play 2048 on a 4x4 to 8x8 board in the terminal")]
pub struct Args {
    /// Board size (4..=8). Prompts for it when omitted.
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(4..=8))]
    pub size: Option<u8>,
    /// Seed for tile placement; random when omitted.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
    /// Pause after each redraw, in milliseconds.
    #[arg(long, value_name = "MS", default_value_t = 150)]
    pub delay_ms: u64,
    /// Log filter, e.g. "warn", "debug".
    #[arg(long, default_value = "warn")]
    pub log: String,
    /// Write logs to this file instead of stderr.
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}
