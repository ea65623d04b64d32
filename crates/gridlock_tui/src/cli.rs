//! Command-line interface for the gridlock TUI.

use clap::{Parser, ValueEnum};
use gridlock_core::Mode;

/// Gridlock - terminal tic-tac-toe with score tracking and a CPU opponent
#[derive(Parser, Debug)]
#[command(name = "gridlock")]
#[command(about = "Terminal tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Starting game mode
    #[arg(long, value_enum, default_value_t = ModeArg::Pvp)]
    pub mode: ModeArg,

    /// CPU thinking delay in milliseconds
    #[arg(long, default_value_t = 600)]
    pub delay_ms: u64,

    /// Start with sound cues muted
    #[arg(long)]
    pub muted: bool,

    /// Log file path (logs go to a file so they don't corrupt the TUI)
    #[arg(long, default_value = "gridlock.log")]
    pub log_file: std::path::PathBuf,
}

/// Game mode selection on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Two humans sharing the keyboard
    Pvp,
    /// Human as X against the CPU as O
    Ai,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Pvp => Mode::PlayerVsPlayer,
            ModeArg::Ai => Mode::PlayerVsAi,
        }
    }
}
