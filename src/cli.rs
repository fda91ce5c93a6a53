//! Command-line interface for tictactoe_timeline.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with a time-travel move history
#[derive(Parser, Debug)]
#[command(name = "tictactoe_timeline")]
#[command(about = "Play tic-tac-toe and jump back to any earlier move", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print frames as JSON view models instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, one command per line on stdin
    Play,

    /// Apply a sequence of cell clicks and print the final frame
    Replay {
        /// Cells to click in order (0-8, row-major)
        cells: Vec<usize>,

        /// Jump to this move after the clicks
        #[arg(long)]
        jump: Option<usize>,

        /// Show the move list newest first
        #[arg(long)]
        descending: bool,
    },
}
