//! Tic-tac-toe timeline - terminal frontend.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io;
use tictactoe_timeline::{write_frame, AppConfig, Game, OutputFormat, Shell};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so frames on stdout stay parseable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    if cli.json {
        config = config.with_output(OutputFormat::Json);
    }

    match cli.command {
        Command::Play => run_play(&config),
        Command::Replay {
            cells,
            jump,
            descending,
        } => {
            if descending {
                config = config.with_ascending(false);
            }
            run_replay(&config, &cells, jump)
        }
    }
}

/// Run the interactive shell on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: &AppConfig) -> Result<()> {
    info!("Starting interactive game");
    let mut game = Game::with_sort_direction(*config.ascending());
    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout().lock(), *config.output());
    shell.run(&mut game)
}

/// Apply scripted clicks, then print one frame
#[instrument(skip(config))]
fn run_replay(config: &AppConfig, cells: &[usize], jump: Option<usize>) -> Result<()> {
    let mut game = Game::with_sort_direction(*config.ascending());

    for cell in cells {
        if let Err(e) = game.handle_cell_click(*cell) {
            warn!(cell, error = %e, "Skipping refused click");
        }
    }
    if let Some(index) = jump {
        game.jump_to(index)
            .with_context(|| format!("Cannot jump to move #{index}"))?;
    }

    info!(moves = game.history().len() - 1, "Replay finished");
    write_frame(&mut io::stdout().lock(), &game, *config.output())
}
