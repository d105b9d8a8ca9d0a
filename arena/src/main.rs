//! Arena - plays the vanilla MCTS bot against an opponent
//!
//! A short-lived process that:
//! 1. Loads settings from config.toml, environment and CLI flags
//! 2. Plays a series of tic-tac-toe games, alternating seats
//! 3. Logs each result and a final win/draw/loss summary

use anyhow::Result;
use clap::Parser;
use tracing::info;

mod arena;
mod config;

use crate::arena::Arena;
use crate::config::Config;

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;

    init_tracing(&config.log_level)?;
    info!(
        games = config.games,
        iterations = config.iterations,
        exploration = config.exploration,
        seed = config.seed,
        opponent = ?config.opponent,
        "Starting arena"
    );

    let mut arena = Arena::new(&config);
    let summary = arena.run(config.games)?;

    info!(
        wins = summary.wins,
        draws = summary.draws,
        losses = summary.losses,
        "Arena finished"
    );

    Ok(())
}
