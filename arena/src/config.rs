//! Configuration for the arena binary
//!
//! Configuration is loaded from config.toml with environment variable overrides.
//! CLI arguments take highest priority, followed by env vars, then config.toml.

use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};
use engine_config::{load_config, CentralConfig};
use mcts::MctsConfig;
use once_cell::sync::Lazy;
use tracing::level_filters::LevelFilter;

// Load central config once at startup
static CENTRAL_CONFIG: Lazy<CentralConfig> = Lazy::new(load_config);

/// Who the MCTS bot plays against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Opponent {
    /// Uniformly random legal moves
    Random,
    /// A second MCTS bot with the same settings
    Mcts,
}

// Default value functions that read from central config
fn default_games() -> u32 {
    CENTRAL_CONFIG.arena.games
}

fn default_seed() -> u64 {
    CENTRAL_CONFIG.arena.seed
}

fn default_opponent() -> Opponent {
    Opponent::from_str(&CENTRAL_CONFIG.arena.opponent, true).unwrap_or(Opponent::Random)
}

fn default_iterations() -> u32 {
    CENTRAL_CONFIG.search.iterations
}

fn default_exploration() -> f64 {
    CENTRAL_CONFIG.search.exploration
}

fn default_log_level() -> String {
    CENTRAL_CONFIG.common.log_level.clone()
}

#[derive(Parser, Debug, Clone)]
#[command(name = "mcts-arena")]
#[command(about = "Pit the vanilla MCTS bot against an opponent on tic-tac-toe")]
#[command(
    long_about = "Plays a series of tic-tac-toe games between the MCTS bot and an opponent,
alternating who moves first, and reports wins, draws and losses.

Configuration is loaded from config.toml with environment variable overrides.
CLI arguments take highest priority."
)]
pub struct Config {
    /// Number of games to play
    #[arg(long, default_value_t = default_games())]
    pub games: u32,

    /// Playouts per move for the MCTS bot
    #[arg(long, default_value_t = default_iterations())]
    pub iterations: u32,

    /// UCB exploration constant
    #[arg(long, default_value_t = default_exploration())]
    pub exploration: f64,

    /// Seed for every random choice in the run
    #[arg(long, default_value_t = default_seed())]
    pub seed: u64,

    /// Opponent of the MCTS bot
    #[arg(long, value_enum, default_value_t = default_opponent())]
    pub opponent: Opponent,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value_t = default_log_level())]
    pub log_level: String,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.games == 0 {
            return Err(anyhow!("games must be greater than 0"));
        }

        if self.iterations == 0 {
            return Err(anyhow!("iterations must be greater than 0"));
        }

        if !self.exploration.is_finite() || self.exploration < 0.0 {
            return Err(anyhow!(
                "exploration must be a finite non-negative number, got {}",
                self.exploration
            ));
        }

        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(anyhow!(
                "invalid log level '{}', expected one of trace, debug, info, warn, error",
                self.log_level
            ));
        }

        Ok(())
    }

    /// Search settings for the MCTS bot.
    pub fn mcts_config(&self) -> MctsConfig {
        MctsConfig::default()
            .with_iterations(self.iterations)
            .with_exploration(self.exploration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            games: 4,
            iterations: 100,
            exploration: 2.0,
            seed: 42,
            opponent: Opponent::Random,
            log_level: "info".into(),
        }
    }

    #[test]
    fn validate_accepts_valid_configuration() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_games() {
        let mut cfg = base_config();
        cfg.games = 0;
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("games"));
    }

    #[test]
    fn validate_rejects_zero_iterations() {
        let mut cfg = base_config();
        cfg.iterations = 0;
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("iterations"));
    }

    #[test]
    fn validate_rejects_bad_exploration() {
        let mut cfg = base_config();
        cfg.exploration = -1.0;
        assert!(cfg.validate().is_err());

        cfg.exploration = f64::NAN;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_invalid_log_level() {
        let mut cfg = base_config();
        cfg.log_level = "nope".into();
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("invalid log level"));
    }

    #[test]
    fn mcts_config_carries_search_settings() {
        let mut cfg = base_config();
        cfg.iterations = 250;
        cfg.exploration = 1.4;

        let mcts = cfg.mcts_config();
        assert_eq!(mcts.iterations, 250);
        assert!((mcts.exploration - 1.4).abs() < 1e-9);
    }

    #[test]
    fn parses_cli_arguments() {
        let cfg = Config::try_parse_from([
            "mcts-arena",
            "--games",
            "3",
            "--iterations",
            "40",
            "--opponent",
            "mcts",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(cfg.games, 3);
        assert_eq!(cfg.iterations, 40);
        assert_eq!(cfg.opponent, Opponent::Mcts);
        assert_eq!(cfg.log_level, "debug");
    }
}
