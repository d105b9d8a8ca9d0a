//! Default configuration values loaded from config.defaults.toml.
//!
//! The defaults file is embedded at compile time so a binary runs with sane
//! settings even when no config.toml is deployed next to it.

use once_cell::sync::Lazy;
use serde::Deserialize;

/// The embedded defaults TOML file (loaded at compile time)
const DEFAULTS_TOML: &str = include_str!("../../../config.defaults.toml");

/// Parsed defaults structure (parsed once at first use)
static DEFAULTS: Lazy<DefaultsConfig> = Lazy::new(|| {
    toml::from_str(DEFAULTS_TOML).expect("config.defaults.toml should be valid TOML")
});

// ============================================================================
// Internal structs for parsing config.defaults.toml
// ============================================================================

#[derive(Debug, Deserialize)]
struct DefaultsConfig {
    common: CommonDefaults,
    search: SearchDefaults,
    arena: ArenaDefaults,
}

#[derive(Debug, Deserialize)]
struct CommonDefaults {
    log_level: String,
}

#[derive(Debug, Deserialize)]
struct SearchDefaults {
    iterations: u32,
    exploration: f64,
}

#[derive(Debug, Deserialize)]
struct ArenaDefaults {
    games: u32,
    seed: u64,
    opponent: String,
}

// ============================================================================
// Public accessors
// ============================================================================

pub fn log_level() -> &'static str {
    &DEFAULTS.common.log_level
}

pub fn iterations() -> u32 {
    DEFAULTS.search.iterations
}
pub fn exploration() -> f64 {
    DEFAULTS.search.exploration
}

pub fn games() -> u32 {
    DEFAULTS.arena.games
}
pub fn seed() -> u64 {
    DEFAULTS.arena.seed
}
pub fn opponent() -> &'static str {
    &DEFAULTS.arena.opponent
}
