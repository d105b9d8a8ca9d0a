//! Core traits and types for the MCTS game engine
//!
//! This crate provides the game-rules abstraction the search consumes:
//! - `GameRules`: Typed trait exposing turn order, legal moves, transitions and scoring
//! - `Player`: Identifier of one of the two seats (1 or 2)
//! - `Points`: Per-player outcome of a finished game
//! - `game_utils`: Helpers shared by two-player game implementations

pub mod game_utils;
pub mod rules;

// Re-export main types for convenience
pub use game_utils::points_for_winner;
pub use rules::{GameRules, Player, PlayerError, Points};
