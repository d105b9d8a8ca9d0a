//! Shared utilities for two-player game implementations
//!
//! This module provides common functionality used across game implementations
//! so that every game scores finished positions the same way.

use crate::rules::{Player, Points};

/// Score a finished two-player zero-sum game.
///
/// # Arguments
/// * `winner` - The winning player, or `None` for a draw
///
/// # Returns
/// * `1.0` for the winner and `-1.0` for the loser
/// * `0.0` for both players on a draw
///
/// # Example
/// ```
/// use engine_core::{points_for_winner, Player};
///
/// let points = points_for_winner(Some(Player::One));
/// assert_eq!(points.get(Player::One), 1.0);
/// assert_eq!(points.get(Player::Two), -1.0);
///
/// // Draw
/// let draw = points_for_winner(None);
/// assert_eq!(draw.get(Player::One), 0.0);
/// ```
#[inline]
pub fn points_for_winner(winner: Option<Player>) -> Points {
    match winner {
        Some(Player::One) => Points::new(1.0, -1.0),
        Some(Player::Two) => Points::new(-1.0, 1.0),
        None => Points::new(0.0, 0.0),
    }
}

/// Decode the winner field used by board games.
///
/// `0` = ongoing, `1`/`2` = that player won, `3` = draw. Returns `None` while
/// the game is still running and `Some(outcome)` once it has finished.
#[inline]
pub fn decode_winner(code: u8) -> Option<Option<Player>> {
    match code {
        1 | 2 => Player::try_from(code).ok().map(Some),
        3 => Some(None),
        _ => None,
    }
}
