//! Typed game-rules trait consumed by the search
//!
//! The search never looks inside a game state. It only hands states back to
//! the rules object, which owns board representation, move generation and
//! terminal scoring.

use std::fmt;

/// Error raised when converting a raw player id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayerError {
    #[error("Invalid player id: {0} (expected 1 or 2)")]
    InvalidId(u8),
}

/// One of the two seats of a two-player game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Numeric id of this player (1 or 2).
    #[inline]
    pub fn id(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// The other seat.
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    #[inline]
    fn index(self) -> usize {
        self.id() as usize - 1
    }
}

impl TryFrom<u8> for Player {
    type Error = PlayerError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            1 => Ok(Player::One),
            2 => Ok(Player::Two),
            other => Err(PlayerError::InvalidId(other)),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.id())
    }
}

/// Outcome scores of a finished game, one per player.
///
/// By convention 1.0 is a win, 0.0 a draw and -1.0 a loss, but games are free
/// to use other encodings. The search only treats a score of exactly 1 as a
/// win.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Points {
    values: [f32; 2],
}

impl Points {
    /// Build an outcome from the scores of player 1 and player 2.
    pub fn new(player_one: f32, player_two: f32) -> Self {
        Self {
            values: [player_one, player_two],
        }
    }

    /// Score of the given player.
    #[inline]
    pub fn get(&self, player: Player) -> f32 {
        self.values[player.index()]
    }

    /// Whether the given player won (score of exactly 1).
    #[inline]
    pub fn is_win(&self, player: Player) -> bool {
        self.get(player) == 1.0
    }
}

/// Rules of a two-player, perfect-information, zero-sum game.
///
/// Implementations must be pure: `next_state` returns a fresh state and leaves
/// its input untouched, and every query is a deterministic function of the
/// state it receives.
///
/// # Example
///
/// ```rust
/// use engine_core::{GameRules, Player, Points};
///
/// /// Players alternately take 1 or 2 stones; whoever takes the last stone wins.
/// #[derive(Debug)]
/// struct Nim;
///
/// #[derive(Debug, Clone, Copy)]
/// struct Pile { stones: u8, to_move: Player }
///
/// impl GameRules for Nim {
///     type State = Pile;
///     type Action = u8;
///
///     fn current_player(&self, state: &Pile) -> Player { state.to_move }
///
///     fn legal_actions(&self, state: &Pile) -> Vec<u8> {
///         (1..=2).filter(|&n| n <= state.stones).collect()
///     }
///
///     fn next_state(&self, state: &Pile, action: &u8) -> Pile {
///         Pile { stones: state.stones - action, to_move: state.to_move.opponent() }
///     }
///
///     fn is_ended(&self, state: &Pile) -> bool { state.stones == 0 }
///
///     fn points_values(&self, state: &Pile) -> Option<Points> {
///         if !self.is_ended(state) {
///             return None;
///         }
///         // The player who took the last stone is the one not on move.
///         Some(engine_core::points_for_winner(Some(state.to_move.opponent())))
///     }
/// }
///
/// let pile = Pile { stones: 3, to_move: Player::One };
/// assert_eq!(Nim.legal_actions(&pile), vec![1, 2]);
/// ```
pub trait GameRules {
    /// Game state type. Cloned once per search iteration.
    type State: Clone;

    /// Action type. Stored in tree nodes and compared for child lookup.
    type Action: Clone + PartialEq + fmt::Debug;

    /// Player to move in `state`.
    fn current_player(&self, state: &Self::State) -> Player;

    /// Legal actions in `state`, in a stable order. Empty iff the game is over.
    fn legal_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// State reached by playing `action` in `state`.
    fn next_state(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Whether `state` is terminal.
    fn is_ended(&self, state: &Self::State) -> bool;

    /// Final scores. `None` unless `is_ended(state)` holds.
    fn points_values(&self, state: &Self::State) -> Option<Points>;
}
