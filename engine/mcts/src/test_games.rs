//! Small games used by the unit tests.

use engine_core::{points_for_winner, GameRules, Player, Points};

/// One move by player 1, then the game is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Pending,
    BotWon,
    BotLost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Lose,
    Win,
}

/// Single-ply game: the losing move is listed first.
#[derive(Debug)]
pub struct OnePly;

impl GameRules for OnePly {
    type State = Outcome;
    type Action = Move;

    fn current_player(&self, state: &Outcome) -> Player {
        match state {
            Outcome::Pending => Player::One,
            _ => Player::Two,
        }
    }

    fn legal_actions(&self, state: &Outcome) -> Vec<Move> {
        match state {
            Outcome::Pending => vec![Move::Lose, Move::Win],
            _ => Vec::new(),
        }
    }

    fn next_state(&self, _state: &Outcome, action: &Move) -> Outcome {
        match action {
            Move::Win => Outcome::BotWon,
            Move::Lose => Outcome::BotLost,
        }
    }

    fn is_ended(&self, state: &Outcome) -> bool {
        *state != Outcome::Pending
    }

    fn points_values(&self, state: &Outcome) -> Option<Points> {
        match state {
            Outcome::Pending => None,
            Outcome::BotWon => Some(points_for_winner(Some(Player::One))),
            Outcome::BotLost => Some(points_for_winner(Some(Player::Two))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pile {
    pub stones: u8,
    pub to_move: Player,
}

/// Take one or two stones; whoever takes the last stone wins.
#[derive(Debug)]
pub struct Nim {
    stones: u8,
}

impl Nim {
    pub fn new(stones: u8) -> Self {
        Self { stones }
    }

    pub fn start(&self) -> Pile {
        Pile {
            stones: self.stones,
            to_move: Player::One,
        }
    }
}

impl GameRules for Nim {
    type State = Pile;
    type Action = u8;

    fn current_player(&self, state: &Pile) -> Player {
        state.to_move
    }

    fn legal_actions(&self, state: &Pile) -> Vec<u8> {
        (1..=2).filter(|&n| n <= state.stones).collect()
    }

    fn next_state(&self, state: &Pile, action: &u8) -> Pile {
        Pile {
            stones: state.stones - action,
            to_move: state.to_move.opponent(),
        }
    }

    fn is_ended(&self, state: &Pile) -> bool {
        state.stones == 0
    }

    fn points_values(&self, state: &Pile) -> Option<Points> {
        if !self.is_ended(state) {
            return None;
        }
        Some(points_for_winner(Some(state.to_move.opponent())))
    }
}

/// Rules that never end yet offer no moves.
#[derive(Debug)]
pub struct Stuck;

impl GameRules for Stuck {
    type State = ();
    type Action = u8;

    fn current_player(&self, _state: &()) -> Player {
        Player::One
    }

    fn legal_actions(&self, _state: &()) -> Vec<u8> {
        Vec::new()
    }

    fn next_state(&self, _state: &(), _action: &u8) {}

    fn is_ended(&self, _state: &()) -> bool {
        false
    }

    fn points_values(&self, _state: &()) -> Option<Points> {
        None
    }
}
