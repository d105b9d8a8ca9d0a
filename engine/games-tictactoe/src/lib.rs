//! TicTacToe rules for the MCTS engine
//!
//! This crate provides a complete reference implementation of TicTacToe
//! demonstrating how to implement the `GameRules` trait the search consumes.
//!
//! # Usage
//!
//! ```rust
//! use engine_core::GameRules;
//! use games_tictactoe::{Action, TicTacToe, State};
//!
//! let game = TicTacToe::new();
//! let state = State::new();
//! let next = game.next_state(&state, &Action::Place(4));
//! assert_eq!(game.legal_actions(&next).len(), 8);
//! ```

use engine_core::game_utils::decode_winner;
use engine_core::{points_for_winner, GameRules, Player, Points};

/// Winning lines (rows, columns, diagonals)
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// TicTacToe game state
///
/// Represents the complete state of a TicTacToe game including the board,
/// current player, and winner information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct State {
    /// Board representation: 0=empty, 1=X, 2=O
    board: [u8; 9],
    /// Current player: 1=X, 2=O
    current_player: u8,
    /// Winner: 0=none/ongoing, 1=X, 2=O, 3=draw
    winner: u8,
}

impl State {
    /// Create a new initial game state
    pub fn new() -> Self {
        Self {
            board: [0; 9],
            current_player: 1, // X goes first
            winner: 0,
        }
    }

    /// Replay a sequence of positions from the initial state.
    ///
    /// Illegal positions are ignored, matching [`State::make_move`].
    pub fn from_moves(moves: &[u8]) -> Self {
        moves
            .iter()
            .fold(Self::new(), |state, &pos| state.make_move(pos))
    }

    /// Check if the game is over
    pub fn is_done(&self) -> bool {
        self.winner != 0
    }

    /// Board cells: 0=empty, 1=X, 2=O
    pub fn board(&self) -> &[u8; 9] {
        &self.board
    }

    /// Player to move (1=X, 2=O)
    pub fn current_player(&self) -> u8 {
        self.current_player
    }

    /// Winner code: 0=ongoing, 1=X, 2=O, 3=draw
    pub fn winner(&self) -> u8 {
        self.winner
    }

    /// Get legal moves (empty positions)
    pub fn legal_moves(&self) -> Vec<u8> {
        if self.is_done() {
            return Vec::new();
        }

        (0..9u8)
            .filter(|&pos| self.board[pos as usize] == 0)
            .collect()
    }

    /// Make a move and return the new state
    pub fn make_move(&self, position: u8) -> State {
        if self.is_done() || position >= 9 || self.board[position as usize] != 0 {
            return *self; // Invalid move, return unchanged state
        }

        let mut new_state = *self;
        new_state.board[position as usize] = self.current_player;

        new_state.winner = Self::check_winner(&new_state.board);

        // Switch player if game not over
        if new_state.winner == 0 {
            new_state.current_player = if self.current_player == 1 { 2 } else { 1 };
        }

        new_state
    }

    /// Check for winner on the board
    fn check_winner(board: &[u8; 9]) -> u8 {
        for line in &LINES {
            let [a, b, c] = *line;
            if board[a] != 0 && board[a] == board[b] && board[b] == board[c] {
                return board[a];
            }
        }

        // Board full but no winner
        if board.iter().all(|&cell| cell != 0) {
            return 3;
        }

        0
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

/// TicTacToe action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Place a piece at the given position (0-8)
    Place(u8),
}

impl Action {
    /// Get the position for this action
    pub fn position(&self) -> u8 {
        match self {
            Action::Place(pos) => *pos,
        }
    }
}

/// TicTacToe rules
#[derive(Debug, Clone, Copy, Default)]
pub struct TicTacToe;

impl TicTacToe {
    /// Create a new TicTacToe game
    pub fn new() -> Self {
        Self
    }

    /// The position a new game starts from
    pub fn initial_state(&self) -> State {
        State::new()
    }
}

impl GameRules for TicTacToe {
    type State = State;
    type Action = Action;

    fn current_player(&self, state: &State) -> Player {
        // State only ever stores 1 or 2
        Player::try_from(state.current_player).unwrap_or(Player::One)
    }

    fn legal_actions(&self, state: &State) -> Vec<Action> {
        state.legal_moves().into_iter().map(Action::Place).collect()
    }

    fn next_state(&self, state: &State, action: &Action) -> State {
        state.make_move(action.position())
    }

    fn is_ended(&self, state: &State) -> bool {
        state.is_done()
    }

    fn points_values(&self, state: &State) -> Option<Points> {
        decode_winner(state.winner).map(points_for_winner)
    }
}
