//! Vanilla Monte Carlo Tree Search (MCTS) for two-player games.
//!
//! This crate provides a game-agnostic MCTS implementation that works with any
//! game implementing the `engine-core` GameRules trait. There is no policy or
//! value model: positions are judged purely by random playouts.
//!
//! # Overview
//!
//! Each search iteration consists of four phases:
//!
//! 1. **Traversal**: Descend the tree using UCB (Upper Confidence Bound) to
//!    balance exploration and exploitation, until a node with untried actions
//!    or a terminal state is reached
//! 2. **Expansion**: Turn one untried action of that node into a new child
//! 3. **Rollout**: Play uniformly random moves from the child to the end of
//!    the game
//! 4. **Backpropagation**: Add a visit, and a win if the searching player
//!    won, to every node from the child back to the root
//!
//! After the iteration budget is spent, the root child with the best win rate
//! is chosen.
//!
//! # Usage
//!
//! ```rust
//! use mcts::{think, MctsConfig};
//! use games_tictactoe::{State, TicTacToe};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let game = TicTacToe::new();
//! let config = MctsConfig::default().with_iterations(200);
//! let mut rng = ChaCha20Rng::seed_from_u64(42);
//!
//! let action = think(&game, &State::new(), config, &mut rng).unwrap();
//! println!("Best action: {:?}", action);
//! ```
//!
//! # Configuration
//!
//! The [`MctsConfig`] struct controls search behavior:
//!
//! - `iterations`: Number of playouts per search (default: 100)
//! - `exploration`: Exploration constant `C` for UCB (default: 2.0)
//!
//! # Architecture
//!
//! ```text
//! +-------------------------------------------------------------+
//! |                         MctsSearch                          |
//! +-------------------------------------------------------------+
//! |  +-------------+   +-------------+   +-------------------+  |
//! |  |  MctsTree   |   |  GameRules  |   |    ChaCha20Rng    |  |
//! |  |  (arena)    |   | (game sim)  |   |    (rollouts)     |  |
//! |  +------+------+   +------+------+   +---------+---------+  |
//! |         |                 |                    |            |
//! |         v                 v                    v            |
//! |  +-------------------------------------------------------+  |
//! |  |        traverse -> expand -> rollout ->               |  |
//! |  |                  backpropagate                        |  |
//! |  +-------------------------------------------------------+  |
//! +-------------------------------------------------------------+
//! ```

pub mod config;
pub mod node;
pub mod rollout;
pub mod search;
pub mod tree;

#[cfg(test)]
mod test_games;

// Re-export main types
pub use config::MctsConfig;
pub use node::{MctsNode, NodeId};
pub use rollout::rollout;
pub use search::{is_win, think, MctsSearch, SearchError, SearchResult};
pub use tree::{MctsTree, TreeStats};
