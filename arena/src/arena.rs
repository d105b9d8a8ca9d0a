//! Match runner: plays tic-tac-toe games between the MCTS bot and an opponent.

use anyhow::{anyhow, Context, Result};
use engine_core::{GameRules, Player};
use games_tictactoe::{Action, State, TicTacToe};
use mcts::{think, MctsConfig};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info};

use crate::config::{Config, Opponent};

/// Wins, draws and losses from the MCTS bot's point of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
}

impl Summary {
    pub fn games(&self) -> u32 {
        self.wins + self.draws + self.losses
    }

    fn record(&mut self, winner: Option<Player>, bot: Player) {
        match winner {
            Some(p) if p == bot => self.wins += 1,
            Some(_) => self.losses += 1,
            None => self.draws += 1,
        }
    }
}

/// Plays games between the MCTS bot and the configured opponent.
pub struct Arena {
    game: TicTacToe,
    search: MctsConfig,
    opponent: Opponent,
    rng: ChaCha20Rng,
}

impl Arena {
    pub fn new(config: &Config) -> Self {
        Self {
            game: TicTacToe::new(),
            search: config.mcts_config(),
            opponent: config.opponent,
            rng: ChaCha20Rng::seed_from_u64(config.seed),
        }
    }

    /// Play `games` games, alternating which seat the bot takes.
    pub fn run(&mut self, games: u32) -> Result<Summary> {
        let mut summary = Summary::default();

        for game_idx in 0..games {
            let bot = if game_idx % 2 == 0 {
                Player::One
            } else {
                Player::Two
            };
            let winner = self
                .play_game(bot)
                .with_context(|| format!("game {} failed", game_idx + 1))?;
            summary.record(winner, bot);

            info!(
                game = game_idx + 1,
                bot = %bot,
                winner = ?winner.map(Player::id),
                "Game finished"
            );
        }

        Ok(summary)
    }

    /// Play one game with the bot in seat `bot`. Returns the winner, if any.
    pub fn play_game(&mut self, bot: Player) -> Result<Option<Player>> {
        let mut state = self.game.initial_state();

        while !self.game.is_ended(&state) {
            let to_move = self.game.current_player(&state);
            let action = if to_move == bot {
                self.mcts_move(&state)?
            } else {
                match self.opponent {
                    Opponent::Mcts => self.mcts_move(&state)?,
                    Opponent::Random => self.random_move(&state)?,
                }
            };

            debug!(player = %to_move, position = action.position(), "Move played");
            state = self.game.next_state(&state, &action);
        }

        let points = self
            .game
            .points_values(&state)
            .ok_or_else(|| anyhow!("finished game has no score"))?;

        Ok([Player::One, Player::Two]
            .into_iter()
            .find(|&p| points.is_win(p)))
    }

    fn mcts_move(&mut self, state: &State) -> Result<Action> {
        think(&self.game, state, self.search.clone(), &mut self.rng)
            .context("MCTS bot could not choose a move")
    }

    fn random_move(&mut self, state: &State) -> Result<Action> {
        self.game
            .legal_actions(state)
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| anyhow!("no legal moves for the random player"))
    }
}
