//! MCTS search implementation.
//!
//! Implements the vanilla MCTS loop, one playout per iteration:
//! 1. Traversal: Descend the tree by UCB to a node with untried actions or a terminal state
//! 2. Expansion: Turn one untried action into a new child
//! 3. Rollout: Play random moves from the child's state to the end of the game
//! 4. Backpropagation: Record the win or loss on every node back to the root

use engine_core::{GameRules, Player};
use rand_chacha::ChaCha20Rng;
use thiserror::Error;
use tracing::{debug, info, trace};

use crate::config::MctsConfig;
use crate::node::NodeId;
use crate::rollout::rollout;
use crate::tree::MctsTree;

/// Errors that can occur during MCTS search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// No child of the root was visited, so there is nothing to choose from.
    /// Happens with zero iterations or when the root state is already over.
    #[error("No decision available: no child of the root was visited")]
    NoDecision,

    /// The win check ran on a state the rules do not consider finished.
    #[error("Win check called on a non-terminal state")]
    NotTerminal,
}

/// Result of an MCTS search.
#[derive(Debug, Clone)]
pub struct SearchResult<A> {
    /// Best action to take
    pub action: A,

    /// Win rate of the chosen child for the searching player
    pub win_rate: f64,

    /// Playouts that went through the chosen child
    pub visits: u32,

    /// Number of iterations performed
    pub iterations: u32,
}

/// MCTS search state.
pub struct MctsSearch<'a, G: GameRules> {
    tree: MctsTree<G::Action>,
    rules: &'a G,
    config: MctsConfig,
    root_state: G::State,
    bot: Player,
}

impl<'a, G: GameRules> MctsSearch<'a, G> {
    /// Create a new MCTS search from the given game state.
    ///
    /// The searching player is whoever is to move in `state`.
    pub fn new(rules: &'a G, config: MctsConfig, state: G::State) -> Self {
        let bot = rules.current_player(&state);
        let tree = MctsTree::new(rules.legal_actions(&state));

        Self {
            tree,
            rules,
            config,
            root_state: state,
            bot,
        }
    }

    /// Run the configured number of iterations and pick the best action.
    pub fn run(&mut self, rng: &mut ChaCha20Rng) -> Result<SearchResult<G::Action>, SearchError> {
        for _ in 0..self.config.iterations {
            self.iterate(rng)?;
        }

        let stats = self.tree.stats();
        debug!(
            nodes = stats.total_nodes,
            root_visits = stats.root_visits,
            root_win_rate = stats.root_win_rate,
            max_depth = stats.max_depth,
            "MCTS tree stats"
        );

        let (action, win_rate, visits) =
            self.tree.best_action().ok_or(SearchError::NoDecision)?;

        info!(action = ?action, win_rate, visits, bot = %self.bot, "Action chosen");

        Ok(SearchResult {
            action,
            win_rate,
            visits,
            iterations: self.config.iterations,
        })
    }

    /// Run a single playout (traverse -> expand -> rollout -> backpropagate).
    pub fn iterate(&mut self, rng: &mut ChaCha20Rng) -> Result<(), SearchError> {
        let state = self.root_state.clone();

        let (leaf_id, state) = self.traverse(self.tree.root(), state);
        let (node_id, state) = self.expand(leaf_id, state);
        let state = rollout(self.rules, state, rng);

        let won = is_win(self.rules, &state, self.bot)?;
        self.tree.backpropagate(node_id, won);

        trace!(
            leaf = leaf_id.0,
            expanded = node_id.0,
            won,
            "MCTS iteration complete"
        );

        Ok(())
    }

    /// Descend from `node_id` to a node that still has untried actions, has
    /// no children, or holds a terminal state. Returns that node and its state.
    pub fn traverse(&self, mut node_id: NodeId, mut state: G::State) -> (NodeId, G::State) {
        loop {
            let node = self.tree.get(node_id);
            if !node.is_expanded() || !node.is_fully_expanded() || self.rules.is_ended(&state) {
                break;
            }

            let is_opponent = self.rules.current_player(&state) != self.bot;
            let Some(child_id) = self
                .tree
                .select_child(node_id, self.config.exploration, is_opponent)
            else {
                break;
            };

            if let Some(action) = &self.tree.get(child_id).parent_action {
                state = self.rules.next_state(&state, action);
            }
            node_id = child_id;
        }

        (node_id, state)
    }

    /// Expand the first untried action of `node_id` into a new child.
    ///
    /// Returns the new child and its state, or the inputs unchanged when the
    /// node has nothing left to expand. The playout is then credited to the
    /// new child, so a root child is visited from its first iteration on and
    /// one iteration is already enough to reach a decision.
    pub fn expand(&mut self, node_id: NodeId, state: G::State) -> (NodeId, G::State) {
        let Some(action) = self.tree.pop_untried(node_id) else {
            return (node_id, state);
        };

        let child_state = self.rules.next_state(&state, &action);
        let child_actions = self.rules.legal_actions(&child_state);
        let child_id = self.tree.add_child(node_id, action, child_actions);

        (child_id, child_state)
    }

    /// The player the search is choosing a move for.
    pub fn bot(&self) -> Player {
        self.bot
    }

    /// Get the search tree (for inspection/debugging).
    pub fn tree(&self) -> &MctsTree<G::Action> {
        &self.tree
    }
}

/// Whether `player` won the finished game in `state`.
///
/// Fails with [`SearchError::NotTerminal`] if the game is not over.
pub fn is_win<G: GameRules>(rules: &G, state: &G::State, player: Player) -> Result<bool, SearchError> {
    if !rules.is_ended(state) {
        return Err(SearchError::NotTerminal);
    }
    let points = rules.points_values(state).ok_or(SearchError::NotTerminal)?;
    Ok(points.is_win(player))
}

/// Choose a move for the player to act in `state`.
///
/// Builds a fresh tree, runs `config.iterations` playouts and returns the
/// root action with the best win rate.
pub fn think<G: GameRules>(
    rules: &G,
    state: &G::State,
    config: MctsConfig,
    rng: &mut ChaCha20Rng,
) -> Result<G::Action, SearchError> {
    let mut search = MctsSearch::new(rules, config, state.clone());
    search.run(rng).map(|result| result.action)
}
