//! MCTS tree node representation.
//!
//! Each node represents a game state reached by taking an action from the parent.
//! Nodes store playout statistics used for UCB selection and the final decision,
//! plus the actions that have not been expanded into children yet.

use std::collections::VecDeque;

/// Index into the node arena. Using a newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const NONE: NodeId = NodeId(u32::MAX);

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    pub fn is_some(self) -> bool {
        !self.is_none()
    }
}

/// A node in the MCTS tree.
///
/// Invariant: the actions in `children` and in `untried_actions` are disjoint,
/// and together they are exactly the legal actions of the node's state.
#[derive(Debug, Clone)]
pub struct MctsNode<A> {
    /// Parent node index (NONE for root)
    pub parent: NodeId,

    /// Action that led to this node from parent (None for root)
    pub parent_action: Option<A>,

    /// Number of playouts that passed through this node
    pub visits: u32,

    /// Number of those playouts won by the searching player
    pub wins: u32,

    /// Legal actions not yet expanded, in the order the rules listed them
    pub untried_actions: VecDeque<A>,

    /// Children: Vec of (action, NodeId) pairs in expansion order.
    pub children: Vec<(A, NodeId)>,
}

impl<A> MctsNode<A> {
    /// Create a new root node.
    pub fn new_root(actions: Vec<A>) -> Self {
        Self {
            parent: NodeId::NONE,
            parent_action: None,
            visits: 0,
            wins: 0,
            untried_actions: actions.into(),
            children: Vec::new(),
        }
    }

    /// Create a new child node.
    pub fn new_child(parent: NodeId, action: A, actions: Vec<A>) -> Self {
        Self {
            parent,
            parent_action: Some(action),
            visits: 0,
            wins: 0,
            untried_actions: actions.into(),
            children: Vec::new(),
        }
    }

    /// Fraction of playouts through this node won by the searching player.
    /// Returns 0.0 if never visited.
    #[inline]
    pub fn win_rate(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.wins as f64 / self.visits as f64
        }
    }

    /// Calculate the UCB score of this node as seen from its parent.
    ///
    /// UCB = W/N + C * sqrt(ln(N_parent) / N) when the searching player made
    /// the move into this node, and W/N - C * sqrt(ln(N_parent) / N) when the
    /// opponent did. Wins are always counted for the searching player, so the
    /// sign of the exploration term is what encodes whose move it was.
    ///
    /// Unvisited nodes score +inf so every child is tried once before any
    /// exploitation comparison. `parent_visits` must be at least 1 otherwise.
    #[inline]
    pub fn ucb_score(&self, parent_visits: u32, exploration: f64, is_opponent: bool) -> f64 {
        if self.visits == 0 {
            return f64::INFINITY;
        }

        let exploitation = self.win_rate();
        let bonus = exploration * ((parent_visits as f64).ln() / self.visits as f64).sqrt();

        if is_opponent {
            exploitation - bonus
        } else {
            exploitation + bonus
        }
    }

    /// Check if this node has been expanded (has children).
    #[inline]
    pub fn is_expanded(&self) -> bool {
        !self.children.is_empty()
    }

    /// Check if every legal action has a child.
    #[inline]
    pub fn is_fully_expanded(&self) -> bool {
        self.untried_actions.is_empty()
    }

    /// Check if this is a leaf node (no children yet).
    #[inline]
    pub fn is_leaf(&self) -> bool {
        !self.is_expanded()
    }
}
