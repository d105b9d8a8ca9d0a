//! MCTS tree structure with arena allocation.
//!
//! The tree uses arena allocation for efficient node storage and
//! cache-friendly traversal. Nodes are stored in a contiguous Vec
//! and referenced by NodeId indices; each node keeps its parent's index,
//! so walking up the tree never needs a reference cycle.

use crate::node::{MctsNode, NodeId};

/// MCTS tree with arena-based node storage.
#[derive(Debug)]
pub struct MctsTree<A> {
    /// Arena storing all nodes
    nodes: Vec<MctsNode<A>>,

    /// Root node index (always 0 after initialization)
    root: NodeId,
}

impl<A: Clone + PartialEq> MctsTree<A> {
    /// Create a new tree whose root holds the given legal actions as untried.
    pub fn new(root_actions: Vec<A>) -> Self {
        Self {
            nodes: vec![MctsNode::new_root(root_actions)],
            root: NodeId(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a reference to a node by ID.
    #[inline]
    pub fn get(&self, id: NodeId) -> &MctsNode<A> {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable reference to a node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MctsNode<A> {
        &mut self.nodes[id.0 as usize]
    }

    /// Allocate a new node and return its ID.
    pub fn allocate(&mut self, node: MctsNode<A>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Get the total number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty (should never be true after construction).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the arena slice for read access.
    #[inline]
    pub fn arena(&self) -> &[MctsNode<A>] {
        &self.nodes
    }

    /// Find the child reached from `node_id` by `action`.
    pub fn child(&self, node_id: NodeId, action: &A) -> Option<NodeId> {
        self.get(node_id)
            .children
            .iter()
            .find(|(a, _)| a == action)
            .map(|(_, id)| *id)
    }

    /// Select the child of `node_id` with the highest UCB score.
    ///
    /// `is_opponent` tells whether the player to move at `node_id` is the
    /// opponent of the searching player. Ties go to the first child in
    /// expansion order. Returns None if the node has no children.
    pub fn select_child(&self, node_id: NodeId, exploration: f64, is_opponent: bool) -> Option<NodeId> {
        let node = self.get(node_id);
        let parent_visits = node.visits;

        let mut best: Option<(NodeId, f64)> = None;
        for (_, child_id) in &node.children {
            let score = self
                .get(*child_id)
                .ucb_score(parent_visits, exploration, is_opponent);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((*child_id, score)),
            }
        }

        best.map(|(id, _)| id)
    }

    /// Add a child to a parent node.
    /// Returns the new child's NodeId.
    pub fn add_child(&mut self, parent_id: NodeId, action: A, child_actions: Vec<A>) -> NodeId {
        let child = MctsNode::new_child(parent_id, action.clone(), child_actions);
        let child_id = self.allocate(child);

        self.get_mut(parent_id).children.push((action, child_id));

        child_id
    }

    /// Remove and return the next untried action of a node, if any.
    pub fn pop_untried(&mut self, node_id: NodeId) -> Option<A> {
        self.get_mut(node_id).untried_actions.pop_front()
    }

    /// Backpropagate a playout result from a node to the root.
    ///
    /// Every node on the path gains one visit, and one win if the searching
    /// player won. The result is not flipped between plies: all nodes count
    /// wins for the searching player.
    pub fn backpropagate(&mut self, leaf_id: NodeId, won: bool) {
        let mut current_id = leaf_id;

        while current_id.is_some() {
            let node = self.get_mut(current_id);
            node.visits += 1;
            if won {
                node.wins += 1;
            }

            current_id = node.parent;
        }
    }

    /// Get the best action from root by win rate.
    ///
    /// Only visited children are considered; ties go to the first child in
    /// expansion order. Returns (action, win_rate, visits), or None if no
    /// child of the root has been visited.
    pub fn best_action(&self) -> Option<(A, f64, u32)> {
        let root = self.get(self.root);

        let mut best: Option<(&A, f64, u32)> = None;
        for (action, child_id) in &root.children {
            let child = self.get(*child_id);
            if child.visits == 0 {
                continue;
            }
            let rate = child.win_rate();
            match best {
                Some((_, best_rate, _)) if rate <= best_rate => {}
                _ => best = Some((action, rate, child.visits)),
            }
        }

        best.map(|(action, rate, visits)| (action.clone(), rate, visits))
    }

    /// Get statistics about the tree for debugging.
    pub fn stats(&self) -> TreeStats {
        let root = self.get(self.root);
        TreeStats {
            total_nodes: self.nodes.len(),
            root_visits: root.visits,
            root_win_rate: root.win_rate(),
            max_depth: self.max_depth(),
        }
    }

    fn max_depth(&self) -> u32 {
        let mut max_depth = 0;
        let mut stack = vec![(self.root, 0u32)];

        while let Some((node_id, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            for (_, child_id) in &self.get(node_id).children {
                stack.push((*child_id, depth + 1));
            }
        }

        max_depth
    }
}

/// Statistics about an MCTS tree.
#[derive(Debug, Clone)]
pub struct TreeStats {
    pub total_nodes: usize,
    pub root_visits: u32,
    pub root_win_rate: f64,
    pub max_depth: u32,
}
