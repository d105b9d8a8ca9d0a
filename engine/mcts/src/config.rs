//! MCTS configuration parameters.

/// Configuration for Monte Carlo Tree Search.
///
/// Passed to each search explicitly, so searches with different settings can
/// run side by side.
#[derive(Debug, Clone, PartialEq)]
pub struct MctsConfig {
    /// Number of playouts (select, expand, rollout, backpropagate) per search.
    pub iterations: u32,

    /// Exploration constant `C` in the UCB formula.
    /// Higher values encourage exploration, lower values favor exploitation.
    pub exploration: f64,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            iterations: 100,
            exploration: 2.0,
        }
    }
}

impl MctsConfig {
    /// Create a fast config for testing.
    pub fn for_testing() -> Self {
        Self {
            iterations: 50,
            ..Self::default()
        }
    }

    /// Builder pattern: set number of iterations.
    pub fn with_iterations(mut self, n: u32) -> Self {
        self.iterations = n;
        self
    }

    /// Builder pattern: set the exploration constant.
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration = c;
        self
    }
}
