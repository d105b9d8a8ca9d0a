//! Random playouts.
//!
//! A rollout plays uniformly random legal moves from a state until the game
//! ends. It never consults the tree.

use engine_core::GameRules;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;

/// Play random moves from `state` to the end of the game and return the
/// terminal state. An already-terminal state is returned unchanged.
///
/// Stops early if the rules report no legal actions for a state they do not
/// consider ended; the caller's terminal check reports that case.
pub fn rollout<G: GameRules>(rules: &G, mut state: G::State, rng: &mut ChaCha20Rng) -> G::State {
    while !rules.is_ended(&state) {
        let actions = rules.legal_actions(&state);
        match actions.choose(rng) {
            Some(action) => state = rules.next_state(&state, action),
            None => break,
        }
    }

    state
}
