use connect_core::{Column, GameState};
use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::Agent;

/// Baseline agent that plays a uniformly random legal move.
pub struct RandomAgent {
    name: String,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            name: "Random".to_string(),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn best_move(&mut self, state: &GameState) -> Option<Column> {
        let moves = state.legal_moves();
        let mut rng = thread_rng();
        moves.choose(&mut rng).copied()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
