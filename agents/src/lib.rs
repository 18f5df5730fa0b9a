pub mod evaluation;
pub mod minimax;
pub mod random;
pub mod search;

use connect_core::{Column, GameState};

/// Core trait for game-playing agents.
pub trait Agent {
    /// Get the best move for the current position.
    fn best_move(&mut self, state: &GameState) -> Option<Column>;

    /// Get the agent's name.
    fn name(&self) -> &str;
}

pub use evaluation::*;
pub use minimax::{MinimaxAgent, SearchKind, DEFAULT_DEPTH};
pub use random::RandomAgent;
pub use search::*;
