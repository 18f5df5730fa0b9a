use connect_core::{Column, GameState, Player};

use crate::evaluation::Score;
use crate::search::{alpha_beta, minimax, SearchResult};
use crate::Agent;

/// Default look-ahead depth in plies.
pub const DEFAULT_DEPTH: u8 = 5;

/// Which search variant backs the agent. A closed set, so a selector
/// enum is all that is needed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SearchKind {
    Plain,
    AlphaBeta,
}

pub struct MinimaxAgent {
    name: String,
    depth: u8,
    kind: SearchKind,
}

impl MinimaxAgent {
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }

    pub fn with_depth(depth: u8) -> Self {
        MinimaxAgent {
            name: format!("Minimax(depth={depth})"),
            depth,
            kind: SearchKind::AlphaBeta,
        }
    }

    /// Builds an agent backed by the unpruned search. Mostly useful for
    /// comparisons; it plays identically to the pruned one.
    pub fn plain(depth: u8) -> Self {
        MinimaxAgent {
            name: format!("Minimax(plain, depth={depth})"),
            depth,
            kind: SearchKind::Plain,
        }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    fn search(&self, state: &GameState, maximizing: Player) -> SearchResult {
        match self.kind {
            SearchKind::Plain => minimax(state, self.depth, maximizing),
            SearchKind::AlphaBeta => alpha_beta(state, self.depth, maximizing),
        }
    }

    /// Scores the position for `maximizing` at the configured depth.
    pub fn decide(&self, state: &GameState, maximizing: Player) -> Score {
        self.search(state, maximizing).score
    }
}

impl Default for MinimaxAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for MinimaxAgent {
    fn best_move(&mut self, state: &GameState) -> Option<Column> {
        self.search(state, state.turn).best_move
    }

    fn name(&self) -> &str {
        &self.name
    }
}
