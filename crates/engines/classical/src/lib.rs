//! Classical Pente Engine
//!
//! Minimax with alpha-beta pruning over a heuristic evaluation.
//! This is the strongest difficulty tier.

mod config;
mod eval;
mod search;

use pente_core::{Engine, Position, SearchResult};

pub use config::{ConfigError, EvalWeights, SearchConfig, MAX_WEIGHT};
pub use eval::{evaluate, features, heuristic, terminal_score, Features, SCORE_INFINITY};
pub use search::{candidate_moves, pick_best_move, SearchOutcome};

/// Classical Pente engine using minimax with alpha-beta pruning.
///
/// This engine uses:
/// - Minimax search with alpha-beta pruning
/// - Neighbourhood move generation with an optional branching cap
/// - One-ply move ordering
/// - A capture/line/threat evaluation
#[derive(Debug, Clone, Default)]
pub struct ClassicalEngine {
    config: SearchConfig,
    weights: EvalWeights,
    /// Node counter for statistics
    nodes: u64,
}

impl ClassicalEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SearchConfig, weights: EvalWeights) -> Self {
        Self {
            config,
            weights,
            nodes: 0,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn weights(&self) -> &EvalWeights {
        &self.weights
    }
}

impl Engine for ClassicalEngine {
    fn search(&mut self, pos: &Position) -> SearchResult {
        let outcome = pick_best_move(pos, &self.config, &self.weights);
        self.nodes = outcome.nodes;

        SearchResult {
            best_move: outcome.best_move.map(|(mv, _)| mv),
            score: outcome
                .best_move
                .map(|(_, s)| s)
                .unwrap_or_else(|| evaluate(pos, &self.weights)),
            depth: self.config.depth.max(1),
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Classical v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
